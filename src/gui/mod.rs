mod app;
mod message;
mod panels;
mod widgets;

pub use app::{ProjectBoardApp, StartupOptions, run};
pub use message::Message;
