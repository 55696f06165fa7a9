pub mod add_project;
pub mod categories;
pub mod details;
pub mod grid;

use iced::Element;

use crate::{core::ViewState, gui::Message};

/// A region of the board. Panels hold no state of their own and are
/// re-rendered from the store on every update.
pub trait Panel {
    fn view<'a>(&self, state: &'a ViewState) -> Element<'a, Message>;
}
