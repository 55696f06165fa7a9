pub mod core;

pub use crate::core::{
    Action, Category, Draft, DraftError, DraftField, Filter, Project, ProjectId, ViewState,
};

#[cfg(feature = "gui")]
pub mod gui;
