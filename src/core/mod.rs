mod category;
mod project;
pub mod seed;
mod store;

pub use category::{Category, Filter, ParseCategoryError};
pub use project::{Draft, DraftError, DraftField, Project, ProjectId};
pub use store::{Action, ViewState};
