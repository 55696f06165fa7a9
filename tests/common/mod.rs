mod fixtures;
#[allow(unused_imports)]
pub use fixtures::*;

// Re-export commonly used types from projboard for tests
#[allow(unused_imports)]
pub use projboard::{
    Action, Category, Draft, DraftError, DraftField, Filter, Project, ProjectId, ViewState,
};
