use std::fmt;

use super::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: Category,
}

impl Project {
    pub fn new(id: u32, title: &str, description: &str, category: Category) -> Self {
        Self {
            id: ProjectId(id),
            title: title.to_string(),
            description: description.to_string(),
            category,
        }
    }
}

/// In-progress input of the add-project form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub category: Category,
}

/// A single field update of a [`Draft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Title(String),
    Description(String),
    Category(Category),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("project title is required")]
    EmptyTitle,
    #[error("project description is required")]
    EmptyDescription,
}

impl Draft {
    pub fn set(&mut self, field: DraftField) {
        match field {
            DraftField::Title(title) => self.title = title,
            DraftField::Description(description) => self.description = description,
            DraftField::Category(category) => self.category = category,
        }
    }

    /// Only emptiness is checked; whitespace-only text is accepted.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.description.is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        Ok(())
    }

    pub(crate) fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
        }
    }
}
