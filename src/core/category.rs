use std::{fmt, str::FromStr};

/// Label a project can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Python,
    WebDev,
    GameDev,
    #[default]
    Uncategorized,
}

impl Category {
    /// Every assignable category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Python,
        Category::WebDev,
        Category::GameDev,
        Category::Uncategorized,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Python => "PYTHON",
            Category::WebDev => "WEB DEV",
            Category::GameDev => "GAME DEV",
            Category::Uncategorized => "UNCATEGORIZED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// The grid filter: either every project, or only those in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Filter buttons in the order they are shown in the sidebar.
    pub const ALL: [Filter; 5] = [
        Filter::All,
        Filter::Only(Category::Python),
        Filter::Only(Category::WebDev),
        Filter::Only(Category::GameDev),
        Filter::Only(Category::Uncategorized),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "ALL PROJECTS",
            Filter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == category,
        }
    }
}

impl From<Category> for Filter {
    fn from(category: Category) -> Self {
        Filter::Only(category)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Filter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Filter::All.label() {
            return Ok(Filter::All);
        }
        s.parse().map(Filter::Only)
    }
}
