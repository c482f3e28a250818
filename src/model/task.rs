use serde::{Deserialize, Serialize};

/// Category tag on a task. Closed set, serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Study,
    Work,
    Personal,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Study, Category::Work, Category::Personal];

    /// Display label (lowercase, matches the serialized form)
    pub fn label(self) -> &'static str {
        match self {
            Category::Study => "study",
            Category::Work => "work",
            Category::Personal => "personal",
        }
    }

    /// Next category in the fixed cycle (for the add-task selector)
    pub fn next(self) -> Category {
        match self {
            Category::Study => Category::Work,
            Category::Work => Category::Personal,
            Category::Personal => Category::Study,
        }
    }

    /// Previous category in the fixed cycle
    pub fn prev(self) -> Category {
        match self {
            Category::Study => Category::Personal,
            Category::Work => Category::Study,
            Category::Personal => Category::Work,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Study
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID, generated at creation time
    pub id: String,
    /// Task text (non-empty)
    pub text: String,
    /// Free-form time label like "2:00 pm" (non-empty)
    pub time: String,
    pub category: Category,
    pub completed: bool,
}

impl Task {
    /// Create a new incomplete task
    pub fn new(id: String, text: String, time: String, category: Category) -> Self {
        Task {
            id,
            text,
            time,
            category,
            completed: false,
        }
    }
}
