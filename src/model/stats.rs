use crate::model::task::{Category, Task};

/// Aggregate counts over the task collection. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub study: usize,
    pub work: usize,
    pub personal: usize,
}

impl Stats {
    /// Compute stats from a task collection. Pure function.
    pub fn compute(tasks: &[Task]) -> Stats {
        let mut stats = Stats {
            total: tasks.len(),
            ..Default::default()
        };
        for task in tasks {
            if task.completed {
                stats.completed += 1;
            }
            match task.category {
                Category::Study => stats.study += 1,
                Category::Work => stats.work += 1,
                Category::Personal => stats.personal += 1,
            }
        }
        stats
    }

    /// Completion percentage, rounded to the nearest integer.
    /// 0 when the collection is empty.
    pub fn completion_percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.completed as f64 / self.total as f64 * 100.0).round() as u32
    }

    /// Count for a category
    pub fn category_count(&self, category: Category) -> usize {
        match category {
            Category::Study => self.study,
            Category::Work => self.work,
            Category::Personal => self.personal,
        }
    }
}
