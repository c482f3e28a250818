use chrono::Utc;
use regex::Regex;

use crate::model::task::{Category, Task};

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// The four fixed default tasks, seeded when the store has no collection
pub fn default_tasks() -> Vec<Task> {
    vec![
        Task::new("1".into(), "Finish Report".into(), "10:00 am".into(), Category::Study),
        Task::new("2".into(), "Study for Exam".into(), "2:00 pm".into(), Category::Study),
        Task::new(
            "3".into(),
            "Group Project Meeting".into(),
            "4:00 pm".into(),
            Category::Work,
        ),
        Task::new("4".into(), "Gym Session".into(), "6:00 pm".into(), Category::Personal),
    ]
}

// ---------------------------------------------------------------------------
// Collection mutations
// ---------------------------------------------------------------------------

/// Flip `completed` on the task with the matching ID.
/// Returns false (no-op) when the ID is absent. Order is preserved.
pub fn toggle_completion(tasks: &mut [Task], id: &str) -> bool {
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

/// Append a new incomplete task with a fresh unique ID.
/// Returns None (collection untouched) when `text` or `time` is empty
/// after trimming.
pub fn add_task<'a>(
    tasks: &'a mut Vec<Task>,
    text: &str,
    time: &str,
    category: Category,
) -> Option<&'a Task> {
    let text = text.trim();
    let time = time.trim();
    if text.is_empty() || time.is_empty() {
        return None;
    }

    let id = generate_id(tasks);
    tasks.push(Task::new(id, text.to_string(), time.to_string(), category));
    tasks.last()
}

/// Remove the task with the matching ID (ids are unique, so at most one).
/// Returns false (no-op) when the ID is absent. Relative order of the
/// remaining tasks is preserved.
pub fn delete_task(tasks: &mut Vec<Task>, id: &str) -> bool {
    match tasks.iter().position(|t| t.id == id) {
        Some(idx) => {
            tasks.remove(idx);
            true
        }
        None => false,
    }
}

/// Generate a unique task ID from the current Unix time in milliseconds.
/// Increments on collision so two adds within the same millisecond still
/// get distinct IDs.
fn generate_id(tasks: &[Task]) -> String {
    let mut candidate = Utc::now().timestamp_millis().max(0) as u64;
    loop {
        let id = candidate.to_string();
        if !tasks.iter().any(|t| t.id == id) {
            return id;
        }
        candidate += 1;
    }
}

// ---------------------------------------------------------------------------
// View filter
// ---------------------------------------------------------------------------

/// Indices of tasks whose text matches the query, case-insensitive
/// substring. The empty query matches everything. Pure view transform;
/// the collection is untouched.
pub fn filter_tasks(tasks: &[Task], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..tasks.len()).collect();
    }
    // Escaped pattern: plain substring semantics, Unicode-aware case folding
    let re = match Regex::new(&format!("(?i){}", regex::escape(query))) {
        Ok(re) => re,
        Err(_) => return (0..tasks.len()).collect(),
    };
    tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| re.is_match(&t.text))
        .map(|(i, _)| i)
        .collect()
}
