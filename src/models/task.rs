//! Action item list kept in memory for the dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task identifier, unique within one list.
pub type TaskId = u64;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub due_date: NaiveDate,
    pub completed: bool,
}

impl Task {
    /// Due date as `YYYY-MM-DD`.
    pub fn due_date_string(&self) -> String {
        self.due_date.format("%Y-%m-%d").to_string()
    }

    /// Incomplete and due before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }
}

/// Due date ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Earliest first",
            SortOrder::Descending => "Latest first",
        }
    }
}

/// Ordered collection of tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// List pre-filled with the starter action items.
    pub fn with_examples() -> Self {
        let mut list = Self::new();
        let examples = [
            ("Write three blog posts on \"AI data analysis\" based on the SEO findings", (2024, 8, 15), false),
            ("Study Innovate Inc.'s pricing and draft our response", (2024, 8, 1), true),
            ("Publish a LinkedIn post about our unique features", (2024, 7, 30), false),
        ];
        for (text, (y, m, d), completed) in examples {
            if let Some(due) = NaiveDate::from_ymd_opt(y, m, d)
                && let Some(id) = list.add(text, due)
                && completed
            {
                list.toggle(id);
            }
        }
        list
    }

    /// Append a task. Blank text is ignored.
    pub fn add(&mut self, text: &str, due_date: NaiveDate) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            due_date,
            completed: false,
        });
        Some(id)
    }

    /// Flip the completion flag. Returns `false` for an unknown id.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove a task. Returns `false` for an unknown id.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks sorted by due date. Ties keep insertion order.
    pub fn sorted(&self, order: SortOrder) -> Vec<&Task> {
        let mut sorted: Vec<&Task> = self.tasks.iter().collect();
        match order {
            SortOrder::Ascending => sorted.sort_by(|a, b| a.due_date.cmp(&b.due_date)),
            SortOrder::Descending => sorted.sort_by(|a, b| b.due_date.cmp(&a.due_date)),
        }
        sorted
    }

    pub fn overdue_count(&self, today: NaiveDate) -> usize {
        self.tasks.iter().filter(|t| t.is_overdue(today)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_ignores_blank_text() {
        let mut list = TaskList::new();
        assert!(list.add("   ", date(2024, 1, 1)).is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut list = TaskList::new();
        let a = list.add("first", date(2024, 1, 1)).unwrap();
        let b = list.add("second", date(2024, 1, 2)).unwrap();
        assert!(b > a);
        assert_eq!(list.get(a).unwrap().text, "first");
        assert!(!list.get(b).unwrap().completed);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut list = TaskList::with_examples();
        let original = list.tasks().to_vec();
        for task in &original {
            assert!(list.toggle(task.id));
            assert!(list.toggle(task.id));
        }
        assert_eq!(list.tasks(), original.as_slice());
    }

    #[test]
    fn test_toggle_and_delete_unknown() {
        let mut list = TaskList::new();
        assert!(!list.toggle(99));
        assert!(!list.delete(99));
    }

    #[test]
    fn test_delete() {
        let mut list = TaskList::with_examples();
        let id = list.tasks()[1].id;
        assert!(list.delete(id));
        assert_eq!(list.len(), 2);
        assert!(list.get(id).is_none());
    }

    #[test]
    fn test_examples() {
        let list = TaskList::with_examples();
        assert_eq!(list.len(), 3);
        assert!(list.tasks()[1].completed);
        assert_eq!(list.tasks()[0].due_date_string(), "2024-08-15");
    }

    #[test]
    fn test_sort_reverses_for_distinct_dates() {
        let mut list = TaskList::new();
        list.add("b", date(2024, 5, 2));
        list.add("c", date(2024, 5, 9));
        list.add("a", date(2023, 12, 31));
        list.add("d", date(2025, 1, 1));

        let asc: Vec<TaskId> = list.sorted(SortOrder::Ascending).iter().map(|t| t.id).collect();
        let mut desc: Vec<TaskId> = list.sorted(SortOrder::Descending).iter().map(|t| t.id).collect();
        desc.reverse();
        assert_eq!(asc, desc);

        let texts: Vec<&str> = list
            .sorted(SortOrder::Ascending)
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    }

    #[test]
    fn test_overdue_matches_string_comparison() {
        let today = date(2024, 8, 1);
        let today_str = today.format("%Y-%m-%d").to_string();
        let mut list = TaskList::new();
        for (d, done) in [
            (date(2024, 7, 31), false),
            (date(2024, 7, 31), true),
            (date(2024, 8, 1), false),
            (date(2024, 8, 2), false),
            (date(2023, 12, 1), false),
        ] {
            let id = list.add("task", d).unwrap();
            if done {
                list.toggle(id);
            }
        }

        for task in list.tasks() {
            let expected = !task.completed && task.due_date_string() < today_str;
            assert_eq!(task.is_overdue(today), expected, "task due {}", task.due_date_string());
        }
        assert_eq!(list.overdue_count(today), 2);
    }
}
