//! Ordered task list with a selection cursor.
//!
//! Every mutator keeps two invariants:
//! - `cursor` indexes an existing task, or is 0 when the list is empty;
//! - `next_id` is strictly greater than every id in the list.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a task on creation. Never reused.
pub type TaskId = i64;

/// Id counter for a list that has never held a task.
pub const FIRST_TASK_ID: TaskId = 1;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub done: bool,
}

impl Task {
    #[must_use]
    pub fn new(id: TaskId, name: impl Into<String>, done: bool) -> Self {
        Self {
            id,
            name: name.into(),
            done,
        }
    }
}

/// Complete persisted form of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub next_id: TaskId,
}

impl Snapshot {
    /// Snapshot of a list that has never been saved.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: FIRST_TASK_ID,
        }
    }

    /// Builds a snapshot whose id counter is consistent with `tasks`.
    ///
    /// A missing or non-positive `stored_next_id` is recomputed as the largest
    /// task id plus one (or [`FIRST_TASK_ID`] for an empty list). A positive
    /// value that would collide with an existing id is lifted the same way.
    #[must_use]
    pub fn repaired(tasks: Vec<Task>, stored_next_id: Option<TaskId>) -> Self {
        let floor = tasks
            .iter()
            .map(|task| task.id)
            .max()
            .map_or(FIRST_TASK_ID, |max| max.saturating_add(1));
        let next_id = match stored_next_id {
            Some(stored) if stored > 0 => stored.max(floor),
            _ => floor,
        };
        Self { tasks, next_id }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// In-memory task store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: TaskId,
    cursor: usize,
}

impl TaskList {
    /// Creates a store from a snapshot, with the cursor on the first task.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let Snapshot { tasks, next_id } = Snapshot::repaired(snapshot.tasks, Some(snapshot.next_id));
        Self {
            tasks,
            next_id,
            cursor: 0,
        }
    }

    /// The two entries shown before anything has been loaded.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_snapshot(Snapshot {
            tasks: vec![
                Task::new(1, "do anything", true),
                Task::new(2, "go to sleep", false),
            ],
            next_id: 3,
        })
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub const fn next_id(&self) -> TaskId {
        self.next_id
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the task under the cursor, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Task> {
        self.tasks.get(self.cursor)
    }

    /// Returns an owned copy suitable for handing to a background save.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            next_id: self.next_id,
        }
    }

    /// Appends a new open task and selects it.
    ///
    /// Blank names are rejected without consuming an id, as is any name once
    /// the id counter cannot advance. Returns the new id.
    pub fn append(&mut self, name: &str) -> Option<TaskId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = self.next_id;
        let next_id = id.checked_add(1)?;
        self.tasks.push(Task::new(id, name, false));
        self.next_id = next_id;
        self.cursor = self.tasks.len() - 1;
        Some(id)
    }

    /// Flips `done` on the selected task. Returns `false` on an empty list.
    pub fn toggle_selected(&mut self) -> bool {
        match self.tasks.get_mut(self.cursor) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => false,
        }
    }

    /// Removes the selected task, keeping the cursor on a valid entry.
    pub fn remove_selected(&mut self) -> Option<Task> {
        if self.cursor >= self.tasks.len() {
            return None;
        }
        let removed = self.tasks.remove(self.cursor);
        if self.cursor >= self.tasks.len() && self.cursor > 0 {
            self.cursor -= 1;
        }
        Some(removed)
    }

    /// Moves the cursor by `delta`, clamped to the list bounds.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.tasks.is_empty() {
            return;
        }
        let last = self.tasks.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    /// Installs a loaded snapshot wholesale and selects the first task.
    pub fn replace(&mut self, snapshot: Snapshot) {
        *self = Self::from_snapshot(snapshot);
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::seeded()
    }
}
