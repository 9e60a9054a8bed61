//! Tasks the user is avoiding.
//!
//! A task carries its deadline as the raw text the user typed. The text is
//! parsed lazily by the deadline evaluator, so a half-edited or malformed
//! deadline is simply ignored rather than rejected at creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::deadline::parse_deadline;
use crate::error::{CoreError, Result, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Raw deadline text, e.g. `2026-10-19T18:00` or an RFC 3339 timestamp.
    #[serde(default)]
    pub deadline: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Create a new open task with a fresh id.
    ///
    /// Blank deadline text is stored as `None`.
    pub fn new(
        title: impl Into<String>,
        deadline: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            deadline: deadline
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            created_at,
            done: false,
        }
    }

    /// The parsed deadline, or `None` when absent or malformed.
    pub fn deadline_at(&self) -> Option<DateTime<Utc>> {
        self.deadline.as_deref().and_then(parse_deadline)
    }
}

/// Ordered task collection, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a task at the front of the list.
    ///
    /// # Errors
    /// Returns a validation error if the title is blank.
    pub fn add(&mut self, task: Task) -> Result<&Task> {
        if task.title.trim().is_empty() {
            return Err(ValidationError::Empty("title").into());
        }
        self.tasks.insert(0, task);
        Ok(&self.tasks[0])
    }

    /// Flip the `done` flag and return the new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found(id))?;
        task.done = !task.done;
        Ok(task.done)
    }

    pub fn remove(&mut self, id: &str) -> Result<Task> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| not_found(id))?;
        Ok(self.tasks.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        kind: "Task",
        id: id.to_string(),
    }
}
