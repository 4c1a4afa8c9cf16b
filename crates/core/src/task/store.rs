//! File-backed task storage
//!
//! Tasks are kept in insertion order; that order is what gets persisted.
//! Sorted listings are a projection and never reorder the underlying
//! sequence.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::model::{is_valid_date, Task};
use crate::{Error, Result};

/// Sort criterion for display listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending, case-insensitive task text
    Name,
    /// Highest priority first
    Priority,
    /// Earliest due date first, undated tasks last
    DueDate,
}

/// Ordered task collection with JSON file persistence
///
/// Every mutating operation writes the full collection back to the
/// storage file before returning. Positions handed to [`edit`] and
/// [`delete`] are 1-based, matching the numbering shown in listings.
///
/// [`edit`]: TaskStore::edit
/// [`delete`]: TaskStore::delete
pub struct TaskStore {
    /// Path to the JSON file
    path: PathBuf,
    /// Tasks in insertion order
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store backed by `path` without touching the file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tasks: Vec::new(),
        }
    }

    /// Open a store and load prior state from `path`
    ///
    /// A missing file is not an error; the store starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Path of the storage file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current tasks in storage order
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Validate and append a task, then persist
    ///
    /// The text is trimmed and must be non-empty; a due date must have the
    /// `YYYY-MM-DD` shape (a blank date counts as no date). New tasks always
    /// go to the end of the sequence.
    pub fn add(&mut self, task: Task) -> Result<Task> {
        let task = validate(task)?;
        self.tasks.push(task.clone());
        self.save()?;
        Ok(task)
    }

    /// Validate a replacement task and store it at `position`, then persist
    ///
    /// The task keeps its place in storage order. Same validation as
    /// [`add`](TaskStore::add).
    pub fn edit(&mut self, position: usize, task: Task) -> Result<Task> {
        let slot = self.resolve(position)?;
        let task = validate(task)?;
        self.tasks[slot] = task.clone();
        self.save()?;
        Ok(task)
    }

    /// Remove the task at `position`, then persist
    pub fn delete(&mut self, position: usize) -> Result<Task> {
        let slot = self.resolve(position)?;
        let removed = self.tasks.remove(slot);
        self.save()?;
        Ok(removed)
    }

    /// Non-mutating sorted projection for display
    ///
    /// Each entry carries the task's 1-based storage position so callers
    /// can map a displayed row back to [`edit`](TaskStore::edit) or
    /// [`delete`](TaskStore::delete). All sorts are stable: ties keep
    /// their relative storage order.
    pub fn sorted_view(&self, key: SortKey) -> Vec<(usize, &Task)> {
        let mut view: Vec<(usize, &Task)> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| (i + 1, task))
            .collect();

        match key {
            SortKey::Name => view.sort_by_key(|(_, task)| task.text.to_lowercase()),
            SortKey::Priority => view.sort_by(|(_, a), (_, b)| b.priority.cmp(&a.priority)),
            SortKey::DueDate => view.sort_by(|(_, a), (_, b)| {
                cmp_due_dates(a.due_date.as_deref(), b.due_date.as_deref())
            }),
        }

        view
    }

    /// Write the full task sequence to the storage file
    ///
    /// Pretty-printed JSON, non-ASCII text unescaped. `fs::write` gives
    /// old-or-new file content on a crash, nothing stronger.
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.tasks)
            .map_err(|e| Error::Persistence(format!("failed to serialize tasks: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, content)?;
        debug!("saved {} tasks to {}", self.tasks.len(), self.path.display());
        Ok(())
    }

    /// Load the task sequence from the storage file
    ///
    /// Legacy files store bare strings instead of records; the shape is
    /// decided once from the first element and applies to the whole file,
    /// never per element. The in-memory sequence is only replaced after the
    /// whole file parsed.
    pub fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            self.tasks.clear();
            return Ok(());
        }

        let content = fs::read_to_string(&self.path)?;
        let records: Vec<Value> = serde_json::from_str(&content).map_err(|e| {
            Error::Persistence(format!("failed to parse {}: {}", self.path.display(), e))
        })?;

        let legacy = matches!(records.first(), Some(Value::String(_)));
        let mut tasks = Vec::with_capacity(records.len());
        if legacy {
            debug!(
                "migrating {} legacy tasks from {}",
                records.len(),
                self.path.display()
            );
            for record in records {
                match record {
                    Value::String(text) => tasks.push(Task::new(text)),
                    other => {
                        return Err(Error::MalformedRecord(format!(
                            "expected plain string in legacy task file, got {}",
                            other
                        )))
                    }
                }
            }
        } else {
            for record in records {
                tasks.push(Task::from_record(record)?);
            }
        }

        debug!("loaded {} tasks from {}", tasks.len(), self.path.display());
        self.tasks = tasks;
        Ok(())
    }

    /// Map a 1-based listing position to a vec index
    fn resolve(&self, position: usize) -> Result<usize> {
        if position == 0 || position > self.tasks.len() {
            return Err(Error::IndexOutOfRange(position));
        }
        Ok(position - 1)
    }
}

/// Undated tasks sort after every dated task
fn cmp_due_dates(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Trim the text and normalize the due date, rejecting invalid input
fn validate(mut task: Task) -> Result<Task> {
    let text = task.text.trim();
    if text.is_empty() {
        return Err(Error::EmptyTask);
    }
    task.text = text.to_string();

    task.due_date = match task.due_date.take() {
        Some(date) => {
            let date = date.trim();
            if date.is_empty() {
                None
            } else if is_valid_date(date) {
                Some(date.to_string())
            } else {
                return Err(Error::InvalidDateFormat(date.to_string()));
            }
        }
        None => None,
    };

    Ok(task)
}
