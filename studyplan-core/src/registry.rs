//! TaskRegistry: insertion-ordered task storage keyed by id.
//!
//! Iteration order is the order in which ids were first inserted. Re-inserting
//! an id overwrites the task in place, so ranking ties resolve the same way
//! across reloads.

use std::collections::HashMap;

use crate::task::Task;

#[derive(Debug, Default, Clone)]
pub struct TaskRegistry {
    tasks: Vec<Task>,

    // id -> position in `tasks`
    idx: HashMap<String, usize>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.idx.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.idx.get(id).map(|&i| &self.tasks[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Task> {
        match self.idx.get(id) {
            Some(&i) => self.tasks.get_mut(i),
            None => None,
        }
    }

    /// Insert or overwrite. Returns the previous task for this id, if any.
    pub fn upsert(&mut self, task: Task) -> Option<Task> {
        if let Some(&i) = self.idx.get(&task.id) {
            return Some(std::mem::replace(&mut self.tasks[i], task));
        }
        self.idx.insert(task.id.clone(), self.tasks.len());
        self.tasks.push(task);
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }
}

impl<'a> IntoIterator for &'a TaskRegistry {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
