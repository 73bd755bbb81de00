use tracing::{
  debug,
  trace
};

use crate::error::TaskpadError;
use crate::task::{
  Task,
  TaskId
};

/// Ordered task sequence plus the
/// active tag filter. The filter is a
/// read-time projection and never
/// reorders or drops entries.
#[derive(
  Debug, Clone, PartialEq,
)]
pub struct TaskStore<F> {
  tasks:  Vec<Task<F>>,
  filter: Option<String>
}

impl<F> Default for TaskStore<F> {
  fn default() -> Self {
    Self {
      tasks:  vec![],
      filter: None
    }
  }
}

impl<F> TaskStore<F> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn append(
    &mut self,
    task: Task<F>
  ) -> TaskId {
    let id = task.id;
    self.tasks.push(task);
    debug!(
      %id,
      position = self.tasks.len() - 1,
      "appended task"
    );
    id
  }

  /// Replaces the task stored under
  /// `id` in place. The stored id wins
  /// over whatever id `task` carries.
  pub fn replace(
    &mut self,
    id: TaskId,
    mut task: Task<F>
  ) -> Result<(), TaskpadError> {
    let position = self
      .position(id)
      .ok_or(TaskpadError::UnknownTask(
        id
      ))?;
    task.id = id;
    self.tasks[position] = task;
    debug!(%id, position, "replaced task");
    Ok(())
  }

  pub fn remove(
    &mut self,
    id: TaskId
  ) -> Result<Task<F>, TaskpadError> {
    let position = self
      .position(id)
      .ok_or(TaskpadError::UnknownTask(
        id
      ))?;
    let removed =
      self.tasks.remove(position);
    debug!(
      %id,
      position,
      remaining = self.tasks.len(),
      "removed task"
    );
    Ok(removed)
  }

  pub fn get(
    &self,
    id: TaskId
  ) -> Option<&Task<F>> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  pub fn position(
    &self,
    id: TaskId
  ) -> Option<usize> {
    self
      .tasks
      .iter()
      .position(|task| task.id == id)
  }

  pub fn tasks(&self) -> &[Task<F>] {
    &self.tasks
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn active_filter(
    &self
  ) -> Option<&str> {
    self.filter.as_deref()
  }

  /// Activates `tag`, or clears the
  /// filter when `tag` is already the
  /// active one.
  pub fn toggle_filter(
    &mut self,
    tag: &str
  ) {
    if self.filter.as_deref()
      == Some(tag)
    {
      self.filter = None;
    } else {
      self.filter = Some(tag.to_string());
    }
    trace!(filter = ?self.filter, "filter toggled");
  }

  pub fn clear_filter(&mut self) {
    self.filter = None;
  }
}
