use thiserror::Error;

use crate::task::TaskId;

#[derive(
  Debug, Error, Clone, PartialEq, Eq,
)]
pub enum TaskpadError {
  /// Submitted draft had no name left
  /// after trimming.
  #[error("task name must not be empty")]
  EmptyName,
  #[error("task {0} not found")]
  UnknownTask(TaskId),
  #[error("task {0} has no attached file")]
  NoAttachment(TaskId),
  /// The host could not build a
  /// previewable reference for a file.
  #[error("failed to open file preview: {0}")]
  Preview(String),
  #[error("task editor is not open")]
  EditorClosed
}
