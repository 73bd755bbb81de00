use std::fmt;

use uuid::Uuid;

/// Stable identity of a task. Assigned
/// once at creation and kept across
/// edits, so holding one across a
/// delete never aliases another task.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
pub struct TaskId(Uuid);

impl TaskId {
  pub fn new() -> Self {
    Self(Uuid::new_v4())
  }
}

impl Default for TaskId {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// A host file handle that knows its
/// original file name.
pub trait NamedFile {
  fn file_name(&self) -> String;
}

#[derive(
  Debug, Clone, PartialEq,
)]
pub struct Task<F> {
  pub id:          TaskId,
  pub name:        String,
  pub description: Option<String>,
  pub file:        Option<F>,
  pub tags:        Vec<String>,
  /// Not rendered or filtered on yet;
  /// every create and edit writes
  /// `false`.
  pub completed:   bool
}

impl<F> Task<F> {
  pub fn new(
    name: impl Into<String>
  ) -> Self {
    Self {
      id:          TaskId::new(),
      name:        name.into(),
      description: None,
      file:        None,
      tags:        vec![],
      completed:   false
    }
  }

  pub fn has_tag(
    &self,
    tag: &str
  ) -> bool {
    self
      .tags
      .iter()
      .any(|value| value == tag)
  }
}

impl<F: NamedFile> Task<F> {
  pub fn file_name(
    &self
  ) -> Option<String> {
    self
      .file
      .as_ref()
      .map(NamedFile::file_name)
  }
}
