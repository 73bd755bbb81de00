//! View models for the three panes.
//! Every function here is a pure
//! projection of the store; the UI
//! re-renders from them after each
//! mutation.

use crate::store::TaskStore;
use crate::tags::distinct_tags;
use crate::task::{
  NamedFile,
  TaskId
};

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct ListRow {
  pub id:       TaskId,
  /// Index in the unfiltered
  /// sequence.
  pub position: usize,
  pub name:     String,
  pub tags:     Vec<String>
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TagChip {
  pub tag:    String,
  pub active: bool
}

/// What the detail pane is showing.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum Selection {
  #[default]
  Nothing,
  Task(TaskId),
  /// The previously shown task was
  /// deleted; nothing is reselected.
  Deleted
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TaskDetail {
  pub id:          TaskId,
  pub name:        String,
  pub description: Option<String>,
  pub file_name:   Option<String>
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum DetailView {
  Empty,
  Deleted,
  Task(TaskDetail)
}

pub fn list_rows<F>(
  store: &TaskStore<F>
) -> Vec<ListRow> {
  let filter = store.active_filter();
  store
    .tasks()
    .iter()
    .enumerate()
    .filter(|(_, task)| {
      filter
        .is_none_or(|tag| task.has_tag(tag))
    })
    .map(|(position, task)| {
      ListRow {
        id: task.id,
        position,
        name: task.name.clone(),
        tags: task.tags.clone()
      }
    })
    .collect()
}

pub fn tag_cloud<F>(
  store: &TaskStore<F>
) -> Vec<TagChip> {
  let active = store.active_filter();
  distinct_tags(
    store
      .tasks()
      .iter()
      .map(|task| task.tags.as_slice())
  )
  .into_iter()
  .map(|tag| {
    TagChip {
      active: active
        == Some(tag.as_str()),
      tag
    }
  })
  .collect()
}

pub fn detail_view<F: NamedFile>(
  store: &TaskStore<F>,
  selection: Selection
) -> DetailView {
  match selection {
    | Selection::Nothing => {
      DetailView::Empty
    }
    | Selection::Deleted => {
      DetailView::Deleted
    }
    | Selection::Task(id) => {
      match store.get(id) {
        | Some(task) => {
          DetailView::Task(TaskDetail {
            id,
            name: task.name.clone(),
            description: task
              .description
              .clone()
              .filter(|text| {
                !text.trim().is_empty()
              }),
            file_name: task.file_name()
          })
        }
        | None => DetailView::Deleted
      }
    }
  }
}
