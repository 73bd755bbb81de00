//! The owning context for one widget
//! instance: task store, detail
//! selection, the task editor modal and
//! the file viewer modal. The two
//! modals are independent; either can
//! be open while the other is.

use tracing::{
  debug,
  info,
  warn
};

use crate::config::Labels;
use crate::error::TaskpadError;
use crate::host::{
  Dialogs,
  PreviewHost
};
use crate::render::{
  self,
  DetailView,
  ListRow,
  Selection,
  TagChip
};
use crate::store::TaskStore;
use crate::tags::{
  join_tags,
  split_tags
};
use crate::task::{
  NamedFile,
  Task,
  TaskId
};
use crate::viewer::{
  FileViewer,
  Preview
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum EditorMode {
  Create,
  Edit(TaskId)
}

/// Raw form contents, exactly as typed.
#[derive(
  Debug, Clone, PartialEq,
)]
pub struct TaskDraft<F> {
  pub name:        String,
  pub description: String,
  pub tags:        String,
  pub file:        Option<F>
}

impl<F> Default for TaskDraft<F> {
  fn default() -> Self {
    Self {
      name:        String::new(),
      description: String::new(),
      tags:        String::new(),
      file:        None
    }
  }
}

impl<F> TaskDraft<F> {
  fn from_task(task: &Task<F>) -> Self {
    Self {
      name:        task.name.clone(),
      description: task
        .description
        .clone()
        .unwrap_or_default(),
      tags:        join_tags(&task.tags),
      file:        None
    }
  }

  fn build(
    &self
  ) -> Result<Task<F>, TaskpadError>
  where
    F: Clone
  {
    let name = self.name.trim();
    if name.is_empty() {
      return Err(TaskpadError::EmptyName);
    }

    let description =
      self.description.trim();
    let mut task = Task::new(name);
    task.description =
      (!description.is_empty())
        .then(|| description.to_string());
    task.tags = split_tags(&self.tags);
    task.file = self.file.clone();
    Ok(task)
  }
}

#[derive(
  Debug, Clone, PartialEq,
)]
pub struct Editor<F> {
  pub mode:  EditorMode,
  pub draft: TaskDraft<F>,
  /// Last rejected submit, cleared on
  /// the next edit of the draft.
  pub error: Option<TaskpadError>
}

#[derive(
  Debug, Clone, PartialEq,
)]
pub struct Workspace<F> {
  store:      TaskStore<F>,
  selection:  Selection,
  editor:     Option<Editor<F>>,
  viewer:     FileViewer,
  panel_open: bool
}

impl<F> Default for Workspace<F> {
  fn default() -> Self {
    Self::new(true)
  }
}

impl<F> Workspace<F> {
  pub fn new(panel_open: bool) -> Self {
    Self {
      store: TaskStore::new(),
      selection: Selection::Nothing,
      editor: None,
      viewer: FileViewer::new(),
      panel_open
    }
  }

  pub fn store(&self) -> &TaskStore<F> {
    &self.store
  }

  pub fn selection(&self) -> Selection {
    self.selection
  }

  pub fn editor(
    &self
  ) -> Option<&Editor<F>> {
    self.editor.as_ref()
  }

  pub fn preview(
    &self
  ) -> Option<&Preview> {
    self.viewer.current()
  }

  pub fn panel_open(&self) -> bool {
    self.panel_open
  }

  pub fn toggle_panel(&mut self) {
    self.panel_open = !self.panel_open;
    debug!(panel_open = self.panel_open, "task panel toggled");
  }

  pub fn list_rows(&self) -> Vec<ListRow> {
    render::list_rows(&self.store)
  }

  pub fn tag_cloud(&self) -> Vec<TagChip> {
    render::tag_cloud(&self.store)
  }

  pub fn detail_view(&self) -> DetailView
  where
    F: NamedFile
  {
    render::detail_view(
      &self.store,
      self.selection
    )
  }

  pub fn select(
    &mut self,
    id: TaskId
  ) -> Result<(), TaskpadError> {
    if self.store.get(id).is_none() {
      return Err(TaskpadError::UnknownTask(
        id
      ));
    }
    self.selection = Selection::Task(id);
    debug!(%id, "task selected");
    Ok(())
  }

  pub fn toggle_filter(
    &mut self,
    tag: &str
  ) {
    self.store.toggle_filter(tag);
    debug!(
      filter = ?self.store.active_filter(),
      "tag filter changed"
    );
  }

  pub fn reset_filter(&mut self) {
    self.store.clear_filter();
    debug!("tag filter reset");
  }

  pub fn open_create(&mut self) {
    self.editor = Some(Editor {
      mode:  EditorMode::Create,
      draft: TaskDraft::default(),
      error: None
    });
    debug!("editor opened for a new task");
  }

  /// Opens the editor pre-filled from
  /// `id`. The file field starts empty:
  /// saving without picking a file
  /// again drops the attachment.
  pub fn open_edit(
    &mut self,
    id: TaskId
  ) -> Result<(), TaskpadError> {
    let task = self
      .store
      .get(id)
      .ok_or(TaskpadError::UnknownTask(
        id
      ))?;
    self.editor = Some(Editor {
      mode:  EditorMode::Edit(id),
      draft: TaskDraft::from_task(task),
      error: None
    });
    debug!(%id, "editor opened for an existing task");
    Ok(())
  }

  pub fn close_editor(&mut self) {
    if self.editor.take().is_some() {
      debug!("editor closed");
    }
  }

  pub fn set_draft_name(
    &mut self,
    value: String
  ) {
    self.update_draft(|draft| {
      draft.name = value;
    });
  }

  pub fn set_draft_description(
    &mut self,
    value: String
  ) {
    self.update_draft(|draft| {
      draft.description = value;
    });
  }

  pub fn set_draft_tags(
    &mut self,
    value: String
  ) {
    self.update_draft(|draft| {
      draft.tags = value;
    });
  }

  pub fn set_draft_file(
    &mut self,
    file: Option<F>
  ) {
    self.update_draft(|draft| {
      draft.file = file;
    });
  }

  fn update_draft(
    &mut self,
    apply: impl FnOnce(&mut TaskDraft<F>)
  ) {
    if let Some(editor) =
      self.editor.as_mut()
    {
      apply(&mut editor.draft);
      editor.error = None;
    }
  }

  /// Validates the draft and appends or
  /// replaces the task. A rejected draft
  /// keeps the editor open with the
  /// error attached.
  #[tracing::instrument(skip_all)]
  pub fn submit(
    &mut self
  ) -> Result<TaskId, TaskpadError>
  where
    F: Clone
  {
    let editor = self
      .editor
      .as_mut()
      .ok_or(TaskpadError::EditorClosed)?;

    let task =
      match editor.draft.build() {
        | Ok(task) => task,
        | Err(error) => {
          warn!(%error, "task draft rejected");
          editor.error =
            Some(error.clone());
          return Err(error);
        }
      };

    let id = match editor.mode {
      | EditorMode::Create => {
        self.store.append(task)
      }
      | EditorMode::Edit(id) => {
        if let Err(error) =
          self.store.replace(id, task)
        {
          editor.error =
            Some(error.clone());
          return Err(error);
        }
        id
      }
    };

    info!(
      %id,
      tasks = self.store.len(),
      "task saved"
    );
    self.editor = None;
    self.selection = Selection::Task(id);
    Ok(id)
  }

  /// Removes `id` after the user
  /// confirms. Returns whether anything
  /// was removed.
  #[tracing::instrument(skip_all, fields(%id))]
  pub fn delete<D>(
    &mut self,
    id: TaskId,
    dialogs: &D,
    labels: &Labels
  ) -> Result<bool, TaskpadError>
  where
    D: Dialogs + ?Sized
  {
    if self.store.get(id).is_none() {
      return Err(TaskpadError::UnknownTask(
        id
      ));
    }

    if !dialogs
      .confirm(&labels.confirm_delete)
    {
      info!("task deletion canceled");
      return Ok(false);
    }

    self.store.remove(id)?;
    self.selection = Selection::Deleted;
    if matches!(
      self.editor.as_ref().map(|editor| editor.mode),
      Some(EditorMode::Edit(edited)) if edited == id
    ) {
      self.editor = None;
    }
    info!(
      remaining = self.store.len(),
      "task deleted"
    );
    Ok(true)
  }

  /// Shows the file attached to `id`. A
  /// preview failure is reported through
  /// `host` and leaves all state as it
  /// was.
  #[tracing::instrument(skip_all, fields(%id))]
  pub fn open_attachment<H>(
    &mut self,
    id: TaskId,
    host: &H,
    labels: &Labels
  ) -> Result<(), TaskpadError>
  where
    H: PreviewHost<File = F>
      + Dialogs
      + ?Sized,
    F: NamedFile
  {
    let file = self
      .store
      .get(id)
      .ok_or(TaskpadError::UnknownTask(
        id
      ))?
      .file
      .as_ref()
      .ok_or(TaskpadError::NoAttachment(
        id
      ))?;

    match self.viewer.open(host, file) {
      | Ok(preview) => {
        info!(file_name = %preview.file_name, "file viewer opened");
        Ok(())
      }
      | Err(error) => {
        host.notify(&labels.preview_failed);
        Err(error)
      }
    }
  }

  pub fn close_viewer<H>(
    &mut self,
    host: &H
  ) where
    H: PreviewHost + ?Sized
  {
    self.viewer.close(host);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(
    Debug, Clone, PartialEq,
  )]
  struct Doc(String);

  impl NamedFile for Doc {
    fn file_name(&self) -> String {
      self.0.clone()
    }
  }

  struct Always(bool);

  impl Dialogs for Always {
    fn confirm(
      &self,
      _prompt: &str
    ) -> bool {
      self.0
    }

    fn notify(&self, _message: &str) {}
  }

  fn create(
    ws: &mut Workspace<Doc>,
    name: &str,
    tags: &str
  ) -> TaskId {
    ws.open_create();
    ws.set_draft_name(name.to_string());
    ws.set_draft_tags(tags.to_string());
    ws.submit().expect("valid draft")
  }

  #[test]
  fn create_appends_selects_and_closes_editor(
  ) {
    let mut ws = Workspace::<Doc>::default();
    let id = create(&mut ws, "  Plan release ", "infra, design");

    assert!(ws.editor().is_none());
    assert_eq!(
      ws.selection(),
      Selection::Task(id)
    );
    let task =
      ws.store().get(id).expect("stored");
    assert_eq!(task.name, "Plan release");
    assert_eq!(task.description, None);
    assert!(!task.completed);
  }

  #[test]
  fn blank_name_keeps_editor_open_with_error(
  ) {
    let mut ws = Workspace::<Doc>::default();
    ws.open_create();
    ws.set_draft_name("   ".to_string());

    assert_eq!(
      ws.submit(),
      Err(TaskpadError::EmptyName)
    );
    assert!(ws.store().is_empty());
    let editor =
      ws.editor().expect("still open");
    assert_eq!(
      editor.error,
      Some(TaskpadError::EmptyName)
    );

    ws.set_draft_name("ok".to_string());
    assert_eq!(
      ws.editor()
        .and_then(|editor| editor.error.clone()),
      None
    );
  }

  #[test]
  fn submit_without_editor_is_rejected() {
    let mut ws = Workspace::<Doc>::default();
    assert_eq!(
      ws.submit(),
      Err(TaskpadError::EditorClosed)
    );
  }

  #[test]
  fn edit_prefills_and_replaces_in_place() {
    let mut ws = Workspace::<Doc>::default();
    create(&mut ws, "first", "");
    let id = create(&mut ws, "second", "x,y");
    create(&mut ws, "third", "");

    ws.open_edit(id).expect("known task");
    let editor = ws.editor().expect("open");
    assert_eq!(
      editor.mode,
      EditorMode::Edit(id)
    );
    assert_eq!(editor.draft.tags, "x, y");
    assert_eq!(editor.draft.name, "second");

    ws.set_draft_description(
      " details ".to_string()
    );
    let saved =
      ws.submit().expect("resubmit");

    assert_eq!(saved, id);
    assert_eq!(ws.store().position(id), Some(1));
    let task =
      ws.store().get(id).expect("stored");
    assert_eq!(task.tags, vec!["x", "y"]);
    assert_eq!(
      task.description.as_deref(),
      Some("details")
    );
  }

  #[test]
  fn edit_without_new_file_drops_attachment(
  ) {
    let mut ws = Workspace::<Doc>::default();
    ws.open_create();
    ws.set_draft_name("a".to_string());
    ws.set_draft_file(Some(Doc(
      "a.txt".to_string()
    )));
    let id = ws.submit().expect("create");
    assert!(
      ws.store()
        .get(id)
        .is_some_and(|task| task.file.is_some())
    );

    ws.open_edit(id).expect("edit");
    ws.submit().expect("save");
    assert!(
      ws.store()
        .get(id)
        .is_some_and(|task| task.file.is_none())
    );
  }

  #[test]
  fn declined_delete_changes_nothing() {
    let mut ws = Workspace::<Doc>::default();
    let id = create(&mut ws, "keep", "");

    let removed = ws
      .delete(id, &Always(false), &Labels::default())
      .expect("known task");

    assert!(!removed);
    assert_eq!(ws.store().len(), 1);
    assert_eq!(
      ws.selection(),
      Selection::Task(id)
    );
  }

  #[test]
  fn confirmed_delete_shows_placeholder() {
    let mut ws = Workspace::<Doc>::default();
    let id = create(&mut ws, "gone", "");

    let removed = ws
      .delete(id, &Always(true), &Labels::default())
      .expect("known task");

    assert!(removed);
    assert!(ws.store().is_empty());
    assert_eq!(
      ws.detail_view(),
      DetailView::Deleted
    );
  }

  #[test]
  fn deleting_edited_task_closes_editor() {
    let mut ws = Workspace::<Doc>::default();
    let id = create(&mut ws, "gone", "");
    ws.open_edit(id).expect("edit");

    ws.delete(id, &Always(true), &Labels::default())
      .expect("delete");
    assert!(ws.editor().is_none());
  }

  #[test]
  fn reopening_editor_starts_from_empty_draft(
  ) {
    let mut ws = Workspace::<Doc>::default();
    let id = create(&mut ws, "kept", "x");

    ws.open_create();
    ws.set_draft_name("half".to_string());
    ws.close_editor();
    assert!(ws.editor().is_none());
    assert_eq!(ws.store().len(), 1);
    assert_eq!(
      ws.selection(),
      Selection::Task(id)
    );

    ws.open_create();
    let editor = ws.editor().expect("open");
    assert_eq!(
      editor.mode,
      EditorMode::Create
    );
    assert_eq!(
      editor.draft,
      TaskDraft::default()
    );

    ws.open_edit(id).expect("edit");
    ws.open_create();
    let editor = ws.editor().expect("open");
    assert_eq!(
      editor.mode,
      EditorMode::Create
    );
    assert_eq!(
      editor.draft,
      TaskDraft::default()
    );
    assert_eq!(
      ws.store()
        .get(id)
        .map(|task| task.name.as_str()),
      Some("kept")
    );
  }

  #[test]
  fn select_rejects_unknown_task() {
    let mut ws = Workspace::<Doc>::default();
    let missing = TaskId::new();
    assert_eq!(
      ws.select(missing),
      Err(TaskpadError::UnknownTask(
        missing
      ))
    );
    assert_eq!(
      ws.selection(),
      Selection::Nothing
    );
  }

  #[test]
  fn panel_toggle_flips_visibility() {
    let mut ws = Workspace::<Doc>::new(false);
    assert!(!ws.panel_open());
    ws.toggle_panel();
    assert!(ws.panel_open());
  }
}
