use anyhow::Context;
use serde::Deserialize;
use tracing::{
  debug,
  info
};

use crate::error::TaskpadError;

/// Widget configuration. Every field
/// has a default so a host page only
/// needs to spell out what it changes.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
  Deserialize,
)]
#[serde(default)]
pub struct WidgetConfig {
  pub ui:     UiConfig,
  pub labels: Labels
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct UiConfig {
  /// Whether the task panel starts
  /// expanded.
  pub panel_open: bool
}

impl Default for UiConfig {
  fn default() -> Self {
    Self { panel_open: true }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct Labels {
  pub tasks_title:      String,
  pub toggle_panel:     String,
  pub add_task:         String,
  pub reset_filter:     String,
  pub tags_title:       String,
  pub details_title:    String,
  pub editor_title:     String,
  pub name_field:       String,
  pub description_field: String,
  pub tags_field:       String,
  pub tags_placeholder: String,
  pub file_field:       String,
  pub create:           String,
  pub save:             String,
  pub cancel:           String,
  pub edit:             String,
  pub delete:           String,
  pub description_heading: String,
  pub files_heading:    String,
  pub no_description:   String,
  pub no_files:         String,
  pub no_selection:     String,
  pub task_deleted:     String,
  pub confirm_delete:   String,
  pub empty_name:       String,
  pub task_missing:     String,
  pub preview_failed:   String,
  pub viewer_title:     String,
  pub download:         String,
  pub close:            String
}

impl Default for Labels {
  fn default() -> Self {
    Self {
      tasks_title:         "Tasks"
        .to_string(),
      toggle_panel:        "Task list"
        .to_string(),
      add_task:            "Add task"
        .to_string(),
      reset_filter:        "Reset filter"
        .to_string(),
      tags_title:          "Tags"
        .to_string(),
      details_title:       "Details"
        .to_string(),
      editor_title:        "Task"
        .to_string(),
      name_field:          "Name"
        .to_string(),
      description_field:   "Description"
        .to_string(),
      tags_field:          "Tags"
        .to_string(),
      tags_placeholder:    "comma, separated, tags"
        .to_string(),
      file_field:          "File"
        .to_string(),
      create:              "Create"
        .to_string(),
      save:                "Save"
        .to_string(),
      cancel:              "Cancel"
        .to_string(),
      edit:                "Edit"
        .to_string(),
      delete:              "Delete"
        .to_string(),
      description_heading: "Description:"
        .to_string(),
      files_heading:       "Attached files:"
        .to_string(),
      no_description:      "No description"
        .to_string(),
      no_files:            "No files"
        .to_string(),
      no_selection:        "Select a task to see its details."
        .to_string(),
      task_deleted:        "Task deleted. Select another task."
        .to_string(),
      confirm_delete:      "Delete this task?"
        .to_string(),
      empty_name:          "Task name is required."
        .to_string(),
      task_missing:        "This task no longer exists."
        .to_string(),
      preview_failed:      "Could not open the file."
        .to_string(),
      viewer_title:        "File preview"
        .to_string(),
      download:            "Download"
        .to_string(),
      close:               "Close"
        .to_string()
    }
  }
}

impl Labels {
  /// User-facing text for `error`.
  pub fn error_message(
    &self,
    error: &TaskpadError
  ) -> &str {
    match error {
      | TaskpadError::EmptyName => {
        &self.empty_name
      }
      | TaskpadError::UnknownTask(_)
      | TaskpadError::EditorClosed => {
        &self.task_missing
      }
      | TaskpadError::NoAttachment(_)
      | TaskpadError::Preview(_) => {
        &self.preview_failed
      }
    }
  }
}

impl WidgetConfig {
  #[tracing::instrument(skip_all)]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let cfg: Self = toml::from_str(text)
      .context(
        "failed to parse widget \
         configuration"
      )?;
    debug!(?cfg.ui, "parsed widget configuration");
    Ok(cfg)
  }

  /// Parses `override_text` when the
  /// host page supplied one, falling
  /// back to the defaults otherwise.
  pub fn load(
    override_text: Option<&str>
  ) -> anyhow::Result<Self> {
    match override_text
      .map(str::trim)
      .filter(|text| !text.is_empty())
    {
      | Some(text) => {
        info!("loading widget configuration override");
        Self::from_toml_str(text)
      }
      | None => {
        debug!(
          "no configuration override; \
           using defaults"
        );
        Ok(Self::default())
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn partial_override_keeps_other_defaults(
  ) {
    let cfg = WidgetConfig::from_toml_str(
      r#"
        [ui]
        panel_open = false

        [labels]
        create = "Создать"
        save = "Сохранить"
      "#
    )
    .expect("valid config");

    assert!(!cfg.ui.panel_open);
    assert_eq!(cfg.labels.create, "Создать");
    assert_eq!(cfg.labels.save, "Сохранить");
    assert_eq!(
      cfg.labels.no_files,
      Labels::default().no_files
    );
  }

  #[test]
  fn blank_override_yields_defaults() {
    let cfg = WidgetConfig::load(Some(
      "  \n "
    ))
    .expect("defaults");
    assert_eq!(cfg, WidgetConfig::default());
    assert!(cfg.ui.panel_open);
  }

  #[test]
  fn malformed_override_is_an_error() {
    let err = WidgetConfig::load(Some(
      "[ui\npanel_open = 3"
    ))
    .expect_err("broken toml");
    assert!(
      err
        .to_string()
        .contains("widget configuration")
    );
  }

  #[test]
  fn editor_errors_use_configured_labels() {
    let cfg = WidgetConfig::from_toml_str(
      r#"
        [labels]
        empty_name = "Укажите название"
        task_missing = "Задача удалена"
      "#
    )
    .expect("valid config");
    let labels = &cfg.labels;

    assert_eq!(
      labels.error_message(
        &TaskpadError::EmptyName
      ),
      "Укажите название"
    );
    assert_eq!(
      labels.error_message(
        &TaskpadError::UnknownTask(
          crate::TaskId::new()
        )
      ),
      "Задача удалена"
    );
    assert_eq!(
      labels.error_message(
        &TaskpadError::Preview(
          "denied".to_string()
        )
      ),
      Labels::default().preview_failed
    );
  }
}
