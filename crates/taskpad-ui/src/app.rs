use std::cell::RefCell;
use std::rc::Rc;

use taskpad_core::TaskId;
use taskpad_core::host::PreviewHost;
use taskpad_core::render::Selection;
use taskpad_core::Workspace;
use yew::{
  Callback,
  Html,
  UseStateHandle,
  classes,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_state
};

use crate::components::{
  Details,
  FileViewerModal,
  GlobalActions,
  TagCloud,
  TaskList,
  TaskModal
};
use crate::config::load_widget_config;
use crate::host::{
  BrowserHost,
  PickedFile
};

type TaskWorkspace =
  Workspace<PickedFile>;

/// Applies `update` to a copy of the
/// current workspace and publishes it,
/// which re-renders every pane from the
/// new state.
fn update_workspace(
  workspace: &UseStateHandle<
    TaskWorkspace
  >,
  update: impl FnOnce(&mut TaskWorkspace)
) {
  let mut next = (**workspace).clone();
  update(&mut next);
  workspace.set(next);
}

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_widget_config);
  let workspace = {
    let panel_open =
      config.ui.panel_open;
    use_state(move || {
      TaskWorkspace::new(panel_open)
    })
  };
  let live_preview: Rc<
    RefCell<Option<String>>
  > = use_mut_ref(|| None);
  *live_preview.borrow_mut() = workspace
    .preview()
    .map(|preview| preview.href.clone());

  {
    let live_preview =
      live_preview.clone();
    use_effect_with((), move |_| {
      tracing::info!(
        "taskpad widget mounted"
      );
      move || {
        if let Some(href) =
          live_preview.borrow_mut().take()
        {
          BrowserHost.release(&href);
        }
      }
    });
  }

  let on_toggle_panel = {
    let workspace = workspace.clone();
    Callback::from(move |()| {
      update_workspace(
        &workspace,
        TaskWorkspace::toggle_panel
      );
    })
  };

  let on_add = {
    let workspace = workspace.clone();
    Callback::from(move |()| {
      update_workspace(
        &workspace,
        TaskWorkspace::open_create
      );
    })
  };

  let on_reset_filter = {
    let workspace = workspace.clone();
    Callback::from(move |()| {
      update_workspace(
        &workspace,
        TaskWorkspace::reset_filter
      );
    })
  };

  let on_toggle_tag = {
    let workspace = workspace.clone();
    Callback::from(move |tag: String| {
      update_workspace(
        &workspace,
        |next| next.toggle_filter(&tag)
      );
    })
  };

  let on_select = {
    let workspace = workspace.clone();
    Callback::from(move |id: TaskId| {
      update_workspace(
        &workspace,
        |next| {
          if let Err(error) =
            next.select(id)
          {
            tracing::warn!(%error, "task selection failed");
          }
        }
      );
    })
  };

  let on_edit = {
    let workspace = workspace.clone();
    Callback::from(move |id: TaskId| {
      update_workspace(
        &workspace,
        |next| {
          if let Err(error) =
            next.open_edit(id)
          {
            tracing::warn!(%error, "cannot edit task");
          }
        }
      );
    })
  };

  let on_delete = {
    let workspace = workspace.clone();
    let config = config.clone();
    Callback::from(move |id: TaskId| {
      update_workspace(
        &workspace,
        |next| {
          if let Err(error) = next.delete(
            id,
            &BrowserHost,
            &config.labels
          ) {
            tracing::warn!(%error, "task deletion failed");
          }
        }
      );
    })
  };

  let on_open_file = {
    let workspace = workspace.clone();
    let config = config.clone();
    Callback::from(move |id: TaskId| {
      update_workspace(
        &workspace,
        |next| {
          if let Err(error) = next
            .open_attachment(
              id,
              &BrowserHost,
              &config.labels
            )
          {
            tracing::warn!(%error, "file preview failed");
          }
        }
      );
    })
  };

  let on_close_viewer = {
    let workspace = workspace.clone();
    Callback::from(move |()| {
      update_workspace(
        &workspace,
        |next| {
          next.close_viewer(&BrowserHost);
        }
      );
    })
  };

  let on_draft_name = {
    let workspace = workspace.clone();
    Callback::from(move |value: String| {
      update_workspace(
        &workspace,
        |next| next.set_draft_name(value)
      );
    })
  };

  let on_draft_description = {
    let workspace = workspace.clone();
    Callback::from(move |value: String| {
      update_workspace(
        &workspace,
        |next| {
          next.set_draft_description(value);
        }
      );
    })
  };

  let on_draft_tags = {
    let workspace = workspace.clone();
    Callback::from(move |value: String| {
      update_workspace(
        &workspace,
        |next| next.set_draft_tags(value)
      );
    })
  };

  let on_draft_file = {
    let workspace = workspace.clone();
    Callback::from(
      move |file: Option<PickedFile>| {
        update_workspace(
          &workspace,
          |next| next.set_draft_file(file)
        );
      }
    )
  };

  let on_submit = {
    let workspace = workspace.clone();
    Callback::from(move |()| {
      update_workspace(
        &workspace,
        |next| {
          if let Err(error) = next.submit()
          {
            tracing::warn!(%error, "task submit rejected");
          }
        }
      );
    })
  };

  let on_close_editor = {
    let workspace = workspace.clone();
    Callback::from(move |()| {
      update_workspace(
        &workspace,
        TaskWorkspace::close_editor
      );
    })
  };

  let labels = &config.labels;
  let selected =
    match workspace.selection() {
      | Selection::Task(id) => Some(id),
      | Selection::Nothing
      | Selection::Deleted => None
    };

  html! {
      <div class="taskpad">
          <GlobalActions
              toggle_panel_label={labels.toggle_panel.clone()}
              add_label={labels.add_task.clone()}
              reset_label={labels.reset_filter.clone()}
              filter_active={workspace.store().active_filter().is_some()}
              on_toggle_panel={on_toggle_panel}
              on_add={on_add}
              on_reset_filter={on_reset_filter}
          />
          <div class={classes!("task-panel", workspace.panel_open().then_some("show"))}>
              <TagCloud
                  title={labels.tags_title.clone()}
                  chips={workspace.tag_cloud()}
                  on_toggle={on_toggle_tag}
              />
              <TaskList
                  title={labels.tasks_title.clone()}
                  rows={workspace.list_rows()}
                  selected={selected}
                  active_tag={workspace.store().active_filter().map(str::to_string)}
                  on_select={on_select}
              />
          </div>
          <Details
              view={workspace.detail_view()}
              labels={labels.clone()}
              on_edit={on_edit}
              on_delete={on_delete}
              on_open_file={on_open_file}
          />
          {
              if let Some(editor) = workspace.editor() {
                  html! {
                      <TaskModal
                          editor={editor.clone()}
                          labels={labels.clone()}
                          on_name={on_draft_name}
                          on_description={on_draft_description}
                          on_tags={on_draft_tags}
                          on_file={on_draft_file}
                          on_submit={on_submit}
                          on_close={on_close_editor}
                      />
                  }
              } else {
                  html! {}
              }
          }
          {
              if let Some(preview) = workspace.preview() {
                  html! {
                      <FileViewerModal
                          preview={preview.clone()}
                          labels={labels.clone()}
                          on_close={on_close_viewer}
                      />
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
