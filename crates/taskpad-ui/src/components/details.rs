use taskpad_core::TaskId;
use taskpad_core::config::Labels;
use taskpad_core::render::DetailView;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DetailsProps {
  pub view:         DetailView,
  pub labels:       Labels,
  pub on_edit:      Callback<TaskId>,
  pub on_delete:    Callback<TaskId>,
  pub on_open_file: Callback<TaskId>
}

#[function_component(Details)]
pub fn details(
  props: &DetailsProps
) -> Html {
  let labels = &props.labels;
  let task = match &props.view {
    | DetailView::Task(task) => task,
    | DetailView::Empty => {
      return placeholder(
        &labels.details_title,
        "no-task-selected",
        &labels.no_selection
      );
    }
    | DetailView::Deleted => {
      return placeholder(
        &labels.details_title,
        "no-task-selected deleted",
        &labels.task_deleted
      );
    }
  };

  let id = task.id;
  let on_edit = props.on_edit.clone();
  let on_delete =
    props.on_delete.clone();
  let on_open_file =
    props.on_open_file.clone();

  html! {
      <div class="panel">
          <div class="header">{ &labels.details_title }</div>
          <div class="details">
              <div class="task-header">
                  <h3 class="task-title">{ &task.name }</h3>
                  <div class="actions">
                      <button
                          class="btn"
                          onclick={move |e: MouseEvent| {
                              e.stop_propagation();
                              on_edit.emit(id);
                          }}
                      >
                          { &labels.edit }
                      </button>
                      <button
                          class="btn danger"
                          onclick={move |e: MouseEvent| {
                              e.stop_propagation();
                              on_delete.emit(id);
                          }}
                      >
                          { &labels.delete }
                      </button>
                  </div>
              </div>

              <div class="task-description">
                  <h4>{ &labels.description_heading }</h4>
                  <div class="description-text">
                      { task.description.clone().unwrap_or_else(|| labels.no_description.clone()) }
                  </div>
              </div>

              <div class="task-files">
                  <h4>{ &labels.files_heading }</h4>
                  <div class="files-list">
                      {
                          match &task.file_name {
                              Some(file_name) => html! {
                                  <div
                                      class="file-item"
                                      onclick={move |e: MouseEvent| {
                                          e.stop_propagation();
                                          on_open_file.emit(id);
                                      }}
                                  >
                                      <span class="file-icon">{ "📄" }</span>
                                      <span>{ file_name }</span>
                                  </div>
                              },
                              None => html! {
                                  <div class="no-files">{ &labels.no_files }</div>
                              },
                          }
                      }
                  </div>
              </div>
          </div>
      </div>
  }
}

fn placeholder(
  title: &str,
  class: &'static str,
  message: &str
) -> Html {
  html! {
      <div class="panel">
          <div class="header">{ title }</div>
          <div class="details">
              <div class={class}>
                  <p>{ message }</p>
              </div>
          </div>
      </div>
  }
}
