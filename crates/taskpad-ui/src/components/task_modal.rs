use taskpad_core::config::Labels;
use taskpad_core::workspace::{
  Editor,
  EditorMode
};
use web_sys::{
  HtmlInputElement,
  HtmlTextAreaElement,
  InputEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_node_ref
};

use crate::host::PickedFile;

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
  pub editor:         Editor<PickedFile>,
  pub labels:         Labels,
  pub on_name:        Callback<String>,
  pub on_description: Callback<String>,
  pub on_tags:        Callback<String>,
  pub on_file:
    Callback<Option<PickedFile>>,
  pub on_submit:      Callback<()>,
  pub on_close:       Callback<()>
}

#[function_component(TaskModal)]
pub fn task_modal(
  props: &TaskModalProps
) -> Html {
  let name_ref = use_node_ref();

  {
    let name_ref = name_ref.clone();
    use_effect_with(
      props.editor.mode,
      move |_| {
        if let Some(input) = name_ref
          .cast::<HtmlInputElement>()
          && let Err(error) = input.focus()
        {
          tracing::debug!(
            ?error,
            "failed focusing task name"
          );
        }
        || ()
      }
    );
  }

  let labels = &props.labels;
  let draft = &props.editor.draft;
  let submit_label =
    match props.editor.mode {
      | EditorMode::Create => {
        labels.create.clone()
      }
      | EditorMode::Edit(_) => {
        labels.save.clone()
      }
    };
  let error_message = props
    .editor
    .error
    .as_ref()
    .map(|error| {
      labels.error_message(error).to_string()
    });

  let on_name = {
    let on_name = props.on_name.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_name.emit(input.value());
    })
  };
  let on_description = {
    let on_description =
      props.on_description.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlTextAreaElement =
        e.target_unchecked_into();
      on_description.emit(input.value());
    })
  };
  let on_tags = {
    let on_tags = props.on_tags.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_tags.emit(input.value());
    })
  };
  let on_file = {
    let on_file = props.on_file.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        let file = input
          .files()
          .and_then(|files| files.get(0))
          .map(PickedFile);
        on_file.emit(file);
      }
    )
  };
  let on_submit_click = props
    .on_submit
    .reform(|_: MouseEvent| ());
  let on_cancel_click = props
    .on_close
    .reform(|_: MouseEvent| ());
  let on_backdrop_click = props
    .on_close
    .reform(|_: MouseEvent| ());

  html! {
      <div class="modal-backdrop" onclick={on_backdrop_click}>
          <div class="modal modal-md" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="header">{ &labels.editor_title }</div>
              <div class="field">
                  <label>{ &labels.name_field }</label>
                  <input
                      ref={name_ref}
                      value={draft.name.clone()}
                      oninput={on_name}
                  />
              </div>
              <div class="field">
                  <label>{ &labels.description_field }</label>
                  <textarea
                      value={draft.description.clone()}
                      oninput={on_description}
                  />
              </div>
              <div class="field">
                  <label>{ &labels.file_field }</label>
                  <input type="file" onchange={on_file} />
              </div>
              <div class="field">
                  <label>{ &labels.tags_field }</label>
                  <input
                      value={draft.tags.clone()}
                      placeholder={labels.tags_placeholder.clone()}
                      oninput={on_tags}
                  />
              </div>
              {
                  if let Some(message) = error_message {
                      html! { <div class="field-error">{ message }</div> }
                  } else {
                      html! {}
                  }
              }
              <div class="footer">
                  <button
                      id="modal-cancel-btn"
                      type="button"
                      class="btn"
                      onclick={on_cancel_click}
                  >
                      { &labels.cancel }
                  </button>
                  <button
                      id="modal-save-btn"
                      type="button"
                      class="btn ok"
                      onclick={on_submit_click}
                  >
                      { submit_label }
                  </button>
              </div>
          </div>
      </div>
  }
}
