use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct GlobalActionsProps {
  pub toggle_panel_label: String,
  pub add_label:          String,
  pub reset_label:        String,
  pub filter_active:      bool,
  pub on_toggle_panel:    Callback<()>,
  pub on_add:             Callback<()>,
  pub on_reset_filter:    Callback<()>
}

#[function_component(GlobalActions)]
pub fn global_actions(
  props: &GlobalActionsProps
) -> Html {
  let on_toggle_panel =
    props.on_toggle_panel.clone();
  let on_add = props.on_add.clone();
  let on_reset_filter =
    props.on_reset_filter.clone();

  html! {
      <div class="actions global-actions">
          <button class="btn" onclick={move |_| on_toggle_panel.emit(())}>
              { &props.toggle_panel_label }
          </button>
          <button id="add-task-btn" class="btn ok" onclick={move |_| on_add.emit(())}>
              { &props.add_label }
          </button>
          <button
              class="btn"
              disabled={!props.filter_active}
              onclick={move |_| on_reset_filter.emit(())}
          >
              { &props.reset_label }
          </button>
      </div>
  }
}
