use taskpad_core::TaskId;
use taskpad_core::render::ListRow;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:        ListRow,
  pub selected:   bool,
  /// Tag the list is currently filtered
  /// by; its badge is highlighted.
  pub active_tag: Option<String>,
  pub on_select:  Callback<TaskId>
}

fn tag_badge(
  tag: &str,
  active: bool
) -> Html {
  html! {
      <span class={classes!("badge", "tag-badge", active.then_some("active"))}>{ format!("#{tag}") }</span>
  }
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.row.id;
  let class = if props.selected {
    "row selected"
  } else {
    "row"
  };
  let on_select =
    props.on_select.clone();
  let active_tag =
    props.active_tag.as_deref();

  html! {
      <li class={class} data-position={props.row.position.to_string()} onclick={move |_| on_select.emit(id)}>
          <div class="task-name">{ &props.row.name }</div>
          {
              if props.row.tags.is_empty() {
                  html! {}
              } else {
                  html! {
                      <div class="task-tags">
                          {
                              for props.row.tags.iter().map(|tag| {
                                  tag_badge(tag, active_tag == Some(tag.as_str()))
                              })
                          }
                      </div>
                  }
              }
          }
      </li>
  }
}
