use taskpad_core::TaskId;
use taskpad_core::render::ListRow;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub title:      String,
  pub rows:       Vec<ListRow>,
  pub selected:   Option<TaskId>,
  pub active_tag: Option<String>,
  pub on_select:  Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <div class="panel list">
          <div class="header">{ &props.title }</div>
          <ul class="tasks">
              {
                  for props.rows.iter().cloned().map(|row| {
                      let id = row.id;
                      html! {
                          <TaskListRow
                              key={id.to_string()}
                              selected={props.selected == Some(id)}
                              active_tag={props.active_tag.clone()}
                              row={row}
                              on_select={props.on_select.clone()}
                          />
                      }
                  })
              }
          </ul>
      </div>
  }
}
