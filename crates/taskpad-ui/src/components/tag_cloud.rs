use taskpad_core::render::TagChip;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TagCloudProps {
  pub title:     String,
  pub chips:     Vec<TagChip>,
  pub on_toggle: Callback<String>
}

#[function_component(TagCloud)]
pub fn tag_cloud(
  props: &TagCloudProps
) -> Html {
  html! {
      <div class="panel">
          <div class="header">{ &props.title }</div>
          <div class="tags-cloud">
              {
                  for props.chips.iter().map(|chip| {
                      let tag = chip.tag.clone();
                      let on_toggle = props.on_toggle.clone();
                      html! {
                          <span
                              key={chip.tag.clone()}
                              class={classes!("tag-filter", chip.active.then_some("active"))}
                              onclick={move |_| on_toggle.emit(tag.clone())}
                          >
                              { &chip.tag }
                          </span>
                      }
                  })
              }
          </div>
      </div>
  }
}
