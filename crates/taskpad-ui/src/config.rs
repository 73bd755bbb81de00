use taskpad_core::config::WidgetConfig;

/// Host pages may embed
/// `<script id="taskpad-config" type="application/toml">`
/// to relabel or tune the widget.
const CONFIG_ELEMENT_ID: &str =
  "taskpad-config";

fn read_config_override()
-> Option<String> {
  web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id(
        CONFIG_ELEMENT_ID
      )
    })
    .and_then(|element| {
      element.text_content()
    })
}

pub fn load_widget_config()
-> WidgetConfig {
  let raw = read_config_override();
  match WidgetConfig::load(
    raw.as_deref()
  ) {
    | Ok(config) => config,
    | Err(error) => {
      tracing::error!(
        error = %format!("{error:#}"),
        "invalid taskpad \
         configuration; using \
         defaults"
      );
      WidgetConfig::default()
    }
  }
}
