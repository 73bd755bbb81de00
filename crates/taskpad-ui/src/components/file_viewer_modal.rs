use taskpad_core::config::Labels;
use taskpad_core::viewer::Preview;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FileViewerModalProps {
  pub preview:  Preview,
  pub labels:   Labels,
  pub on_close: Callback<()>
}

#[function_component(FileViewerModal)]
pub fn file_viewer_modal(
  props: &FileViewerModalProps
) -> Html {
  let on_backdrop = props
    .on_close
    .reform(|_: MouseEvent| ());
  let on_close_icon = props
    .on_close
    .reform(|_: MouseEvent| ());
  let on_close_button = props
    .on_close
    .reform(|_: MouseEvent| ());

  html! {
      <div class="modal-backdrop file-viewer" onclick={on_backdrop}>
          <div class="modal modal-lg" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="header">
                  <span>{ &props.labels.viewer_title }</span>
                  <span class="close-file-viewer" onclick={on_close_icon}>{ "×" }</span>
              </div>
              <iframe class="file-viewer-frame" src={props.preview.href.clone()} title={props.preview.file_name.clone()} />
              <div class="footer">
                  <a
                      class="btn"
                      href={props.preview.href.clone()}
                      download={props.preview.file_name.clone()}
                  >
                      { &props.labels.download }
                  </a>
                  <button type="button" class="btn" onclick={on_close_button}>
                      { &props.labels.close }
                  </button>
              </div>
          </div>
      </div>
  }
}
