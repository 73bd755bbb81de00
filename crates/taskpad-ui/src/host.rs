use taskpad_core::TaskpadError;
use taskpad_core::host::{
  Dialogs,
  PreviewHost
};
use taskpad_core::task::NamedFile;
use wasm_bindgen::JsValue;

/// A file picked in the task editor.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct PickedFile(pub web_sys::File);

impl NamedFile for PickedFile {
  fn file_name(&self) -> String {
    self.0.name()
  }
}

/// Object URLs and blocking dialogs
/// from the browser window.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct BrowserHost;

impl PreviewHost for BrowserHost {
  type File = PickedFile;

  fn acquire(
    &self,
    file: &PickedFile
  ) -> Result<String, TaskpadError> {
    web_sys::Url::create_object_url_with_blob(
      &file.0
    )
    .map_err(|error: JsValue| {
      TaskpadError::Preview(format!(
        "{error:?}"
      ))
    })
  }

  fn release(&self, href: &str) {
    if let Err(error) =
      web_sys::Url::revoke_object_url(href)
    {
      tracing::warn!(
        ?error,
        href,
        "failed revoking object url"
      );
    }
  }
}

impl Dialogs for BrowserHost {
  fn confirm(
    &self,
    prompt: &str
  ) -> bool {
    gloo::dialogs::confirm(prompt)
  }

  fn notify(&self, message: &str) {
    gloo::dialogs::alert(message);
  }
}
