//! Services the widget calls into but
//! does not implement: the browser
//! provides them in the UI crate, tests
//! provide recording fakes.

use crate::error::TaskpadError;

/// Builds and releases revocable
/// references (object URLs) to file
/// contents.
pub trait PreviewHost {
  type File;

  fn acquire(
    &self,
    file: &Self::File
  ) -> Result<String, TaskpadError>;

  fn release(&self, href: &str);
}

/// Blocking user prompts.
pub trait Dialogs {
  fn confirm(
    &self,
    prompt: &str
  ) -> bool;

  fn notify(&self, message: &str);
}
