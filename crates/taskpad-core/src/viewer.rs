use tracing::{
  debug,
  warn
};

use crate::error::TaskpadError;
use crate::host::PreviewHost;
use crate::task::NamedFile;

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Preview {
  /// Revocable reference handed out by
  /// the host; also the download
  /// target.
  pub href:      String,
  pub file_name: String
}

/// Holds at most one live preview
/// reference. Every path that drops a
/// preview releases it through the
/// host.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
)]
pub struct FileViewer {
  current: Option<Preview>
}

impl FileViewer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_open(&self) -> bool {
    self.current.is_some()
  }

  pub fn current(
    &self
  ) -> Option<&Preview> {
    self.current.as_ref()
  }

  /// Acquires a reference for `file`
  /// before touching the current one;
  /// on failure the viewer is left
  /// exactly as it was.
  pub fn open<H>(
    &mut self,
    host: &H,
    file: &H::File
  ) -> Result<&Preview, TaskpadError>
  where
    H: PreviewHost + ?Sized,
    H::File: NamedFile
  {
    let file_name = file.file_name();
    let href = host
      .acquire(file)
      .inspect_err(|error| {
        warn!(%error, %file_name, "preview acquire failed");
      })?;

    if let Some(previous) =
      self.current.take()
    {
      debug!(
        href = %previous.href,
        "releasing replaced preview"
      );
      host.release(&previous.href);
    }

    debug!(%href, %file_name, "preview opened");
    Ok(&*self.current.insert(Preview {
      href,
      file_name
    }))
  }

  pub fn close<H>(
    &mut self,
    host: &H
  ) where
    H: PreviewHost + ?Sized
  {
    if let Some(previous) =
      self.current.take()
    {
      debug!(
        href = %previous.href,
        "preview closed"
      );
      host.release(&previous.href);
    }
  }
}
