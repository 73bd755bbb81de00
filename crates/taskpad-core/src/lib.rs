pub mod config;
pub mod error;
pub mod host;
pub mod render;
pub mod store;
pub mod tags;
pub mod task;
pub mod viewer;
pub mod workspace;

pub use error::TaskpadError;
pub use task::{
  NamedFile,
  Task,
  TaskId
};
pub use workspace::Workspace;
