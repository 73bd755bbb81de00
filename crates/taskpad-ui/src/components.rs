mod details;
mod file_viewer_modal;
mod global_actions;
mod tag_cloud;
mod task_list;
mod task_list_row;
mod task_modal;

pub use details::Details;
pub use file_viewer_modal::FileViewerModal;
pub use global_actions::GlobalActions;
pub use tag_cloud::TagCloud;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use task_modal::TaskModal;
