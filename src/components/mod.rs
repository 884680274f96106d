//! UI Components
//!
//! Leptos components for the task page.

mod announcer;
mod delete_confirm_button;
mod new_item_form;
mod task_list;
mod task_row;

pub use announcer::Announcer;
pub use delete_confirm_button::DeleteConfirmButton;
pub use new_item_form::NewItemForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
