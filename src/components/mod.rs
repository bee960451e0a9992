//! UI Components
//!
//! Form, list and footer. All of them read tasks from the bridge
//! view-model and never change them locally.

mod new_task_form;
mod task_footer;
mod task_list;
mod task_row;

pub use new_task_form::NewTaskForm;
pub use task_footer::TaskFooter;
pub use task_list::TaskList;
pub use task_row::TaskRow;
