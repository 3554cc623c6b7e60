//! UI Components
//!
//! Leptos components rendering the list controller's state.

mod new_item_form;
mod todo_item_row;
mod todo_list_view;
mod delete_all_button;
mod item_count;

pub use new_item_form::NewItemForm;
pub use todo_item_row::TodoItemRow;
pub use todo_list_view::TodoListView;
pub use delete_all_button::DeleteAllButton;
pub use item_count::ItemCount;
