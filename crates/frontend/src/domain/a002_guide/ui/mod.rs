pub mod form;
pub mod history;
pub mod print_window;
