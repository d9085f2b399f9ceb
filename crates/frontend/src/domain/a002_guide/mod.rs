pub mod controller;
pub mod equipment_table;
pub mod form_state;
pub mod motive;
pub mod print;
pub mod ui;
