pub mod details;
pub mod picker;
