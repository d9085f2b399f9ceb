pub mod directory;
pub mod ui;
