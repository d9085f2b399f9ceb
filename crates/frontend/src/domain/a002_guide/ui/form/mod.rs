//! Guide form
//!
//! - view_model.rs: form, supplier directory and history signals plus commands
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::GuideForm;
pub use view_model::GuideFormViewModel;
