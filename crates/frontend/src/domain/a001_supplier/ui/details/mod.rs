//! Supplier create/edit modal
//!
//! - view_model.rs: form signal, status message, save/delete commands
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::SupplierDetails;
