//! Gateway to the guides REST API.
//!
//! Everything that talks to the server goes through [`GuiasApi`] so the
//! form workflow can run against the HTTP client in the browser and against
//! an in-memory server in tests.

mod http;
#[cfg(test)]
pub mod fake;

pub use http::HttpApi;

use crate::shared::error::FormResult;
use async_trait::async_trait;
use contracts::domain::a001_supplier::aggregate::{Supplier, SupplierDto};
use contracts::domain::a002_guide::aggregate::{Guide, GuideCreated, GuideSubmission};
use contracts::shared::api_message::MessageResponse;

#[async_trait(?Send)]
pub trait GuiasApi {
    /// `GET /fornecedores`
    async fn list_suppliers(&self) -> FormResult<Vec<Supplier>>;

    /// `POST /fornecedor/novo`
    async fn create_supplier(&self, dto: &SupplierDto) -> FormResult<MessageResponse>;

    /// `PUT /fornecedor/{id}`
    async fn update_supplier(&self, id: i64, dto: &SupplierDto) -> FormResult<MessageResponse>;

    /// `DELETE /fornecedor/{id}`; the server deletes the supplier's guides too
    async fn delete_supplier(&self, id: i64) -> FormResult<MessageResponse>;

    /// `GET /guias`, newest first
    async fn list_guides(&self) -> FormResult<Vec<Guide>>;

    /// `GET /guia/{id}`
    async fn fetch_guide(&self, id: i64) -> FormResult<Guide>;

    /// `POST /guia/nova`
    async fn create_guide(&self, submission: &GuideSubmission) -> FormResult<GuideCreated>;

    /// `DELETE /guia/{id}`
    async fn delete_guide(&self, id: i64) -> FormResult<MessageResponse>;
}
