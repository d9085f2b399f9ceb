use super::GuiasApi;
use crate::shared::api_utils::api_base;
use crate::shared::error::{FormError, FormResult};
use async_trait::async_trait;
use contracts::domain::a001_supplier::aggregate::{Supplier, SupplierDto};
use contracts::domain::a002_guide::aggregate::{Guide, GuideCreated, GuideSubmission};
use contracts::shared::api_message::{ErrorResponse, MessageResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// `fetch`-based client for the guides API
#[derive(Clone, Debug)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Client pointed at [`api_base`]
    pub fn from_location() -> Self {
        Self::new(api_base())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn send(&self, builder: RequestBuilder) -> FormResult<Response> {
        builder
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FormError::Network(e.to_string()))
    }

    async fn send_json<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> FormResult<Response> {
        let request: Request = builder
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| FormError::Network(format!("Failed to serialize request: {}", e)))?;
        request
            .send()
            .await
            .map_err(|e| FormError::Network(e.to_string()))
    }
}

/// Map a non-2xx response to a [`FormError`].
///
/// The server's `{error}` text wins; otherwise `Erro {status} ao {action}`.
/// A 404 becomes `NotFound` when the endpoint looks something up.
pub fn error_from_body(status: u16, body: &str, action: &str, not_found: Option<&str>) -> FormError {
    let server_message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty());

    match (status, not_found) {
        (404, Some(fallback)) => {
            FormError::NotFound(server_message.unwrap_or_else(|| fallback.to_string()))
        }
        _ => FormError::Api {
            status,
            message: server_message.unwrap_or_else(|| format!("Erro {} ao {}", status, action)),
        },
    }
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    action: &str,
    not_found: Option<&str>,
) -> FormResult<T> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| FormError::Network(e.to_string()))?;

    if !response.ok() {
        let err = error_from_body(status, &text, action, not_found);
        log::warn!("{} failed: HTTP {}: {}", action, status, err);
        return Err(err);
    }

    serde_json::from_str(&text)
        .map_err(|e| FormError::Network(format!("Failed to parse response: {}", e)))
}

/// Like [`read_json`] but tolerates an empty or non-JSON success body
async fn read_message(response: Response, action: &str) -> FormResult<MessageResponse> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| FormError::Network(e.to_string()))?;

    if !response.ok() {
        let err = error_from_body(status, &text, action, None);
        log::warn!("{} failed: HTTP {}: {}", action, status, err);
        return Err(err);
    }

    Ok(serde_json::from_str(&text).unwrap_or_default())
}

#[async_trait(?Send)]
impl GuiasApi for HttpApi {
    async fn list_suppliers(&self) -> FormResult<Vec<Supplier>> {
        log::debug!("GET /fornecedores");
        let response = self.send(Request::get(&self.url("/fornecedores"))).await?;
        read_json(response, "carregar fornecedores", None).await
    }

    async fn create_supplier(&self, dto: &SupplierDto) -> FormResult<MessageResponse> {
        log::debug!("POST /fornecedor/novo");
        let response = self
            .send_json(Request::post(&self.url("/fornecedor/novo")), dto)
            .await?;
        read_message(response, "salvar fornecedor").await
    }

    async fn update_supplier(&self, id: i64, dto: &SupplierDto) -> FormResult<MessageResponse> {
        log::debug!("PUT /fornecedor/{}", id);
        let response = self
            .send_json(Request::put(&self.url(&format!("/fornecedor/{}", id))), dto)
            .await?;
        read_message(response, "salvar fornecedor").await
    }

    async fn delete_supplier(&self, id: i64) -> FormResult<MessageResponse> {
        log::debug!("DELETE /fornecedor/{}", id);
        let response = self
            .send(Request::delete(&self.url(&format!("/fornecedor/{}", id))))
            .await?;
        read_message(response, "excluir fornecedor").await
    }

    async fn list_guides(&self) -> FormResult<Vec<Guide>> {
        log::debug!("GET /guias");
        let response = self.send(Request::get(&self.url("/guias"))).await?;
        read_json(response, "carregar histórico", None).await
    }

    async fn fetch_guide(&self, id: i64) -> FormResult<Guide> {
        log::debug!("GET /guia/{}", id);
        let response = self
            .send(Request::get(&self.url(&format!("/guia/{}", id))))
            .await?;
        read_json(response, "carregar guia", Some("Guia não encontrada")).await
    }

    async fn create_guide(&self, submission: &GuideSubmission) -> FormResult<GuideCreated> {
        log::debug!(
            "POST /guia/nova: fornecedor {} with {} equipment line(s)",
            submission.supplier_id,
            submission.equipment.len()
        );
        let response = self
            .send_json(Request::post(&self.url("/guia/nova")), submission)
            .await?;
        read_json(response, "salvar guia", None).await
    }

    async fn delete_guide(&self, id: i64) -> FormResult<MessageResponse> {
        log::debug!("DELETE /guia/{}", id);
        let response = self
            .send(Request::delete(&self.url(&format!("/guia/{}", id))))
            .await?;
        read_message(response, "excluir guia").await
    }
}
