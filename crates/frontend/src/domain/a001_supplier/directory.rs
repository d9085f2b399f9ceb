//! Supplier directory cache: the fetched supplier list plus the current selection.

use crate::shared::api_client::GuiasApi;
use crate::shared::confirm::CONFIRM_DELETE_SUPPLIER;
use crate::shared::error::{FormError, FormResult};
use contracts::domain::a001_supplier::aggregate::{Supplier, SupplierDto};

pub const NOT_INFORMED: &str = "Não informado";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SupplierDirectory {
    suppliers: Vec<Supplier>,
    selected: Option<i64>,
}

impl SupplierDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn find(&self, id: i64) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    /// Replace the cached list. A selection that no longer exists is dropped.
    pub fn replace(&mut self, suppliers: Vec<Supplier>) {
        self.suppliers = suppliers;
        if let Some(id) = self.selected {
            if self.find(id).is_none() {
                self.selected = None;
            }
        }
    }

    /// Make `id` the current supplier. Unknown ids and `None` clear the selection.
    pub fn select(&mut self, id: Option<i64>) -> Option<&Supplier> {
        self.selected = id.filter(|id| self.find(*id).is_some());
        self.selected()
    }

    pub fn selected(&self) -> Option<&Supplier> {
        self.selected.and_then(|id| self.find(id))
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// `GET /fornecedores` into the cache
    pub async fn load(&mut self, api: &impl GuiasApi) -> FormResult<&[Supplier]> {
        let list = api.list_suppliers().await?;
        log::debug!("supplier directory loaded: {} entries", list.len());
        self.replace(list);
        Ok(&self.suppliers)
    }

    /// Create (no id) or update (id) a supplier, then reload.
    /// Returns the server's message.
    pub async fn upsert(&mut self, api: &impl GuiasApi, dto: &SupplierDto) -> FormResult<String> {
        dto.validate().map_err(FormError::Validation)?;
        let body = dto.trimmed();

        let response = match body.id {
            Some(id) => api.update_supplier(id, &body).await?,
            None => api.create_supplier(&body).await?,
        };
        self.load(api).await?;

        Ok(response
            .message
            .unwrap_or_else(|| "Fornecedor salvo com sucesso!".to_string()))
    }

    /// Delete after confirmation; deleting the selected supplier clears the selection.
    /// `Ok(false)` when the user declined.
    pub async fn delete(
        &mut self,
        api: &impl GuiasApi,
        id: i64,
        confirm: impl FnOnce(&str) -> bool,
    ) -> FormResult<bool> {
        if !confirm(CONFIRM_DELETE_SUPPLIER) {
            return Ok(false);
        }
        api.delete_supplier(id).await?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.load(api).await?;
        Ok(true)
    }
}

/// Display fields of the "current supplier" panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupplierInfo {
    pub tax_id: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    pub responsible: String,
}

/// Absent or blank optional values read as "Não informado"
pub fn or_not_informed(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_INFORMED.to_string(),
    }
}

impl From<&Supplier> for SupplierInfo {
    fn from(s: &Supplier) -> Self {
        Self {
            tax_id: s.tax_id.clone(),
            contact: or_not_informed(s.contact.as_deref()),
            email: or_not_informed(s.email.as_deref()),
            address: or_not_informed(s.address.as_deref()),
            responsible: or_not_informed(s.responsible.as_deref()),
        }
    }
}
