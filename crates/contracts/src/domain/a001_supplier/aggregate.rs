use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Fornecedor / prestador de serviços, as served by `GET /fornecedores`.
///
/// Optional contact fields may come back as `null` or be missing entirely
/// (`GET /guia/{id}` only embeds id, name and CNPJ).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "cnpj")]
    pub tax_id: String,

    #[serde(rename = "contato", default)]
    pub contact: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "endereco", default)]
    pub address: Option<String>,

    #[serde(rename = "responsavel", default)]
    pub responsible: Option<String>,
}

impl Supplier {
    /// Label used by the supplier selector
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.name, self.tax_id)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Body for `POST /fornecedor/novo` and `PUT /fornecedor/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SupplierDto {
    /// Present in edit mode only; travels in the URL, never in the body
    #[serde(skip)]
    pub id: Option<i64>,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "cnpj")]
    pub tax_id: String,

    #[serde(rename = "contato")]
    pub contact: String,

    pub email: String,

    #[serde(rename = "endereco")]
    pub address: String,

    #[serde(rename = "responsavel")]
    pub responsible: String,
}

impl SupplierDto {
    /// Prefill the edit form from a cached supplier
    pub fn from_supplier(s: &Supplier) -> Self {
        Self {
            id: Some(s.id),
            name: s.name.clone(),
            tax_id: s.tax_id.clone(),
            contact: s.contact.clone().unwrap_or_default(),
            email: s.email.clone().unwrap_or_default(),
            address: s.address.clone().unwrap_or_default(),
            responsible: s.responsible.clone().unwrap_or_default(),
        }
    }

    /// Copy with every field trimmed, as sent over the wire
    pub fn trimmed(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.trim().to_string(),
            tax_id: self.tax_id.trim().to_string(),
            contact: self.contact.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
            responsible: self.responsible.trim().to_string(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Same checks the server applies, plus the e-mail format
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        let tax_id = self.tax_id.trim();
        if name.is_empty() || tax_id.is_empty() {
            return Err("Nome e CNPJ são obrigatórios".into());
        }

        let digits = tax_id.chars().filter(|c| c.is_ascii_digit()).count();
        if digits != 14 {
            return Err("CNPJ inválido".into());
        }

        let email = self.email.trim();
        if !email.is_empty() && !EMAIL_RE.is_match(email) {
            return Err("Email inválido".into());
        }

        Ok(())
    }
}
