use crate::domain::a001_supplier::aggregate::Supplier;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Guia de remessa as returned by `GET /guia/{id}` and `GET /guias`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    pub id: i64,

    /// Server-assigned, `GR-{year}-{seq:04}`
    #[serde(rename = "numero_guia")]
    pub number: String,

    /// `YYYY-MM-DD`
    #[serde(rename = "data_emissao", default)]
    pub issue_date: Option<String>,

    #[serde(rename = "fornecedor")]
    pub supplier: Supplier,

    #[serde(rename = "defeito", default)]
    pub defect: Option<String>,

    /// Encoded motive string, see the frontend motive codec
    #[serde(rename = "motivo", default)]
    pub motive: Option<String>,

    #[serde(rename = "equipamentos", default)]
    pub equipment: Vec<Equipment>,
}

/// Persisted equipment row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(
        rename = "quantidade",
        default = "default_quantity",
        deserialize_with = "quantity_or_default"
    )]
    pub quantity: u32,

    #[serde(rename = "descricao", default)]
    pub description: Option<String>,

    #[serde(rename = "numero_serie", default)]
    pub serial_number: Option<String>,

    #[serde(rename = "patrimonio", default)]
    pub asset_tag: Option<String>,

    #[serde(rename = "valor", default)]
    pub value: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// `null` in a stored row reads as the default quantity
fn quantity_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(default_quantity))
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// One equipment line of a guide submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentLine {
    #[serde(rename = "quantidade")]
    pub quantity: u32,

    #[serde(rename = "descricao")]
    pub description: String,

    #[serde(rename = "numero_serie")]
    pub serial_number: String,

    #[serde(rename = "patrimonio")]
    pub asset_tag: String,

    #[serde(rename = "valor")]
    pub value: String,
}

impl From<&EquipmentLine> for Equipment {
    fn from(line: &EquipmentLine) -> Self {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            id: None,
            quantity: line.quantity,
            description: opt(&line.description),
            serial_number: opt(&line.serial_number),
            asset_tag: opt(&line.asset_tag),
            value: opt(&line.value),
        }
    }
}

/// Body for `POST /guia/nova`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideSubmission {
    #[serde(rename = "fornecedor_id")]
    pub supplier_id: i64,

    /// Informational only: the server stamps its own issue date
    #[serde(rename = "data_emissao")]
    pub issue_date: String,

    #[serde(rename = "equipamentos")]
    pub equipment: Vec<EquipmentLine>,

    #[serde(rename = "motivo")]
    pub motive: String,

    #[serde(rename = "defeito")]
    pub defect: String,
}

/// Response of `POST /guia/nova`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideCreated {
    pub id: i64,

    #[serde(rename = "numero")]
    pub number: String,

    #[serde(default)]
    pub message: Option<String>,
}
