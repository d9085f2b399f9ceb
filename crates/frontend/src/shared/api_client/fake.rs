//! In-memory stand-in for the guides API, following the server's contract:
//! sequential `GR-{year}-{seq:04}` numbers, 404 on unknown ids, unique CNPJ,
//! and guide cascade when a supplier is deleted.

use super::GuiasApi;
use crate::shared::error::{FormError, FormResult};
use async_trait::async_trait;
use contracts::domain::a001_supplier::aggregate::{Supplier, SupplierDto};
use contracts::domain::a002_guide::aggregate::{Equipment, Guide, GuideCreated, GuideSubmission};
use contracts::shared::api_message::MessageResponse;
use std::cell::{Cell, RefCell};

const YEAR: i32 = 2024;
const ISSUE_DATE: &str = "2024-03-15";

#[derive(Default)]
struct ServerState {
    suppliers: Vec<Supplier>,
    guides: Vec<Guide>,
    next_supplier_id: i64,
    next_guide_id: i64,
    sequence: u32,
}

#[derive(Default)]
pub struct InMemoryApi {
    state: RefCell<ServerState>,
    requests: Cell<usize>,
    offline: Cell<bool>,
}

fn api_error(status: u16, message: &str) -> FormError {
    FormError::Api {
        status,
        message: message.to_string(),
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests that reached the "server"
    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    /// Make every following request fail with a network error
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    pub fn seed_supplier(&self, name: &str, tax_id: &str) -> i64 {
        let mut st = self.state.borrow_mut();
        st.next_supplier_id += 1;
        let id = st.next_supplier_id;
        st.suppliers.push(Supplier {
            id,
            name: name.to_string(),
            tax_id: tax_id.to_string(),
            contact: None,
            email: None,
            address: None,
            responsible: None,
        });
        id
    }

    fn hit(&self) -> FormResult<()> {
        self.requests.set(self.requests.get() + 1);
        if self.offline.get() {
            return Err(FormError::Network("Failed to fetch".into()));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl GuiasApi for InMemoryApi {
    async fn list_suppliers(&self) -> FormResult<Vec<Supplier>> {
        self.hit()?;
        let mut list = self.state.borrow().suppliers.clone();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }

    async fn create_supplier(&self, dto: &SupplierDto) -> FormResult<MessageResponse> {
        self.hit()?;
        if dto.name.trim().is_empty() || dto.tax_id.trim().is_empty() {
            return Err(api_error(400, "Nome e CNPJ são obrigatórios"));
        }
        let mut st = self.state.borrow_mut();
        if st.suppliers.iter().any(|s| s.tax_id == dto.tax_id.trim()) {
            return Err(api_error(409, "Erro 409 ao salvar fornecedor"));
        }
        st.next_supplier_id += 1;
        let id = st.next_supplier_id;
        st.suppliers.push(Supplier {
            id,
            name: dto.name.trim().to_string(),
            tax_id: dto.tax_id.trim().to_string(),
            contact: non_empty(&dto.contact),
            // the create endpoint does not store the e-mail
            email: None,
            address: non_empty(&dto.address),
            responsible: non_empty(&dto.responsible),
        });
        Ok(MessageResponse {
            message: Some("Fornecedor cadastrado com sucesso".into()),
            id: Some(id),
        })
    }

    async fn update_supplier(&self, id: i64, dto: &SupplierDto) -> FormResult<MessageResponse> {
        self.hit()?;
        let mut st = self.state.borrow_mut();
        let supplier = st
            .suppliers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| api_error(500, "Erro ao atualizar fornecedor"))?;
        supplier.name = dto.name.trim().to_string();
        supplier.contact = non_empty(&dto.contact);
        supplier.address = non_empty(&dto.address);
        supplier.responsible = non_empty(&dto.responsible);
        Ok(MessageResponse {
            message: Some("Fornecedor atualizado com sucesso".into()),
            id: None,
        })
    }

    async fn delete_supplier(&self, id: i64) -> FormResult<MessageResponse> {
        self.hit()?;
        let mut st = self.state.borrow_mut();
        if !st.suppliers.iter().any(|s| s.id == id) {
            return Err(api_error(500, "Erro ao deletar fornecedor"));
        }
        st.suppliers.retain(|s| s.id != id);
        st.guides.retain(|g| g.supplier.id != id);
        Ok(MessageResponse {
            message: Some("Fornecedor deletado com sucesso".into()),
            id: None,
        })
    }

    async fn list_guides(&self) -> FormResult<Vec<Guide>> {
        self.hit()?;
        let mut list = self.state.borrow().guides.clone();
        list.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(list)
    }

    async fn fetch_guide(&self, id: i64) -> FormResult<Guide> {
        self.hit()?;
        self.state
            .borrow()
            .guides
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| FormError::NotFound("Guia não encontrada".into()))
    }

    async fn create_guide(&self, submission: &GuideSubmission) -> FormResult<GuideCreated> {
        self.hit()?;
        let mut st = self.state.borrow_mut();
        let supplier = st
            .suppliers
            .iter()
            .find(|s| s.id == submission.supplier_id)
            .cloned()
            .ok_or_else(|| api_error(404, "Fornecedor não encontrado"))?;
        if submission.equipment.is_empty() {
            return Err(api_error(400, "Pelo menos um equipamento é obrigatório"));
        }

        st.sequence += 1;
        st.next_guide_id += 1;
        let id = st.next_guide_id;
        let number = format!("GR-{}-{:04}", YEAR, st.sequence);
        st.guides.push(Guide {
            id,
            number: number.clone(),
            issue_date: Some(ISSUE_DATE.to_string()),
            supplier,
            defect: Some(submission.defect.clone()),
            motive: Some(submission.motive.clone()),
            equipment: submission.equipment.iter().map(Equipment::from).collect(),
        });
        Ok(GuideCreated {
            id,
            number,
            message: Some("Guia criada com sucesso".into()),
        })
    }

    async fn delete_guide(&self, id: i64) -> FormResult<MessageResponse> {
        self.hit()?;
        let mut st = self.state.borrow_mut();
        if !st.guides.iter().any(|g| g.id == id) {
            return Err(api_error(500, "Erro ao deletar guia"));
        }
        st.guides.retain(|g| g.id != id);
        Ok(MessageResponse {
            message: Some("Guia deletada com sucesso".into()),
            id: None,
        })
    }
}
