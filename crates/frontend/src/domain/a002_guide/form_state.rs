//! State of the guide form and the synchronous operations on it.
//!
//! `FormState` is a plain value: the view model keeps it in a signal and
//! hands it by reference to these functions and to the async workflow in
//! `controller`.

use super::equipment_table::EquipmentTable;
use super::motive::{decode_motives, MotiveSelection};
use super::print::PrintSnapshot;
use crate::domain::a001_supplier::directory::SupplierDirectory;
use crate::shared::confirm::CONFIRM_RESET_FORM;
use crate::shared::date_utils::{display_to_iso, iso_to_display, today_display};
use crate::shared::error::{FormError, FormResult};
use contracts::domain::a002_guide::aggregate::{Guide, GuideCreated, GuideSubmission};

pub const MSG_SELECT_SUPPLIER: &str = "Selecione um fornecedor";
pub const MSG_DEFECT_REQUIRED: &str = "Descreva o defeito/problema relatado";
/// Number shown on a print of a guide that was never saved
pub const NUMBER_PENDING: &str = "A GERAR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Empty,
    Editing,
    Submitting,
    Saved,
    Failed,
    Loading,
    Loaded,
}

impl FormPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, FormPhase::Submitting | FormPhase::Loading)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Server id of the saved or loaded guide
    pub guide_id: Option<i64>,
    /// Server-assigned number, empty until saved
    pub number: String,
    /// DD/MM/YYYY
    pub issue_date: String,
    pub equipment: EquipmentTable,
    pub motives: MotiveSelection,
    pub defect: String,
    pub phase: FormPhase,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Blank form dated today
    pub fn new() -> Self {
        Self::with_issue_date(today_display())
    }

    pub fn with_issue_date(issue_date: impl Into<String>) -> Self {
        Self {
            guide_id: None,
            number: String::new(),
            issue_date: issue_date.into(),
            equipment: EquipmentTable::new(),
            motives: MotiveSelection::default(),
            defect: String::new(),
            phase: FormPhase::Empty,
        }
    }

    /// Any user edit moves the form into `Editing`
    pub fn touch(&mut self) {
        if !self.phase.is_busy() {
            self.phase = FormPhase::Editing;
        }
    }

    /// Checks shared by saving and printing; validation order follows the form
    /// top to bottom.
    pub fn build_submission(&self, directory: &SupplierDirectory) -> FormResult<GuideSubmission> {
        let supplier = directory
            .selected()
            .ok_or_else(|| FormError::validation(MSG_SELECT_SUPPLIER))?;

        let equipment = self.equipment.to_payload()?;

        let defect = self.defect.trim();
        if defect.is_empty() {
            return Err(FormError::validation(MSG_DEFECT_REQUIRED));
        }

        Ok(GuideSubmission {
            supplier_id: supplier.id,
            issue_date: display_to_iso(&self.issue_date),
            equipment,
            motive: self.motives.encode(),
            defect: defect.to_string(),
        })
    }

    /// Record the server-assigned identity after a successful save
    pub fn apply_created(&mut self, created: &GuideCreated) {
        self.guide_id = Some(created.id);
        self.number = created.number.clone();
        self.phase = FormPhase::Saved;
    }

    /// Overwrite the whole form with a persisted guide. The supplier is
    /// selected only if it is present in the directory cache.
    pub fn hydrate(&mut self, guide: &Guide, directory: &mut SupplierDirectory) {
        self.guide_id = Some(guide.id);
        self.number = guide.number.clone();
        self.issue_date = match guide.issue_date.as_deref() {
            Some(d) if !d.is_empty() => iso_to_display(d),
            _ => today_display(),
        };
        if directory.select(Some(guide.supplier.id)).is_none() {
            log::warn!(
                "guide {} references supplier {} missing from the directory",
                guide.number,
                guide.supplier.id
            );
        }
        self.equipment.hydrate(&guide.equipment);
        self.motives = decode_motives(guide.motive.as_deref().unwrap_or_default());
        self.defect = guide.defect.clone().unwrap_or_default();
        self.phase = FormPhase::Loaded;
    }

    /// Clear everything after confirmation. Returns whether the form was reset.
    pub fn reset(
        &mut self,
        directory: &mut SupplierDirectory,
        confirm: impl FnOnce(&str) -> bool,
    ) -> bool {
        if !confirm(CONFIRM_RESET_FORM) {
            return false;
        }
        let mut equipment = std::mem::take(&mut self.equipment);
        equipment.reset();
        *self = Self {
            equipment,
            ..Self::new()
        };
        directory.clear_selection();
        true
    }

    /// Validated input for the print document
    pub fn print_snapshot(&self, directory: &SupplierDirectory) -> FormResult<PrintSnapshot> {
        let submission = self.build_submission(directory)?;
        let supplier = directory
            .selected()
            .cloned()
            .ok_or_else(|| FormError::validation(MSG_SELECT_SUPPLIER))?;

        Ok(PrintSnapshot {
            number: if self.number.is_empty() {
                NUMBER_PENDING.to_string()
            } else {
                self.number.clone()
            },
            issue_date: self.issue_date.clone(),
            supplier,
            equipment: submission.equipment,
            motive: submission.motive,
            defect: self.defect.clone(),
            generated_on: today_display(),
        })
    }
}
