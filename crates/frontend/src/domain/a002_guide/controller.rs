//! Async guide workflow: save, load into the form, delete, history.
//!
//! Operations mutate the `FormState` they are given; the view model decides
//! when the result is written back to its signal.

use super::form_state::{FormPhase, FormState};
use crate::domain::a001_supplier::directory::SupplierDirectory;
use crate::shared::api_client::GuiasApi;
use crate::shared::confirm::CONFIRM_DELETE_GUIDE;
use crate::shared::error::{FormError, FormResult};
use contracts::domain::a002_guide::aggregate::{Guide, GuideCreated};

pub struct GuideFormController<'a, A: GuiasApi> {
    api: &'a A,
}

impl<'a, A: GuiasApi> GuideFormController<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Validate and send the form to `POST /guia/nova`.
    ///
    /// Validation failures leave the phase untouched and send nothing.
    pub async fn submit(
        &self,
        state: &mut FormState,
        directory: &SupplierDirectory,
    ) -> FormResult<GuideCreated> {
        if state.phase == FormPhase::Submitting {
            return Err(FormError::validation("Envio em andamento"));
        }
        let submission = state.build_submission(directory)?;

        state.phase = FormPhase::Submitting;
        match self.api.create_guide(&submission).await {
            Ok(created) => {
                log::info!("guide saved: {} (id {})", created.number, created.id);
                state.apply_created(&created);
                Ok(created)
            }
            Err(e) => {
                state.phase = FormPhase::Failed;
                Err(e)
            }
        }
    }

    /// Fetch a persisted guide and overwrite the form with it
    pub async fn load_into_form(
        &self,
        state: &mut FormState,
        directory: &mut SupplierDirectory,
        id: i64,
    ) -> FormResult<()> {
        state.phase = FormPhase::Loading;
        match self.api.fetch_guide(id).await {
            Ok(guide) => {
                state.hydrate(&guide, directory);
                log::info!("guide {} loaded into the form", guide.number);
                Ok(())
            }
            Err(e) => {
                state.phase = FormPhase::Failed;
                Err(e)
            }
        }
    }

    /// `Ok(false)` when the user declined; nothing is sent in that case
    pub async fn delete_guide(
        &self,
        id: i64,
        confirm: impl FnOnce(&str) -> bool,
    ) -> FormResult<bool> {
        if !confirm(CONFIRM_DELETE_GUIDE) {
            return Ok(false);
        }
        self.api.delete_guide(id).await?;
        log::info!("guide {} deleted", id);
        Ok(true)
    }

    pub async fn refresh_history(&self) -> FormResult<Vec<Guide>> {
        self.api.list_guides().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_guide::equipment_table::EquipmentField;
    use crate::domain::a002_guide::form_state::MSG_SELECT_SUPPLIER;
    use crate::domain::a002_guide::motive::Motive;
    use crate::shared::api_client::fake::InMemoryApi;
    use contracts::domain::a001_supplier::aggregate::SupplierDto;

    fn fill(state: &mut FormState) {
        state.equipment.set_field(0, EquipmentField::Description, "Monitor LG".into());
        state.equipment.set_field(0, EquipmentField::SerialNumber, "SN-001".into());
        state.equipment.add_line();
        state.equipment.set_field(1, EquipmentField::Description, "Impressora".into());
        state.equipment.set_field(1, EquipmentField::Quantity, "2".into());
        state.motives.set_checked(Motive::PreventiveMaintenance, true);
        state.defect = "tela quebrada".into();
    }

    #[tokio::test]
    async fn test_end_to_end_create_submit_and_reload() {
        let api = InMemoryApi::new();
        let mut directory = SupplierDirectory::new();

        let dto = SupplierDto {
            name: "Acme".into(),
            tax_id: "00.000.000/0001-00".into(),
            ..Default::default()
        };
        directory.upsert(&api, &dto).await.unwrap();
        let acme_id = directory
            .suppliers()
            .iter()
            .find(|s| s.name == "Acme")
            .map(|s| s.id)
            .unwrap();
        directory.select(Some(acme_id));

        let mut state = FormState::new();
        fill(&mut state);

        let controller = GuideFormController::new(&api);
        let created = controller.submit(&mut state, &directory).await.unwrap();
        assert_eq!(created.number, "GR-2024-0001");
        assert_eq!(state.guide_id, Some(created.id));
        assert_eq!(state.number, "GR-2024-0001");
        assert_eq!(state.phase, FormPhase::Saved);

        let history = controller.refresh_history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].supplier.name, "Acme");

        // a fresh page: empty form, directory reloaded without selection
        let mut reloaded = FormState::new();
        let mut fresh_directory = SupplierDirectory::new();
        fresh_directory.load(&api).await.unwrap();
        controller
            .load_into_form(&mut reloaded, &mut fresh_directory, created.id)
            .await
            .unwrap();

        assert_eq!(fresh_directory.selected_id(), Some(acme_id));
        assert_eq!(reloaded.equipment.len(), 2);
        assert_eq!(
            reloaded.equipment.to_payload().unwrap(),
            state.equipment.to_payload().unwrap()
        );
        assert_eq!(reloaded.motives, state.motives);
        assert_eq!(reloaded.defect, "tela quebrada");
        assert_eq!(reloaded.number, "GR-2024-0001");
        assert_eq!(reloaded.issue_date, "15/03/2024");
        assert_eq!(reloaded.phase, FormPhase::Loaded);
    }

    #[tokio::test]
    async fn test_numbers_are_sequential() {
        let api = InMemoryApi::new();
        let id = api.seed_supplier("Acme", "00.000.000/0001-00");
        let mut directory = SupplierDirectory::new();
        directory.load(&api).await.unwrap();
        directory.select(Some(id));
        let controller = GuideFormController::new(&api);

        let mut first = FormState::new();
        fill(&mut first);
        let mut second = first.clone();
        controller.submit(&mut first, &directory).await.unwrap();
        let created = controller.submit(&mut second, &directory).await.unwrap();
        assert_eq!(created.number, "GR-2024-0002");

        let history = controller.refresh_history().await.unwrap();
        assert_eq!(history[0].number, "GR-2024-0002");
    }

    #[tokio::test]
    async fn test_validation_failure_sends_nothing() {
        let api = InMemoryApi::new();
        let directory = SupplierDirectory::new();
        let mut state = FormState::new();
        fill(&mut state);

        let err = GuideFormController::new(&api)
            .submit(&mut state, &directory)
            .await
            .unwrap_err();
        assert_eq!(err, FormError::validation(MSG_SELECT_SUPPLIER));
        assert_eq!(api.requests(), 0);
        assert_ne!(state.phase, FormPhase::Submitting);
    }

    #[tokio::test]
    async fn test_submit_while_submitting_is_rejected() {
        let api = InMemoryApi::new();
        let id = api.seed_supplier("Acme", "00.000.000/0001-00");
        let mut directory = SupplierDirectory::new();
        directory.load(&api).await.unwrap();
        directory.select(Some(id));
        let mut state = FormState::new();
        fill(&mut state);
        state.phase = FormPhase::Submitting;
        let before = api.requests();

        let err = GuideFormController::new(&api)
            .submit(&mut state, &directory)
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(api.requests(), before);
    }

    #[tokio::test]
    async fn test_network_failure_marks_failed() {
        let api = InMemoryApi::new();
        let id = api.seed_supplier("Acme", "00.000.000/0001-00");
        let mut directory = SupplierDirectory::new();
        directory.load(&api).await.unwrap();
        directory.select(Some(id));
        let mut state = FormState::new();
        fill(&mut state);

        api.set_offline(true);
        let err = GuideFormController::new(&api)
            .submit(&mut state, &directory)
            .await
            .unwrap_err();
        assert!(matches!(err, FormError::Network(_)));
        assert_eq!(state.phase, FormPhase::Failed);
        assert_eq!(state.guide_id, None);
    }

    #[tokio::test]
    async fn test_load_missing_guide() {
        let api = InMemoryApi::new();
        let mut directory = SupplierDirectory::new();
        let mut state = FormState::with_issue_date("01/01/2024");
        state.defect = "mantido".into();

        let err = GuideFormController::new(&api)
            .load_into_form(&mut state, &mut directory, 404)
            .await
            .unwrap_err();
        assert_eq!(err, FormError::NotFound("Guia não encontrada".into()));
        assert_eq!(state.defect, "mantido");
        assert_eq!(state.phase, FormPhase::Failed);
    }

    #[tokio::test]
    async fn test_delete_guide_with_confirmation() {
        let api = InMemoryApi::new();
        let id = api.seed_supplier("Acme", "00.000.000/0001-00");
        let mut directory = SupplierDirectory::new();
        directory.load(&api).await.unwrap();
        directory.select(Some(id));
        let mut state = FormState::new();
        fill(&mut state);
        let controller = GuideFormController::new(&api);
        let created = controller.submit(&mut state, &directory).await.unwrap();

        assert_eq!(controller.delete_guide(created.id, |_| false).await, Ok(false));
        assert_eq!(controller.refresh_history().await.unwrap().len(), 1);

        assert_eq!(controller.delete_guide(created.id, |_| true).await, Ok(true));
        assert!(controller.refresh_history().await.unwrap().is_empty());

        let err = controller.delete_guide(created.id, |_| true).await.unwrap_err();
        assert!(matches!(err, FormError::Api { .. }));
    }

    #[tokio::test]
    async fn test_supplier_delete_cascades_to_guides() {
        let api = InMemoryApi::new();
        let id = api.seed_supplier("Acme", "00.000.000/0001-00");
        let mut directory = SupplierDirectory::new();
        directory.load(&api).await.unwrap();
        directory.select(Some(id));
        let mut state = FormState::new();
        fill(&mut state);
        let controller = GuideFormController::new(&api);
        let created = controller.submit(&mut state, &directory).await.unwrap();

        assert!(directory.delete(&api, id, |_| true).await.unwrap());
        assert!(directory.find(id).is_none());
        assert_eq!(directory.selected_id(), None);

        let mut other = FormState::new();
        let err = controller
            .load_into_form(&mut other, &mut directory, created.id)
            .await
            .unwrap_err();
        assert!(matches!(err, FormError::NotFound(_)));
    }
}
