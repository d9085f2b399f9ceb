use crate::domain::a001_supplier::directory::SupplierDirectory;
use crate::domain::a002_guide::controller::GuideFormController;
use crate::domain::a002_guide::equipment_table::EquipmentField;
use crate::domain::a002_guide::form_state::{FormPhase, FormState};
use crate::domain::a002_guide::motive::Motive;
use crate::domain::a002_guide::print::render_print_document;
use crate::domain::a002_guide::ui::print_window::open_print_window;
use crate::shared::api_client::HttpApi;
use crate::shared::confirm::confirm;
use crate::shared::error::FormError;
use crate::shared::notify;
use contracts::domain::a002_guide::aggregate::Guide;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel shared by the guide form, the supplier picker and the history list
#[derive(Clone, Copy)]
pub struct GuideFormViewModel {
    pub form: RwSignal<FormState>,
    pub directory: RwSignal<SupplierDirectory>,
    pub history: RwSignal<Vec<Guide>>,
    pub api: StoredValue<HttpApi>,
}

impl GuideFormViewModel {
    pub fn new(api: HttpApi) -> Self {
        Self {
            form: RwSignal::new(FormState::new()),
            directory: RwSignal::new(SupplierDirectory::new()),
            history: RwSignal::new(Vec::new()),
            api: StoredValue::new(api),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.form.with(|f| f.phase == FormPhase::Submitting)
    }

    // ------------------------------------------------------------------
    // Field edits
    // ------------------------------------------------------------------

    pub fn edit(&self, f: impl FnOnce(&mut FormState)) {
        self.form.update(|state| {
            f(state);
            state.touch();
        });
    }

    pub fn row_field(&self, key: u64, field: EquipmentField) -> String {
        self.form.with(|f| {
            f.equipment
                .rows()
                .iter()
                .find(|r| r.key == key)
                .map(|r| match field {
                    EquipmentField::Quantity => r.quantity.clone(),
                    EquipmentField::Description => r.description.clone(),
                    EquipmentField::SerialNumber => r.serial_number.clone(),
                    EquipmentField::AssetTag => r.asset_tag.clone(),
                    EquipmentField::Value => r.value.clone(),
                })
                .unwrap_or_default()
        })
    }

    pub fn set_row_field(&self, key: u64, field: EquipmentField, value: String) {
        self.edit(|f| {
            if let Some(index) = f.equipment.index_of(key) {
                f.equipment.set_field(index, field, value);
            }
        });
    }

    pub fn add_equipment(&self) {
        self.edit(|f| f.equipment.add_line());
    }

    pub fn remove_equipment(&self, key: u64) {
        let mut warning = None;
        self.edit(|f| {
            if let Some(index) = f.equipment.index_of(key) {
                if let Err(e) = f.equipment.remove_line(index) {
                    warning = Some(e.to_string());
                }
            }
        });
        if let Some(w) = warning {
            notify::warning(&w);
        }
    }

    pub fn set_motive(&self, motive: Motive, checked: bool) {
        self.edit(|f| f.motives.set_checked(motive, checked));
    }

    pub fn select_supplier(&self, id: Option<i64>) {
        self.directory.update(|d| {
            d.select(id);
        });
        self.form.update(|f| f.touch());
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn load_suppliers(&self) {
        let directory = self.directory;
        let api = self.api.get_value();
        spawn_local(async move {
            let mut dir = directory.get_untracked();
            let result = dir.load(&api).await.map(|list| list.len());
            match result {
                Ok(_) => directory.set(dir),
                Err(e) => notify::error(&format!("Erro ao carregar fornecedores: {}", e)),
            }
        });
    }

    pub fn refresh_history(&self) {
        let history = self.history;
        let api = self.api.get_value();
        spawn_local(async move {
            match GuideFormController::new(&api).refresh_history().await {
                Ok(list) => history.set(list),
                // history failures stay in the console
                Err(e) => log::error!("Erro ao carregar histórico: {}", e),
            }
        });
    }

    pub fn save_command(&self) {
        let form = self.form;
        let mut state = form.get_untracked();
        if state.phase == FormPhase::Submitting {
            return;
        }
        let dir = self.directory.get_untracked();

        // validation errors are reported without touching the phase
        if let Err(e) = state.build_submission(&dir) {
            notify::error(&e.to_string());
            return;
        }

        form.update(|f| f.phase = FormPhase::Submitting);
        let api = self.api.get_value();
        let vm = *self;
        spawn_local(async move {
            match GuideFormController::new(&api).submit(&mut state, &dir).await {
                Ok(created) => {
                    form.update(|f| f.apply_created(&created));
                    notify::success(&format!(
                        "Guia salva com sucesso! Número: {}",
                        created.number
                    ));
                    vm.refresh_history();
                }
                Err(e) => {
                    form.update(|f| f.phase = FormPhase::Failed);
                    notify::error(&e.to_string());
                }
            }
        });
    }

    pub fn load_guide_command(&self, id: i64) {
        let form = self.form;
        let directory = self.directory;
        let api = self.api.get_value();
        form.update(|f| f.phase = FormPhase::Loading);
        spawn_local(async move {
            let mut state = form.get_untracked();
            let mut dir = directory.get_untracked();
            let result = GuideFormController::new(&api)
                .load_into_form(&mut state, &mut dir, id)
                .await;
            match result {
                Ok(()) => {
                    let number = state.number.clone();
                    form.set(state);
                    directory.set(dir);
                    notify::success(&format!("Guia {} carregada para visualização", number));
                    if let Some(win) = web_sys::window() {
                        win.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                Err(e) => {
                    form.update(|f| f.phase = FormPhase::Failed);
                    notify::error(&format!("Erro ao carregar guia: {}", e));
                }
            }
        });
    }

    pub fn delete_guide_command(&self, id: i64) {
        let api = self.api.get_value();
        let vm = *self;
        spawn_local(async move {
            match GuideFormController::new(&api).delete_guide(id, confirm).await {
                Ok(true) => {
                    notify::success("Guia excluída com sucesso");
                    vm.refresh_history();
                }
                Ok(false) => {}
                Err(e) => notify::error(&e.to_string()),
            }
        });
    }

    pub fn reset_command(&self) {
        let mut state = self.form.get_untracked();
        let mut dir = self.directory.get_untracked();
        if state.reset(&mut dir, confirm) {
            self.form.set(state);
            self.directory.set(dir);
            notify::success("Formulário limpo com sucesso");
        }
    }

    pub fn print_command(&self) {
        let snapshot = {
            let dir = self.directory.get_untracked();
            self.form.with_untracked(|f| f.print_snapshot(&dir))
        };
        let snapshot = match snapshot {
            Ok(s) => s,
            Err(FormError::Validation(msg)) => {
                notify::error(&format!("Corrija os seguintes erros: {}", msg));
                return;
            }
            Err(e) => {
                notify::error(&e.to_string());
                return;
            }
        };

        let html = render_print_document(&snapshot);
        match open_print_window(&html) {
            Ok(()) => notify::success("Guia gerada para impressão! Verifique a nova aba."),
            Err(e) => notify::error(&e),
        }
    }
}
