use crate::domain::a001_supplier::directory::SupplierDirectory;
use crate::shared::api_client::HttpApi;
use crate::shared::confirm::confirm;
use crate::shared::notify::{self, NoticeKind};
use contracts::domain::a001_supplier::aggregate::SupplierDto;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Delay between the success message and the modal closing
const CLOSE_DELAY_MS: u32 = 1500;

/// ViewModel for the supplier create/edit modal
#[derive(Clone, Copy)]
pub struct SupplierDetailsViewModel {
    pub form: RwSignal<SupplierDto>,
    pub message: RwSignal<Option<(NoticeKind, String)>>,
    pub saving: RwSignal<bool>,
}

impl SupplierDetailsViewModel {
    pub fn new(initial: SupplierDto) -> Self {
        Self {
            form: RwSignal::new(initial),
            message: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit_mode())
    }

    pub fn title(&self) -> String {
        if self.is_edit_mode() {
            "Editar Fornecedor".to_string()
        } else {
            "Novo Fornecedor".to_string()
        }
    }

    pub fn edit(&self, f: impl FnOnce(&mut SupplierDto)) {
        self.form.update(f);
    }

    pub fn save_command(
        &self,
        directory: RwSignal<SupplierDirectory>,
        api: StoredValue<HttpApi>,
        on_close: Callback<()>,
    ) {
        if self.saving.get_untracked() {
            return;
        }
        let dto = self.form.get_untracked();
        if let Err(e) = dto.validate() {
            self.message.set(Some((NoticeKind::Error, e)));
            return;
        }

        let message = self.message;
        let saving = self.saving;
        let api = api.get_value();
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let mut dir = directory.get_untracked();
            match dir.upsert(&api, &dto).await {
                Ok(text) => {
                    directory.set(dir);
                    message.set(Some((NoticeKind::Success, text)));
                    TimeoutFuture::new(CLOSE_DELAY_MS).await;
                    on_close.run(());
                }
                Err(e) => {
                    saving.set(false);
                    message.set(Some((NoticeKind::Error, format!("Erro: {}", e))));
                }
            }
        });
    }

    pub fn delete_command(
        &self,
        directory: RwSignal<SupplierDirectory>,
        api: StoredValue<HttpApi>,
        on_close: Callback<()>,
        on_deleted: Callback<()>,
    ) {
        let Some(id) = self.form.with_untracked(|f| f.id) else {
            return;
        };
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let mut dir = directory.get_untracked();
            match dir.delete(&api, id, confirm).await {
                Ok(true) => {
                    directory.set(dir);
                    notify::success("Fornecedor excluído com sucesso");
                    on_close.run(());
                    on_deleted.run(());
                }
                Ok(false) => {}
                Err(e) => notify::error(&format!("Erro ao excluir fornecedor: {}", e)),
            }
        });
    }
}
