use super::view_model::SupplierDetailsViewModel;
use crate::domain::a001_supplier::directory::SupplierDirectory;
use crate::shared::api_client::HttpApi;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::notify::NoticeKind;
use contracts::domain::a001_supplier::aggregate::SupplierDto;
use leptos::prelude::*;

#[component]
pub fn SupplierDetails(
    initial: SupplierDto,
    directory: RwSignal<SupplierDirectory>,
    api: StoredValue<HttpApi>,
    on_close: Callback<()>,
    /// Runs after a delete; guides of the supplier are gone too
    on_deleted: Callback<()>,
) -> impl IntoView {
    let vm = SupplierDetailsViewModel::new(initial);
    let title = Signal::derive(move || vm.title());

    // one text input bound to a SupplierDto field
    let text_field = move |id: &'static str,
                           label: &'static str,
                           placeholder: &'static str,
                           get: fn(&SupplierDto) -> String,
                           set: fn(&mut SupplierDto, String)| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type="text"
                    id=id
                    placeholder=placeholder
                    prop:value=move || vm.form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.edit(|f| set(f, value));
                    }
                />
            </div>
        }
    };

    view! {
        <Modal title=title on_close=on_close>
            <div class="details-container supplier-details">
                {move || vm.message.get().map(|(kind, text)| {
                    let class = match kind {
                        NoticeKind::Success => "message message--success",
                        NoticeKind::Warning => "message message--warning",
                        NoticeKind::Error => "message message--error",
                    };
                    view! { <div class=class>{text}</div> }
                })}

                <div class="details-form">
                    {text_field("nome", "Razão Social *", "Nome do fornecedor",
                        |f| f.name.clone(), |f, v| f.name = v)}
                    {text_field("cnpj", "CNPJ *", "00.000.000/0000-00",
                        |f| f.tax_id.clone(), |f, v| f.tax_id = v)}
                    {text_field("contato", "Contato", "Telefone",
                        |f| f.contact.clone(), |f, v| f.contact = v)}
                    {text_field("email", "E-mail", "email@fornecedor.com.br",
                        |f| f.email.clone(), |f, v| f.email = v)}
                    {text_field("endereco", "Endereço", "Rua, número, cidade",
                        |f| f.address.clone(), |f, v| f.address = v)}
                    {text_field("responsavel", "Responsável", "Nome do responsável",
                        |f| f.responsible.clone(), |f, v| f.responsible = v)}
                </div>

                <div class="details-actions">
                    <button
                        class="btn btn-primary"
                        disabled=move || vm.saving.get()
                        on:click=move |_| vm.save_command(directory, api, on_close)
                    >
                        {icon("save")}
                        {move || if vm.is_edit_mode() { "Atualizar" } else { "Salvar" }}
                    </button>
                    <Show when=move || vm.is_edit_mode()>
                        <button
                            class="btn btn-danger"
                            on:click=move |_| vm.delete_command(directory, api, on_close, on_deleted)
                        >
                            {icon("trash")}
                            "Excluir"
                        </button>
                    </Show>
                    <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        {icon("x")}
                        "Cancelar"
                    </button>
                </div>
            </div>
        </Modal>
    }
}
