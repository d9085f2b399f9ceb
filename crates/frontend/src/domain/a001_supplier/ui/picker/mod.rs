use crate::domain::a001_supplier::directory::{SupplierDirectory, SupplierInfo};
use crate::domain::a001_supplier::ui::details::SupplierDetails;
use crate::shared::api_client::HttpApi;
use crate::shared::icons::icon;
use crate::shared::notify;
use contracts::domain::a001_supplier::aggregate::SupplierDto;
use leptos::prelude::*;

/// Supplier select with its info panel and the new/edit buttons
#[component]
pub fn SupplierPicker(
    directory: RwSignal<SupplierDirectory>,
    api: StoredValue<HttpApi>,
    on_select: Callback<Option<i64>>,
    /// Runs after a supplier was deleted
    on_deleted: Callback<()>,
) -> impl IntoView {
    // Some(dto) while the modal is open
    let editing = RwSignal::new(None::<SupplierDto>);

    let open_new = move |_| editing.set(Some(SupplierDto::default()));
    let open_edit = move |_| {
        let dto = directory.with_untracked(|d| d.selected().map(SupplierDto::from_supplier));
        match dto {
            Some(dto) => editing.set(Some(dto)),
            None => notify::warning("Selecione um fornecedor para editar"),
        }
    };
    let close = Callback::new(move |_: ()| editing.set(None));

    let info = move || directory.with(|d| d.selected().map(SupplierInfo::from));

    view! {
        <div class="supplier-picker">
            <div class="form-group form-group--inline">
                <label for="fornecedor">"Fornecedor *"</label>
                <select
                    id="fornecedor"
                    on:change=move |ev| {
                        let id = event_target_value(&ev).parse::<i64>().ok();
                        on_select.run(id);
                    }
                >
                    <option value="" prop:selected=move || directory.with(|d| d.selected_id().is_none())>
                        "Selecione um fornecedor"
                    </option>
                    {move || directory.with(|d| {
                        let current = d.selected_id();
                        d.suppliers()
                            .iter()
                            .map(|s| view! {
                                <option value={s.id.to_string()} prop:selected={current == Some(s.id)}>
                                    {s.display_label()}
                                </option>
                            })
                            .collect_view()
                    })}
                </select>
                <button class="btn btn-secondary" title="Novo fornecedor" on:click=open_new>
                    {icon("plus")}
                    "Novo"
                </button>
                <button class="btn btn-secondary" title="Editar fornecedor" on:click=open_edit>
                    {icon("edit")}
                    "Editar"
                </button>
            </div>

            {move || info().map(|info| view! {
                <div class="supplier-info">
                    <p><strong>"CNPJ: "</strong>{info.tax_id}</p>
                    <p><strong>"Contato: "</strong>{info.contact}</p>
                    <p><strong>"E-mail: "</strong>{info.email}</p>
                    <p><strong>"Endereço: "</strong>{info.address}</p>
                    <p><strong>"Responsável: "</strong>{info.responsible}</p>
                </div>
            })}

            {move || editing.get().map(|dto| view! {
                <SupplierDetails
                    initial=dto
                    directory=directory
                    api=api
                    on_close=close
                    on_deleted=on_deleted
                />
            })}
        </div>
    }
}
