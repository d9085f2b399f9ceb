use super::view_model::GuideFormViewModel;
use crate::domain::a001_supplier::ui::picker::SupplierPicker;
use crate::domain::a002_guide::equipment_table::EquipmentField;
use crate::domain::a002_guide::motive::Motive;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
fn EquipmentCell(
    vm: GuideFormViewModel,
    row: u64,
    field: EquipmentField,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <td>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || vm.row_field(row, field)
                on:input=move |ev| vm.set_row_field(row, field, event_target_value(&ev))
            />
        </td>
    }
}

#[component]
pub fn GuideForm() -> impl IntoView {
    let vm = use_context::<GuideFormViewModel>().expect("GuideFormViewModel context");

    let on_select = Callback::new(move |id: Option<i64>| vm.select_supplier(id));
    let on_supplier_deleted = Callback::new(move |_: ()| vm.refresh_history());

    let motive_boxes = Motive::ALL
        .iter()
        .map(|&motive| {
            view! {
                <label class="checkbox" for={motive.input_id()}>
                    <input
                        type="checkbox"
                        id={motive.input_id()}
                        prop:checked=move || vm.form.with(|f| f.motives.is_checked(motive))
                        on:change=move |ev| vm.set_motive(motive, event_target_checked(&ev))
                    />
                    {motive.label()}
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="guide-form">
            <section class="card">
                <h2 class="card__title">{icon("shipments")}"Dados da Remessa"</h2>
                <div class="form-row">
                    <div class="form-group">
                        <label for="numero-guia">"Número da Guia"</label>
                        <input
                            type="text"
                            id="numero-guia"
                            readonly
                            placeholder="Gerado ao salvar"
                            prop:value=move || vm.form.with(|f| f.number.clone())
                        />
                    </div>
                    <div class="form-group">
                        <label for="data-emissao">"Data de Emissão"</label>
                        <input
                            type="text"
                            id="data-emissao"
                            placeholder="DD/MM/AAAA"
                            prop:value=move || vm.form.with(|f| f.issue_date.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.edit(|f| f.issue_date = value);
                            }
                        />
                    </div>
                </div>
            </section>

            <section class="card">
                <h2 class="card__title">{icon("suppliers")}"Fornecedor/Prestador de Serviços"</h2>
                <SupplierPicker
                    directory=vm.directory
                    api=vm.api
                    on_select=on_select
                    on_deleted=on_supplier_deleted
                />
            </section>

            <section class="card">
                <h2 class="card__title">"Ativos Remetidos"</h2>
                <table class="table equipment-table">
                    <thead>
                        <tr>
                            <th>"Qtd."</th>
                            <th>"Descrição *"</th>
                            <th>"Nº de Série"</th>
                            <th>"Patrimônio"</th>
                            <th>"Valor Contábil"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || vm.form.with(|f| f.equipment.rows().iter().map(|r| r.key).collect::<Vec<_>>())
                            key=|k| *k
                            children=move |key| {
                                view! {
                                    <tr>
                                        <EquipmentCell vm=vm row=key field=EquipmentField::Quantity input_type="number"/>
                                        <EquipmentCell vm=vm row=key field=EquipmentField::Description placeholder="Descrição do equipamento"/>
                                        <EquipmentCell vm=vm row=key field=EquipmentField::SerialNumber/>
                                        <EquipmentCell vm=vm row=key field=EquipmentField::AssetTag/>
                                        <EquipmentCell vm=vm row=key field=EquipmentField::Value placeholder="R$ 0,00"/>
                                        <td>
                                            <button
                                                class="button button--icon"
                                                title="Remover linha"
                                                on:click=move |_| vm.remove_equipment(key)
                                            >
                                                {icon("trash")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <button class="btn btn-secondary" on:click=move |_| vm.add_equipment()>
                    {icon("plus")}
                    "Adicionar Equipamento"
                </button>
            </section>

            <section class="card">
                <h2 class="card__title">"Motivo da Remessa"</h2>
                <div class="checkbox-group">{motive_boxes}</div>
                <div class="form-group">
                    <label for="outros-texto">"Especifique (Outros)"</label>
                    <input
                        type="text"
                        id="outros-texto"
                        prop:value=move || vm.form.with(|f| f.motives.other_detail.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit(|f| f.motives.other_detail = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="defeito">"Defeito/Problema Relatado *"</label>
                    <textarea
                        id="defeito"
                        rows="4"
                        prop:value=move || vm.form.with(|f| f.defect.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit(|f| f.defect = value);
                        }
                    />
                </div>
            </section>

            <div class="form-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || vm.is_submitting()
                    on:click=move |_| vm.save_command()
                >
                    {icon("save")}
                    {move || if vm.is_submitting() { "Salvando..." } else { "Salvar Guia" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| vm.print_command()>
                    {icon("printer")}
                    "Imprimir"
                </button>
                <button class="btn btn-secondary" on:click=move |_| vm.reset_command()>
                    {icon("refresh")}
                    "Limpar Formulário"
                </button>
            </div>
        </div>
    }
}
