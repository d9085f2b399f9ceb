use crate::domain::a002_guide::ui::form::GuideFormViewModel;
use crate::shared::date_utils::history_date;
use crate::shared::icons::icon;
use contracts::domain::a002_guide::aggregate::Guide;
use leptos::prelude::*;

/// One line of the history table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: i64,
    pub number: String,
    pub date: String,
    pub supplier: String,
    pub equipment: String,
    pub motive: String,
}

impl From<&Guide> for HistoryRow {
    fn from(g: &Guide) -> Self {
        let motive = match g.motive.as_deref() {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => "-".to_string(),
        };
        Self {
            id: g.id,
            number: g.number.clone(),
            date: history_date(g.issue_date.as_deref()),
            supplier: g.supplier.name.clone(),
            equipment: format!("{} equipamento(s)", g.equipment.len()),
            motive,
        }
    }
}

#[component]
pub fn GuideHistory() -> impl IntoView {
    let vm = use_context::<GuideFormViewModel>().expect("GuideFormViewModel context");
    let rows = move || vm.history.with(|list| list.iter().map(HistoryRow::from).collect::<Vec<_>>());

    view! {
        <section class="card history">
            <div class="card__header">
                <h2 class="card__title">"Histórico de Guias"</h2>
                <button class="button button--icon" title="Atualizar" on:click=move |_| vm.refresh_history()>
                    {icon("refresh")}
                </button>
            </div>
            <Show
                when=move || vm.history.with(|list| !list.is_empty())
                fallback=|| view! { <p class="empty">"Nenhuma guia registrada"</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Número"</th>
                            <th>"Data"</th>
                            <th>"Fornecedor"</th>
                            <th>"Equipamentos"</th>
                            <th>"Motivo"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|row| (row.id, row.number.clone())
                            children=move |row| {
                                let id = row.id;
                                view! {
                                    <tr>
                                        <td>{row.number}</td>
                                        <td>{row.date}</td>
                                        <td>{row.supplier}</td>
                                        <td>{row.equipment}</td>
                                        <td>{row.motive}</td>
                                        <td class="actions">
                                            <button
                                                class="btn btn-secondary"
                                                disabled=move || vm.form.with(|f| f.phase.is_busy())
                                                on:click=move |_| vm.load_guide_command(id)
                                            >
                                                {icon("folder-open")}
                                                "Carregar"
                                            </button>
                                            <button class="btn btn-danger" on:click=move |_| vm.delete_guide_command(id)>
                                                {icon("trash")}
                                                "Excluir"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
