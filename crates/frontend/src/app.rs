use crate::domain::a002_guide::ui::form::{GuideForm, GuideFormViewModel};
use crate::domain::a002_guide::ui::history::GuideHistory;
use crate::shared::api_client::HttpApi;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let api = HttpApi::from_location();
    log::info!("API base: {}", api.base());

    // Form, supplier directory and history shared by every section
    let vm = GuideFormViewModel::new(api);
    provide_context(vm);

    vm.load_suppliers();
    vm.refresh_history();

    view! {
        <div class="container">
            <header class="page-header">
                <h1>"Guia de Remessa para Manutenção/Conserto"</h1>
            </header>
            <GuideForm />
            <GuideHistory />
        </div>
    }
}
