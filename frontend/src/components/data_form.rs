use integrations_shared::{load_outcome, Credentials, IntegrationType, ResultAction, ResultSet};
use yew::prelude::*;

use crate::components::item_list::ItemList;
use crate::config::ApiConfig;
use crate::services::api::ApiService;
use crate::state::LoadedData;

#[derive(Properties, PartialEq)]
pub struct DataFormProps {
    pub integration_type: IntegrationType,
    pub credentials: Credentials,
    #[prop_or_default]
    pub config: ApiConfig,
}

/// Load and clear buttons for one integration, plus the items from the last
/// successful load.
///
/// Loads are not serialized: each click issues its own request and whichever
/// completes last is what stays on screen. A failed load shows the server's
/// detail in an alert and leaves the current items alone.
#[function_component(DataForm)]
pub fn data_form(props: &DataFormProps) -> Html {
    let loaded = use_reducer(LoadedData::default);

    let on_load = {
        let dispatcher = loaded.dispatcher();
        let integration = props.integration_type;
        let credentials = props.credentials.clone();
        let config = props.config.clone();

        Callback::from(move |_: MouseEvent| {
            let dispatcher = dispatcher.clone();
            let credentials = credentials.clone();
            let config = config.clone();

            wasm_bindgen_futures::spawn_local(async move {
                tracing::debug!("Loading {} items", integration);
                let result = ApiService::load_items(&config, integration, &credentials).await;
                if let Err(e) = &result {
                    tracing::warn!("Failed to load {} items: {}", integration, e);
                }

                match load_outcome(integration, result) {
                    Ok(action) => dispatcher.dispatch(action),
                    Err(message) => gloo::dialogs::alert(&message),
                }
            });
        })
    };

    let on_clear = {
        let dispatcher = loaded.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ResultAction::Clear))
    };

    html! {
        <DataFormView results={loaded.0.clone()} on_load={on_load} on_clear={on_clear} />
    }
}

#[derive(Properties, PartialEq)]
pub struct DataFormViewProps {
    pub results: ResultSet,
    pub on_load: Callback<MouseEvent>,
    pub on_clear: Callback<MouseEvent>,
}

#[function_component(DataFormView)]
pub fn data_form_view(props: &DataFormViewProps) -> Html {
    html! {
        <div class="data-form">
            if let Some((integration, items)) = props.results.loaded() {
                <ItemList integration_type={integration} items={items.to_vec()} />
            }
            <button class="btn btn-primary" onclick={props.on_load.clone()}>{ "Load Data" }</button>
            <button class="btn btn-secondary" onclick={props.on_clear.clone()}>{ "Clear Data" }</button>
        </div>
    }
}
