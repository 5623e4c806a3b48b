use integrations_shared::display::entries;
use integrations_shared::{IntegrationItem, IntegrationType, ItemEntry};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ItemListProps {
    pub integration_type: IntegrationType,
    pub items: Vec<IntegrationItem>,
}

#[function_component(ItemList)]
pub fn item_list(props: &ItemListProps) -> Html {
    let integration = props.integration_type;

    html! {
        <div class="results-panel" style="max-height: 400px; overflow: auto;">
            <h3>{ integration.item_label() }</h3>
            <ul class="item-list">
                { for entries(&props.items).into_iter().map(|entry| html! {
                    <ItemRow entry={entry} integration_type={integration} />
                })}
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ItemRowProps {
    entry: ItemEntry,
    integration_type: IntegrationType,
}

#[function_component(ItemRow)]
fn item_row(props: &ItemRowProps) -> Html {
    let entry = &props.entry;

    html! {
        <li class="integration-item">
            <div class="item-name">{ &entry.name }</div>
            <div class="item-meta">
                <span class="item-created">{ format!("Created: {}", entry.created) }</span>
                <br />
                <span class="item-modified">{ format!("Last Modified: {}", entry.last_modified) }</span>
                if let Some(url) = &entry.url {
                    <>
                        <br />
                        <a href={url.clone()} target="_blank" rel="noopener noreferrer">
                            { format!("View in {}", props.integration_type) }
                        </a>
                    </>
                }
            </div>
        </li>
    }
}
