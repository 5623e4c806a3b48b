use integrations_shared::{Credentials, IntegrationType};
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::data_form::DataForm;

const CREDENTIALS_PLACEHOLDER: &str = r#"{ "access_token": "..." }"#;

/// Credentials textarea contents plus the last text that parsed.
///
/// The loader keeps using the last valid credentials while the text is being
/// edited, so a half-typed edit never unmounts it.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialsDraft {
    pub text: String,
    pub credentials: Credentials,
    pub error: Option<String>,
}

impl Default for CredentialsDraft {
    fn default() -> Self {
        Self {
            text: "{}".to_string(),
            credentials: Credentials::empty(),
            error: None,
        }
    }
}

impl CredentialsDraft {
    pub fn edit(&self, text: String) -> Self {
        match Credentials::from_json_text(&text) {
            Ok(credentials) => Self {
                text,
                credentials,
                error: None,
            },
            Err(e) => Self {
                text,
                credentials: self.credentials.clone(),
                error: Some(format!("Credentials must be valid JSON: {}", e)),
            },
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let integration = use_state(|| IntegrationType::HubSpot);
    let draft = use_state(CredentialsDraft::default);

    let on_integration_change = {
        let integration = integration.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<IntegrationType>() {
                Ok(selected) => integration.set(selected),
                Err(err) => tracing::warn!("Ignoring selection: {}", err),
            }
        })
    };

    let on_credentials_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(draft.edit(input.value()));
        })
    };

    html! {
        <div class="container">
            <h2>{ "Load Integration Data" }</h2>
            <div class="integration-form">
                <label for="integration-type">{ "Integration" }</label>
                <select id="integration-type" onchange={on_integration_change}>
                    { for IntegrationType::ALL.into_iter().map(|option| html! {
                        <option value={option.name()} selected={option == *integration}>
                            { option.name() }
                        </option>
                    })}
                </select>

                <label for="credentials">{ "Credentials (JSON)" }</label>
                <textarea
                    id="credentials"
                    rows="4"
                    placeholder={CREDENTIALS_PLACEHOLDER}
                    value={draft.text.clone()}
                    oninput={on_credentials_input}
                />
            </div>
            if let Some(error) = &draft.error {
                <p class="error">{ error }</p>
            }
            <DataForm integration_type={*integration} credentials={draft.credentials.clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_starts_with_empty_object() {
        let draft = CredentialsDraft::default();
        assert_eq!(draft.credentials, Credentials::from_json_text(&draft.text).unwrap());
        assert_eq!(draft.error, None);
    }

    #[test]
    fn test_invalid_edit_keeps_last_valid_credentials() {
        let draft = CredentialsDraft::default().edit(r#"{"token": "abc"}"#.to_string());
        assert_eq!(draft.error, None);

        let half_typed = draft.edit(r#"{"token": "abc", "a"#.to_string());
        assert_eq!(half_typed.text, r#"{"token": "abc", "a"#);
        assert_eq!(half_typed.credentials, draft.credentials);
        assert!(half_typed
            .error
            .as_deref()
            .unwrap()
            .starts_with("Credentials must be valid JSON"));

        let fixed = half_typed.edit(r#"{"token": "xyz"}"#.to_string());
        assert_eq!(fixed.error, None);
        assert_eq!(fixed.credentials.to_form_value(), r#"{"token":"xyz"}"#);
    }
}
