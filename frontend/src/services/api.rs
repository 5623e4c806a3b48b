use gloo_net::http::Request;
use integrations_shared::api::CREDENTIALS_FIELD;
use integrations_shared::{Credentials, IntegrationItem, IntegrationType, LoadError};
use web_sys::FormData;

use crate::config::ApiConfig;

pub struct ApiService;

impl ApiService {
    /// POST the credentials to the integration's load endpoint and decode the
    /// returned items.
    pub async fn load_items(
        config: &ApiConfig,
        integration: IntegrationType,
        credentials: &Credentials,
    ) -> Result<Vec<IntegrationItem>, LoadError> {
        let url = config.load_url(integration);

        let form = FormData::new()
            .map_err(|e| LoadError::Network(format!("Failed to create form: {:?}", e)))?;
        form.append_with_str(CREDENTIALS_FIELD, &credentials.to_form_value())
            .map_err(|e| LoadError::Network(format!("Failed to build form: {:?}", e)))?;

        let response = Request::post(&url)
            .body(form)
            .map_err(|e| LoadError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(LoadError::from_response(response.status(), &body));
        }

        response
            .json()
            .await
            .map_err(|e| LoadError::Decode(e.to_string()))
    }
}
