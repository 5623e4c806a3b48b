use integrations_shared::api::load_path;
use integrations_shared::IntegrationType;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Where the integrations backend lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn load_url(&self, integration: IntegrationType) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            load_path(integration)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(
            config.load_url(IntegrationType::HubSpot),
            "http://localhost:8000/integrations/hubspot/load"
        );
    }

    #[test]
    fn test_each_integration_has_its_own_route() {
        let config = ApiConfig::new("https://api.example.com/");
        let urls: Vec<String> = IntegrationType::ALL
            .into_iter()
            .map(|integration| config.load_url(integration))
            .collect();

        assert_eq!(
            urls,
            vec![
                "https://api.example.com/integrations/notion/load",
                "https://api.example.com/integrations/airtable/load",
                "https://api.example.com/integrations/hubspot/load",
            ]
        );
    }
}
