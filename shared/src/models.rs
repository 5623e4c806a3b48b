use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Third-party source the backend can load items from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationType {
    Notion,
    Airtable,
    HubSpot,
}

impl IntegrationType {
    pub const ALL: [IntegrationType; 3] = [
        IntegrationType::Notion,
        IntegrationType::Airtable,
        IntegrationType::HubSpot,
    ];

    /// Human-readable name, also the name accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            IntegrationType::Notion => "Notion",
            IntegrationType::Airtable => "Airtable",
            IntegrationType::HubSpot => "HubSpot",
        }
    }

    /// Backend route segment under `/integrations/`.
    pub fn route(&self) -> &'static str {
        match self {
            IntegrationType::Notion => "notion",
            IntegrationType::Airtable => "airtable",
            IntegrationType::HubSpot => "hubspot",
        }
    }

    /// Heading shown above the loaded items.
    pub fn item_label(&self) -> &'static str {
        match self {
            IntegrationType::Notion => "Notion Pages",
            IntegrationType::Airtable => "Airtable Records",
            IntegrationType::HubSpot => "HubSpot Contacts",
        }
    }
}

impl fmt::Display for IntegrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown integration: {0}")]
pub struct UnknownIntegration(pub String);

impl FromStr for IntegrationType {
    type Err = UnknownIntegration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntegrationType::ALL
            .into_iter()
            .find(|integration| integration.name() == s)
            .ok_or_else(|| UnknownIntegration(s.to_string()))
    }
}

/// Caller-supplied authentication data, forwarded to the backend untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials(pub serde_json::Value);

impl Credentials {
    pub fn new(value: serde_json::Value) -> Self {
        Credentials(value)
    }

    /// An empty JSON object.
    pub fn empty() -> Self {
        Credentials(serde_json::Value::Object(serde_json::Map::new()))
    }

    /// Parse credentials typed in as JSON text.
    pub fn from_json_text(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Credentials)
    }

    /// Compact JSON text sent as the `credentials` form field.
    pub fn to_form_value(&self) -> String {
        self.0.to_string()
    }
}

impl From<serde_json::Value> for Credentials {
    fn from(value: serde_json::Value) -> Self {
        Credentials(value)
    }
}

/// One record returned by `/integrations/{route}/load`.
///
/// Every field is supplied by the backend and kept as-is; timestamps stay
/// strings until they are formatted for display. Identifiers are never
/// rendered and differ in shape between integrations, so they stay raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegrationItem {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default, rename = "type")]
    pub item_type: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub last_modified_time: Option<String>,
    #[serde(default)]
    pub parent_id: Option<serde_json::Value>,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_routes_are_fixed_per_integration() {
        assert_eq!(IntegrationType::Notion.route(), "notion");
        assert_eq!(IntegrationType::Airtable.route(), "airtable");
        assert_eq!(IntegrationType::HubSpot.route(), "hubspot");
    }

    #[test]
    fn test_parse_known_names() {
        for integration in IntegrationType::ALL {
            assert_eq!(integration.name().parse::<IntegrationType>(), Ok(integration));
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "Salesforce".parse::<IntegrationType>().unwrap_err();
        assert_eq!(err, UnknownIntegration("Salesforce".to_string()));

        // names are matched exactly, not by route
        assert!("hubspot".parse::<IntegrationType>().is_err());
    }

    #[test]
    fn test_credentials_forwarded_as_compact_json() {
        let credentials = Credentials::new(json!({ "token": "abc" }));
        assert_eq!(credentials.to_form_value(), r#"{"token":"abc"}"#);
    }

    #[test]
    fn test_credentials_from_text() {
        let credentials = Credentials::from_json_text(r#" { "access_token": "t-1" } "#).unwrap();
        assert_eq!(credentials.0["access_token"], "t-1");
        assert!(Credentials::from_json_text("{not json").is_err());
    }

    #[test]
    fn test_empty_credentials_are_an_object() {
        assert_eq!(Credentials::empty().to_form_value(), "{}");
    }

    #[test]
    fn test_item_deserializes_backend_shape() {
        let body = json!({
            "id": "101",
            "type": "contact",
            "name": "Jane Doe",
            "creation_time": "2024-01-01T00:00:00Z",
            "last_modified_time": null,
            "parent_id": null,
            "url": "https://app.hubspot.com/contacts/101",
            "children": []
        });

        let item: IntegrationItem = serde_json::from_value(body).unwrap();
        assert_eq!(item.id, Some(json!("101")));
        assert_eq!(item.item_type, Some(json!("contact")));
        assert_eq!(item.name.as_deref(), Some("Jane Doe"));
        assert_eq!(item.creation_time.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(item.last_modified_time, None);
        assert_eq!(item.url.as_deref(), Some("https://app.hubspot.com/contacts/101"));
    }

    #[test]
    fn test_item_tolerates_missing_fields() {
        let item: IntegrationItem = serde_json::from_value(json!({ "name": "Only name" })).unwrap();
        assert_eq!(item.name.as_deref(), Some("Only name"));
        assert_eq!(item.url, None);
    }

    #[test]
    fn test_item_accepts_numeric_identifiers() {
        let item: IntegrationItem =
            serde_json::from_value(json!({ "id": 5, "parent_id": 12, "name": "x" })).unwrap();
        assert_eq!(item.id, Some(json!(5)));
        assert_eq!(item.parent_id, Some(json!(12)));
        assert_eq!(item.name.as_deref(), Some("x"));
    }
}
