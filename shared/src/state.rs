use crate::api::LoadError;
use crate::models::{IntegrationItem, IntegrationType};

/// Items currently on display: nothing loaded yet, or the last successful load
/// together with the integration it came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultSet {
    #[default]
    Empty,
    Loaded {
        integration: IntegrationType,
        items: Vec<IntegrationItem>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultAction {
    /// A load succeeded; its items replace whatever was shown.
    Loaded {
        integration: IntegrationType,
        items: Vec<IntegrationItem>,
    },
    Clear,
}

impl ResultSet {
    pub fn apply(self, action: ResultAction) -> ResultSet {
        match action {
            ResultAction::Loaded { integration, items } => ResultSet::Loaded { integration, items },
            ResultAction::Clear => ResultSet::Empty,
        }
    }

    /// The loaded items and their integration, if a load has succeeded.
    pub fn loaded(&self) -> Option<(IntegrationType, &[IntegrationItem])> {
        match self {
            ResultSet::Empty => None,
            ResultSet::Loaded { integration, items } => Some((*integration, items.as_slice())),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ResultSet::Loaded { .. })
    }
}

/// What a finished load does: a success becomes an action to dispatch, a
/// failure becomes the alert text and changes nothing.
pub fn load_outcome(
    integration: IntegrationType,
    result: Result<Vec<IntegrationItem>, LoadError>,
) -> Result<ResultAction, String> {
    match result {
        Ok(items) => Ok(ResultAction::Loaded { integration, items }),
        Err(e) => Err(e.alert_message()),
    }
}
