//! Wire documents produced by serializing components and pages.

use crate::component::kind::ComponentKind;
use crate::component::props::Props;
use crate::result::HudResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Serialized form of a single component.
///
/// Leaves never carry `children`, containers always do (possibly empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDocument {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub id: String,
    pub classes: Option<String>,
    pub props: Props,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ComponentDocument>>,
}

/// Top level document sent to the HUD peer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub title: String,
    pub description: String,
    pub prompt: String,
    pub form: bool,
    pub root: ComponentDocument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presets: Option<Map<String, Value>>,
}

impl PageDocument {
    pub fn to_json(&self) -> HudResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> HudResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> HudResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
