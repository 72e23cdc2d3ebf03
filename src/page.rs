use crate::component::Component;
use crate::document::PageDocument;
use crate::result::{HudError, HudErrorKind, HudResult};
use serde_json::{Map, Value};

/// Envelope around one root container, sent to the HUD as a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    title: String,
    description: String,
    prompt: String,
    form: bool,
    root: Component,
    effects: Option<Map<String, Value>>,
    presets: Option<Map<String, Value>>,
}

impl Page {
    pub fn new(title: impl Into<String>, root: Component) -> HudResult<Self> {
        if !root.is_container() {
            return Err(HudError::new(HudErrorKind::NotAContainer(
                root.id().to_string(),
            )));
        }
        Ok(Self {
            title: title.into(),
            description: String::new(),
            prompt: String::new(),
            form: false,
            root,
            effects: None,
            presets: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Marks whether submitting the page is a form submission or a passive display.
    pub fn with_form(mut self, form: bool) -> Self {
        self.form = form;
        self
    }

    pub fn with_effects(mut self, effects: Map<String, Value>) -> Self {
        self.effects = Some(effects);
        self
    }

    pub fn with_presets(mut self, presets: Map<String, Value>) -> Self {
        self.presets = Some(presets);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn is_form(&self) -> bool {
        self.form
    }

    pub fn root(&self) -> &Component {
        &self.root
    }

    pub fn serialize(&self) -> PageDocument {
        PageDocument {
            title: self.title.clone(),
            description: self.description.clone(),
            prompt: self.prompt.clone(),
            form: self.form,
            root: self.root.serialize(),
            effects: self.effects.clone(),
            presets: self.presets.clone(),
        }
    }

    /// UTF-8 JSON bytes of the page document, as sent on the wire.
    pub fn to_payload(&self) -> HudResult<Vec<u8>> {
        Ok(serde_json::to_vec(&self.serialize())?)
    }
}
