use crate::component::props::{PropKey, PropType};
use crate::err;
use crate::result::HudResult;
use phf::phf_map;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Levels outside of 1..=6 fall back to `H1`.
    pub fn from_level(level: i64) -> Self {
        match level {
            2 => HeadingLevel::H2,
            3 => HeadingLevel::H3,
            4 => HeadingLevel::H4,
            5 => HeadingLevel::H5,
            6 => HeadingLevel::H6,
            _ => HeadingLevel::H1,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }
}

/// Rendering type of a component, serialized as its `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Div,
    Form,
    Section,
    Label,
    Input,
    Select,
    Checkbox,
    Radio,
    Button,
    Heading(HeadingLevel),
}

static KINDS: phf::Map<&'static str, ComponentKind> = phf_map! {
    "div" => ComponentKind::Div,
    "form" => ComponentKind::Form,
    "section" => ComponentKind::Section,
    "label" => ComponentKind::Label,
    "input" => ComponentKind::Input,
    "select" => ComponentKind::Select,
    "checkbox" => ComponentKind::Checkbox,
    "radio" => ComponentKind::Radio,
    "button" => ComponentKind::Button,
    "h1" => ComponentKind::Heading(HeadingLevel::H1),
    "h2" => ComponentKind::Heading(HeadingLevel::H2),
    "h3" => ComponentKind::Heading(HeadingLevel::H3),
    "h4" => ComponentKind::Heading(HeadingLevel::H4),
    "h5" => ComponentKind::Heading(HeadingLevel::H5),
    "h6" => ComponentKind::Heading(HeadingLevel::H6),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropSpec {
    pub key: PropKey,
    pub prop_type: PropType,
    pub required: bool,
}

impl PropSpec {
    const fn required(key: PropKey, prop_type: PropType) -> Self {
        Self {
            key,
            prop_type,
            required: true,
        }
    }

    const fn optional(key: PropKey, prop_type: PropType) -> Self {
        Self {
            key,
            prop_type,
            required: false,
        }
    }
}

const CONTAINER_PROPS: &[PropSpec] = &[];

const TEXT_PROPS: &[PropSpec] = &[PropSpec::required(PropKey::Text, PropType::Text)];

const INPUT_PROPS: &[PropSpec] = &[
    PropSpec::required(PropKey::Label, PropType::Text),
    PropSpec::optional(PropKey::Hint, PropType::Text),
];

const CHOICE_PROPS: &[PropSpec] = &[
    PropSpec::required(PropKey::Label, PropType::Text),
    PropSpec::required(PropKey::Options, PropType::List),
];

const BUTTON_PROPS: &[PropSpec] = &[
    PropSpec::required(PropKey::Text, PropType::Text),
    PropSpec::optional(PropKey::Submit, PropType::Flag),
];

impl ComponentKind {
    pub fn from_tag(tag: &str) -> HudResult<Self> {
        KINDS
            .get(tag)
            .copied()
            .ok_or_else(|| err!("Unknown component type '{}'", tag))
    }

    pub fn tag(self) -> &'static str {
        match self {
            ComponentKind::Div => "div",
            ComponentKind::Form => "form",
            ComponentKind::Section => "section",
            ComponentKind::Label => "label",
            ComponentKind::Input => "input",
            ComponentKind::Select => "select",
            ComponentKind::Checkbox => "checkbox",
            ComponentKind::Radio => "radio",
            ComponentKind::Button => "button",
            ComponentKind::Heading(HeadingLevel::H1) => "h1",
            ComponentKind::Heading(HeadingLevel::H2) => "h2",
            ComponentKind::Heading(HeadingLevel::H3) => "h3",
            ComponentKind::Heading(HeadingLevel::H4) => "h4",
            ComponentKind::Heading(HeadingLevel::H5) => "h5",
            ComponentKind::Heading(HeadingLevel::H6) => "h6",
        }
    }

    pub fn is_container(self) -> bool {
        matches!(
            self,
            ComponentKind::Div | ComponentKind::Form | ComponentKind::Section
        )
    }

    /// The closed set of props this kind accepts.
    pub fn prop_specs(self) -> &'static [PropSpec] {
        match self {
            ComponentKind::Div | ComponentKind::Form | ComponentKind::Section => CONTAINER_PROPS,
            ComponentKind::Label | ComponentKind::Heading(_) => TEXT_PROPS,
            ComponentKind::Input => INPUT_PROPS,
            ComponentKind::Select | ComponentKind::Checkbox | ComponentKind::Radio => CHOICE_PROPS,
            ComponentKind::Button => BUTTON_PROPS,
        }
    }
}

impl Display for ComponentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for ComponentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for ComponentKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        ComponentKind::from_tag(&tag).map_err(|error| D::Error::custom(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{ComponentKind, HeadingLevel};

    #[test]
    fn test_tags_round_trip() {
        for tag in super::KINDS.keys() {
            let kind = ComponentKind::from_tag(tag).unwrap();
            assert_eq!(kind.tag(), *tag);
        }
    }

    #[test]
    fn test_unknown_tag() {
        let error = ComponentKind::from_tag("marquee").unwrap_err();
        assert_eq!(
            error.to_string(),
            "General Error: Unknown component type 'marquee'"
        );
    }

    #[test]
    fn test_heading_level_fallback() {
        assert_eq!(HeadingLevel::from_level(3), HeadingLevel::H3);
        assert_eq!(HeadingLevel::from_level(6), HeadingLevel::H6);
        assert_eq!(HeadingLevel::from_level(0), HeadingLevel::H1);
        assert_eq!(HeadingLevel::from_level(7), HeadingLevel::H1);
        assert_eq!(HeadingLevel::from_level(-2), HeadingLevel::H1);
        assert_eq!(HeadingLevel::from_level(258), HeadingLevel::H1);
    }

    #[test]
    fn test_only_layout_kinds_are_containers() {
        assert!(ComponentKind::Div.is_container());
        assert!(ComponentKind::Form.is_container());
        assert!(ComponentKind::Section.is_container());
        assert!(!ComponentKind::Label.is_container());
        assert!(!ComponentKind::Heading(HeadingLevel::H2).is_container());
    }
}
