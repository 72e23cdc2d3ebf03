use crate::component::kind::{ComponentKind, HeadingLevel};
use crate::component::node::Component;
use crate::component::props::{PropKey, PropValue, Props};

/// Class installed on every header container.
pub const HEADER_CONTAINER_CLASS: &str = "header-container";
/// Class appended to the field wrapped by a header container.
pub const HEADER_FIELD_CLASS: &str = "header-field";

fn options(options: impl IntoIterator<Item = impl Into<String>>) -> PropValue {
    PropValue::List(options.into_iter().map(Into::into).collect())
}

impl Component {
    pub fn div(id: impl Into<String>) -> Self {
        Self::from_parts(ComponentKind::Div, id.into(), Props::new())
    }

    pub fn form(id: impl Into<String>) -> Self {
        Self::from_parts(ComponentKind::Form, id.into(), Props::new())
    }

    pub fn section(id: impl Into<String>) -> Self {
        Self::from_parts(ComponentKind::Section, id.into(), Props::new())
    }

    pub fn label(id: impl Into<String>, text: impl Into<String>) -> Self {
        let props = Props::new().with(PropKey::Text, text.into());
        Self::from_parts(ComponentKind::Label, id.into(), props)
    }

    pub fn input(id: impl Into<String>, label: impl Into<String>, hint: Option<&str>) -> Self {
        let mut props = Props::new().with(PropKey::Label, label.into());
        if let Some(hint) = hint {
            props.insert(PropKey::Hint, hint);
        }
        Self::from_parts(ComponentKind::Input, id.into(), props)
    }

    pub fn select(
        id: impl Into<String>,
        label: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::choice(ComponentKind::Select, id.into(), label.into(), choices)
    }

    pub fn checkbox(
        id: impl Into<String>,
        label: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::choice(ComponentKind::Checkbox, id.into(), label.into(), choices)
    }

    pub fn radio(
        id: impl Into<String>,
        label: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::choice(ComponentKind::Radio, id.into(), label.into(), choices)
    }

    fn choice(
        kind: ComponentKind,
        id: String,
        label: String,
        choices: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let props = Props::new()
            .with(PropKey::Label, label)
            .with(PropKey::Options, options(choices));
        Self::from_parts(kind, id, props)
    }

    pub fn button(id: impl Into<String>, text: impl Into<String>, submit: bool) -> Self {
        let props = Props::new()
            .with(PropKey::Text, text.into())
            .with(PropKey::Submit, submit);
        Self::from_parts(ComponentKind::Button, id.into(), props)
    }

    /// Heading of the given level; levels outside of 1..=6 render as `h1`.
    pub fn heading(id: impl Into<String>, level: i64, text: impl Into<String>) -> Self {
        let props = Props::new().with(PropKey::Text, text.into());
        let kind = ComponentKind::Heading(HeadingLevel::from_level(level));
        Self::from_parts(kind, id.into(), props)
    }

    /// A `div` holding a heading followed by `field`.
    ///
    /// The heading gets the id `{id}_header`. The container always carries
    /// [`HEADER_CONTAINER_CLASS`], followed by `classes` when given, and the
    /// field gets [`HEADER_FIELD_CLASS`] appended.
    pub fn header_field(
        id: impl Into<String>,
        level: i64,
        title: impl Into<String>,
        mut field: Component,
        classes: Option<&str>,
    ) -> Self {
        let id = id.into();
        let heading = Self::heading(format!("{}_header", id), level, title);
        field.add_class(HEADER_FIELD_CLASS);

        let mut container = Self::div(id);
        container.add_class(HEADER_CONTAINER_CLASS);
        if let Some(classes) = classes.filter(|classes| !classes.trim().is_empty()) {
            container.add_class(classes);
        }
        container.children = Some(vec![heading, field]);
        container
    }
}

#[cfg(test)]
mod tests {
    use super::{HEADER_CONTAINER_CLASS, HEADER_FIELD_CLASS};
    use crate::component::kind::{ComponentKind, HeadingLevel};
    use crate::component::node::Component;
    use crate::component::props::{PropKey, PropValue};
    use expect_test::expect;

    fn name_field() -> Component {
        Component::input("name", "Name", Some("Your name"))
    }

    #[test]
    fn test_header_field_out_of_range_level() {
        let container = Component::header_field("user", 7, "User", name_field(), None);
        let document = container.serialize();
        let children = document.children.unwrap();
        assert_eq!(children[0].kind, ComponentKind::Heading(HeadingLevel::H1));
        assert_eq!(children[0].kind.tag(), "h1");
        assert_eq!(children[0].id, "user_header");
    }

    #[test]
    fn test_header_field_negative_level() {
        let container = Component::header_field("user", -1, "User", name_field(), None);
        assert_eq!(container.children()[0].kind().tag(), "h1");
    }

    #[test]
    fn test_header_field_level_three() {
        let container = Component::header_field("user", 3, "User", name_field(), None);
        let heading = &container.children()[0];
        assert_eq!(heading.kind().tag(), "h3");
        assert_eq!(heading.id(), "user_header");
        assert_eq!(heading.props().text(PropKey::Text), Some("User"));
    }

    #[test]
    fn test_header_field_classes() {
        let plain = Component::header_field("user", 2, "User", name_field(), None);
        assert_eq!(plain.classes(), Some(HEADER_CONTAINER_CLASS));

        let styled = Component::header_field("user", 2, "User", name_field(), Some("wide dark"));
        assert_eq!(styled.classes(), Some("header-container wide dark"));

        let field = &styled.children()[1];
        assert_eq!(field.id(), "name");
        assert_eq!(field.classes(), Some(HEADER_FIELD_CLASS));
    }

    #[test]
    fn test_header_field_keeps_field_classes() {
        let field = name_field().with_class("mono");
        let container = Component::header_field("user", 1, "User", field, Some(""));
        assert_eq!(container.classes(), Some("header-container"));
        assert_eq!(container.children()[1].classes(), Some("mono header-field"));
    }

    #[test]
    fn test_choice_options_keep_order() {
        let radio = Component::radio("size", "Size", ["small", "medium", "large"]);
        assert_eq!(
            radio.props().get(PropKey::Options),
            Some(&PropValue::List(vec![
                "small".to_string(),
                "medium".to_string(),
                "large".to_string()
            ]))
        );
    }

    #[test]
    fn test_builders_produce_valid_props() {
        let components = [
            Component::div("a"),
            Component::form("b"),
            Component::section("c"),
            Component::label("d", "text"),
            Component::input("e", "label", None),
            Component::select("f", "label", ["x"]),
            Component::checkbox("g", "label", Vec::<String>::new()),
            Component::radio("h", "label", ["x", "y"]),
            Component::button("i", "Go", true),
            Component::heading("j", 4, "text"),
        ];
        for component in components {
            component.props().validate(component.kind()).unwrap();
        }
    }

    #[test]
    fn test_header_field_document() {
        let container = Component::header_field("user", 2, "User", name_field(), Some("wide"));
        let json = serde_json::to_string_pretty(&container.serialize()).unwrap();
        expect![[r#"
            {
              "type": "div",
              "id": "user",
              "classes": "header-container wide",
              "props": {},
              "children": [
                {
                  "type": "h2",
                  "id": "user_header",
                  "classes": null,
                  "props": {
                    "text": "User"
                  }
                },
                {
                  "type": "input",
                  "id": "name",
                  "classes": "header-field",
                  "props": {
                    "label": "Name",
                    "hint": "Your name"
                  }
                }
              ]
            }"#]]
        .assert_eq(&json);
    }
}
