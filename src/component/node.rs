use crate::component::kind::ComponentKind;
use crate::component::props::Props;
use crate::document::ComponentDocument;
use crate::result::{HudError, HudErrorKind, HudResult};
use itertools::Itertools;
use termtree::Tree;

/// One node of a form tree.
///
/// Containers own their children exclusively; children are only ever
/// appended, so a tree cannot contain cycles. Ids are expected to be unique
/// within a tree but this is left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    kind: ComponentKind,
    id: String,
    classes: Option<String>,
    props: Props,
    pub(super) children: Option<Vec<Component>>,
}

impl Component {
    pub fn new(kind: ComponentKind, id: impl Into<String>, props: Props) -> HudResult<Self> {
        props.validate(kind)?;
        Ok(Self::from_parts(kind, id.into(), props))
    }

    /// Builds a component whose props are valid by construction.
    pub(crate) fn from_parts(kind: ComponentKind, id: String, props: Props) -> Self {
        debug_assert!(props.validate(kind).is_ok());
        Self {
            kind,
            id,
            classes: None,
            props,
            children: kind.is_container().then(Vec::new),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn classes(&self) -> Option<&str> {
        self.classes.as_deref()
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn is_container(&self) -> bool {
        self.children.is_some()
    }

    /// Children in rendering order, empty for leaves.
    pub fn children(&self) -> &[Component] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Appends a space separated class token. Repeated calls append again.
    pub fn add_class(&mut self, name: &str) -> &mut Self {
        match &mut self.classes {
            Some(classes) => {
                classes.push(' ');
                classes.push_str(name);
            }
            None => self.classes = Some(name.to_string()),
        }
        self
    }

    pub fn with_class(mut self, name: &str) -> Self {
        self.add_class(name);
        self
    }

    pub fn add(&mut self, child: Component) -> HudResult<&mut Self> {
        let Some(children) = self.children.as_mut() else {
            return Err(HudError::new(HudErrorKind::NotAContainer(self.id.clone())));
        };
        children.push(child);
        Ok(self)
    }

    pub fn with_child(mut self, child: Component) -> HudResult<Self> {
        self.add(child)?;
        Ok(self)
    }

    pub fn with_children(
        mut self,
        children: impl IntoIterator<Item = Component>,
    ) -> HudResult<Self> {
        for child in children {
            self.add(child)?;
        }
        Ok(self)
    }

    pub fn serialize(&self) -> ComponentDocument {
        ComponentDocument {
            kind: self.kind,
            id: self.id.clone(),
            classes: self.classes.clone(),
            props: self.props.clone(),
            children: self
                .children
                .as_ref()
                .map(|children| children.iter().map(Component::serialize).collect()),
        }
    }

    /// Renders the tree as `kind #id .class` lines for debug output.
    pub fn to_tree_string(&self) -> String {
        format!("{}", self.to_tree())
    }

    fn to_tree(&self) -> Tree<String> {
        let mut label = format!("{} #{}", self.kind, self.id);
        if let Some(classes) = &self.classes {
            label.push(' ');
            label.push_str(
                &classes
                    .split_whitespace()
                    .map(|class| format!(".{}", class))
                    .join(""),
            );
        }
        let mut tree = Tree::new(label);
        for child in self.children() {
            tree.push(child.to_tree());
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use crate::component::kind::ComponentKind;
    use crate::component::node::Component;
    use crate::component::props::{PropKey, Props};
    use crate::result::HudErrorKind;
    use expect_test::expect;

    #[test]
    fn test_children_serialize_in_insertion_order() {
        let first = Component::label("first", "One");
        let second = Component::input("second", "Two", None);
        let third = Component::select("third", "Three", ["a", "b"]);
        let container = Component::div("root")
            .with_children([first.clone(), second.clone(), third.clone()])
            .unwrap();
        let document = container.serialize();
        assert_eq!(
            document.children,
            Some(vec![first.serialize(), second.serialize(), third.serialize()])
        );
    }

    #[test]
    fn test_leaf_document_has_no_children() {
        let json = serde_json::to_value(Component::label("x", "No children").serialize()).unwrap();
        assert!(json.get("children").is_none());
        assert!(json.get("classes").unwrap().is_null());
    }

    #[test]
    fn test_empty_container_document_has_children() {
        let json = serde_json::to_value(Component::section("empty").serialize()).unwrap();
        assert_eq!(json.get("children"), Some(&serde_json::json!([])));
    }

    #[test]
    fn test_add_class_accumulates() {
        let mut component = Component::div("root");
        assert_eq!(component.classes(), None);
        component.add_class("a").add_class("b");
        assert_eq!(component.classes(), Some("a b"));
        component.add_class("a");
        assert_eq!(component.classes(), Some("a b a"));
    }

    #[test]
    fn test_leaf_rejects_children() {
        let mut label = Component::label("x", "text");
        let error = label.add(Component::div("inner")).unwrap_err();
        assert!(matches!(error.kind(), HudErrorKind::NotAContainer(id) if id == "x"));
        assert!(label.children().is_empty());
    }

    #[test]
    fn test_new_validates_props() {
        let error = Component::new(ComponentKind::Input, "name", Props::new()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid props for 'input': missing required prop 'label'"
        );
        let input = Component::new(
            ComponentKind::Input,
            "name",
            Props::new().with(PropKey::Label, "Name"),
        )
        .unwrap();
        assert_eq!(input.props().text(PropKey::Label), Some("Name"));
    }

    #[test]
    fn test_serialize_label() {
        let json = serde_json::to_string(&Component::label("x", "No children").serialize()).unwrap();
        expect![[r#"{"type":"label","id":"x","classes":null,"props":{"text":"No children"}}"#]]
            .assert_eq(&json);
    }

    #[test]
    fn test_tree_string() {
        let tree = Component::form("settings")
            .with_class("wide")
            .with_child(Component::label("intro", "Hello"))
            .unwrap()
            .with_child(Component::input("name", "Name", Some("Your name")).with_class("a b"))
            .unwrap()
            .to_tree_string();
        expect![[r#"
            form #settings .wide
            ├── label #intro
            └── input #name .a.b
        "#]]
        .assert_eq(&tree);
    }
}
