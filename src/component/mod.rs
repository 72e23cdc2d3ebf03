pub mod elements;
pub mod kind;
pub mod node;
pub mod props;

pub use kind::{ComponentKind, HeadingLevel};
pub use node::Component;
pub use props::{PropKey, PropValue, Props};
