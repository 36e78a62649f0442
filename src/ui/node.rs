//! Dynamic renderable content.
//!
//! [`RenderableNode`] is a closed tree of content that callers can build at
//! runtime and hand to components such as [`Container`](crate::ui::components::Container)
//! without the component inspecting it.

use leptos::prelude::*;

/// Element tags a [`RenderableNode`] may produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tag {
    #[default]
    Div,
    Section,
    P,
    Span,
    H1,
    H2,
    Strong,
}

/// An element with an optional style class and nested content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub class: Option<String>,
    pub children: Vec<RenderableNode>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: impl Into<RenderableNode>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// Opaque content passed from a parent component to a child for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RenderableNode {
    /// Renders nothing.
    #[default]
    Empty,
    /// Escaped text.
    Text(String),
    Element(Element),
    /// Siblings rendered in order.
    List(Vec<RenderableNode>),
}

impl RenderableNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Converts the tree into a type-erased Leptos view.
    pub fn into_any(self) -> AnyView {
        match self {
            Self::Empty => ().into_any(),
            Self::Text(text) => text.into_any(),
            Self::Element(element) => element.into_any(),
            Self::List(nodes) => nodes
                .into_iter()
                .map(Self::into_any)
                .collect::<Vec<_>>()
                .into_any(),
        }
    }
}

impl Element {
    fn into_any(self) -> AnyView {
        let Self {
            tag,
            class,
            children,
        } = self;
        let children = children
            .into_iter()
            .map(RenderableNode::into_any)
            .collect::<Vec<_>>();

        match tag {
            Tag::Div => view! { <div class=class>{children}</div> }.into_any(),
            Tag::Section => view! { <section class=class>{children}</section> }.into_any(),
            Tag::P => view! { <p class=class>{children}</p> }.into_any(),
            Tag::Span => view! { <span class=class>{children}</span> }.into_any(),
            Tag::H1 => view! { <h1 class=class>{children}</h1> }.into_any(),
            Tag::H2 => view! { <h2 class=class>{children}</h2> }.into_any(),
            Tag::Strong => view! { <strong class=class>{children}</strong> }.into_any(),
        }
    }
}

impl From<&str> for RenderableNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RenderableNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for RenderableNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Vec<RenderableNode>> for RenderableNode {
    fn from(nodes: Vec<RenderableNode>) -> Self {
        Self::List(nodes)
    }
}

impl<T: Into<RenderableNode>> From<Option<T>> for RenderableNode {
    fn from(node: Option<T>) -> Self {
        node.map_or(Self::Empty, Into::into)
    }
}
