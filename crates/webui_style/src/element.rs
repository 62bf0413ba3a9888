//! Element contract
//!
//! The style layer only needs two things from an element: the classes it
//! already carries, and a way to produce a new element with more classes
//! attached. [`Stylable`] captures that; [`Markup`] is the render-to-string
//! contract that document assembly consumes.
//!
//! [`Element`] is a minimal generic tag that implements both. Richer element
//! types live outside this crate and only need to implement [`Stylable`].

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::compose::combine;
use crate::modifier::Modifier;
use crate::ops::StyleOperation;
use crate::responsive::ResponsiveBuilder;

/// Attribute that marks an element as bound to a client-side state id
pub const STATE_BINDING_ATTRIBUTE: &str = "data-webui-state";

/// Tags that never have children or a closing tag
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Anything that renders to an HTML string
pub trait Markup {
    fn render(&self) -> String;
}

impl<T: Markup + ?Sized> Markup for Box<T> {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// An element that carries utility classes
///
/// Elements are values: adding classes consumes the element and returns
/// the wrapped replacement.
pub trait Stylable: Sized {
    /// Classes currently attached, in order
    fn classes(&self) -> &[String];

    /// Return this element with `classes` appended
    fn add_classes(self, classes: Vec<String>) -> Self;

    /// Apply a style operation under the given modifiers
    ///
    /// ```
    /// use webui_style::{Element, Modifier, Stylable};
    /// use webui_style::ops::Padding;
    ///
    /// let el = Element::new("div").style(Padding::new(4), &[Modifier::Md]);
    /// assert_eq!(el.classes(), ["md:p-4"]);
    /// ```
    fn style(self, operation: impl StyleOperation, modifiers: &[Modifier]) -> Self {
        let classes = combine(operation.classes(), modifiers);
        if classes.is_empty() {
            return self;
        }
        self.add_classes(classes)
    }

    /// Compose styles through a [`ResponsiveBuilder`]
    ///
    /// ```
    /// use webui_style::{Element, Stylable};
    /// use webui_style::ops::{Font, Padding};
    /// use webui_style::tokens::TextSize;
    ///
    /// let el = Element::new("p").on(|r| {
    ///     r.padding(Padding::new(2))
    ///         .md(|r| r.font(Font::new().size(TextSize::Lg)))
    /// });
    /// assert_eq!(el.classes(), ["p-2", "md:text-lg"]);
    /// ```
    fn on(self, body: impl FnOnce(ResponsiveBuilder<Self>) -> ResponsiveBuilder<Self>) -> Self {
        body(ResponsiveBuilder::new(self)).finish()
    }
}

/// A generic HTML element
pub struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    classes: Vec<String>,
    children: Vec<Box<dyn Markup>>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attribute("id", id)
    }

    /// Set an attribute; setting `class` appends to the class list instead
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if name == "class" {
            self.classes
                .extend(value.split_whitespace().map(str::to_string));
        } else {
            self.attributes.insert(name, value);
        }
        self
    }

    /// Set a `data-*` attribute
    pub fn data(self, name: &str, value: impl Into<String>) -> Self {
        self.attribute(format!("data-{}", name), value)
    }

    /// Mark this element as bound to a client-side state id
    pub fn bind_state(self, state_id: impl Into<String>) -> Self {
        self.attribute(STATE_BINDING_ATTRIBUTE, state_id)
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn child(mut self, child: impl Markup + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append escaped text content
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Text(text.into()))
    }

    fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag.as_str())
    }
}

impl Stylable for Element {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn add_classes(mut self, classes: Vec<String>) -> Self {
        self.classes.extend(classes);
        self
    }
}

impl Markup for Element {
    fn render(&self) -> String {
        let mut html = format!("<{}", self.tag);
        for (name, value) in &self.attributes {
            html.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
        }
        if !self.classes.is_empty() {
            let classes = self.classes.join(" ");
            html.push_str(&format!(" class=\"{}\"", escape_attribute(&classes)));
        }

        if self.is_void() {
            html.push_str(" />");
            return html;
        }

        html.push('>');
        for child in &self.children {
            html.push_str(&child.render());
        }
        html.push_str(&format!("</{}>", self.tag));
        html
    }
}

/// Text content, escaped on render
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text(pub String);

impl Markup for Text {
    fn render(&self) -> String {
        html_escape::encode_text(&self.0).into_owned()
    }
}

/// Pre-rendered HTML, emitted verbatim
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawHtml(pub String);

impl Markup for RawHtml {
    fn render(&self) -> String {
        self.0.clone()
    }
}

fn escape_attribute(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{Background, Padding};
    use crate::tokens::Color;

    #[test]
    fn test_render_with_classes_and_attributes() {
        let el = Element::new("div")
            .id("card")
            .class("shadow")
            .style(Padding::new(4), &[])
            .text("Hello");
        assert_eq!(
            el.render(),
            r#"<div id="card" class="shadow p-4">Hello</div>"#
        );
    }

    #[test]
    fn test_render_escapes() {
        let el = Element::new("span")
            .attribute("title", "a \"quoted\" <value>")
            .text("1 < 2 & 3");
        let html = el.render();
        assert!(html.contains("title=\"a &quot;quoted&quot;"));
        assert!(html.contains(">1 &lt; 2 &amp; 3</span>"));
    }

    #[test]
    fn test_void_tag() {
        let el = Element::new("input").attribute("type", "text");
        assert_eq!(el.render(), r#"<input type="text" />"#);
    }

    #[test]
    fn test_class_attribute_appends() {
        let el = Element::new("div").class("a").attribute("class", "b c");
        assert_eq!(el.classes(), ["a", "b", "c"]);
        assert_eq!(el.get_attribute("class"), None);
    }

    #[test]
    fn test_bind_state() {
        let el = Element::new("span").bind_state("counter");
        assert_eq!(el.get_attribute(STATE_BINDING_ATTRIBUTE), Some("counter"));
        assert!(el.render().contains(r#"data-webui-state="counter""#));
    }

    #[test]
    fn test_style_with_modifiers() {
        let el = Element::new("div").style(
            Background(Color::new("gray", 900)),
            &[Modifier::Dark, Modifier::Hover],
        );
        assert_eq!(el.classes(), ["dark:hover:bg-gray-900"]);
    }

    #[test]
    fn test_nested_children() {
        let el = Element::new("ul")
            .child(Element::new("li").text("one"))
            .child(RawHtml("<li>two</li>".into()));
        assert_eq!(el.render(), "<ul><li>one</li><li>two</li></ul>");
    }
}
