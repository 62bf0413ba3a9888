//! Responsive style builder
//!
//! A [`ResponsiveBuilder`] wraps an element for the duration of one
//! composition call. Style methods append un-prefixed classes to a pending
//! buffer; entering a modifier block pushes modifiers onto the active stack,
//! and leaving it flushes the buffer with the whole stack's prefix applied.
//!
//! Blocks nest, and their prefixes compose:
//!
//! ```
//! use webui_style::{Element, Stylable};
//! use webui_style::ops::{Background, Font};
//! use webui_style::tokens::{Color, TextSize};
//!
//! let el = Element::new("button").on(|r| {
//!     r.font(Font::new().size(TextSize::Sm))
//!         .md(|r| r.font(Font::new().size(TextSize::Lg)))
//!         .dark(|r| r.hover(|r| r.background(Background(Color::new("gray", 800)))))
//! });
//! assert_eq!(el.classes(), ["text-sm", "md:text-lg", "dark:hover:bg-gray-800"]);
//! ```
//!
//! The same composition can be described as data with [`ResponsiveRule`]
//! and applied with [`apply_rules`].

use smallvec::SmallVec;
use tracing::trace;

use crate::compose::{combine, RedundancyFilter};
use crate::element::Stylable;
use crate::modifier::Modifier;
use crate::ops::{
    Background, Border, Flex, Font, Frame, Grid, Hidden, Margins, Opacity, Overflow, Padding,
    Position, Rounded, Size, Spacing, StyleOperation, Transition,
};

/// Builder state for one composition call
///
/// Invariant: `pending` only ever holds classes added since the most recent
/// flush, so no class is prefixed with a stack it was not added under.
pub struct ResponsiveBuilder<E: Stylable> {
    element: E,
    pending: Vec<String>,
    active: SmallVec<[Modifier; 4]>,
    filter: RedundancyFilter,
}

macro_rules! modifier_blocks {
    ($($(#[$doc:meta])* $name:ident => $modifier:expr;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(self, body: impl FnOnce(Self) -> Self) -> Self {
                self.modifier($modifier, body)
            }
        )*
    };
}

impl<E: Stylable> ResponsiveBuilder<E> {
    /// Start composing on `element` with the default redundancy filter
    pub fn new(element: E) -> Self {
        Self::with_filter(element, RedundancyFilter::default())
    }

    /// Start composing on `element` with a custom redundancy filter
    pub fn with_filter(element: E, filter: RedundancyFilter) -> Self {
        Self {
            element,
            pending: Vec::new(),
            active: SmallVec::new(),
            filter,
        }
    }

    /// Modifiers currently in effect, outermost first
    pub fn active_modifiers(&self) -> &[Modifier] {
        &self.active
    }

    /// Classes added since the last flush, without prefixes
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// The wrapped element as of the last flush
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Run `body` with `modifiers` appended to the active stack
    ///
    /// Classes pending from the enclosing scope are flushed first, so the
    /// block only prefixes what it adds itself.
    pub fn modifiers(mut self, modifiers: &[Modifier], body: impl FnOnce(Self) -> Self) -> Self {
        self = self.flush();
        let depth = self.active.len();
        self.active.extend_from_slice(modifiers);

        let mut builder = body(self).flush();
        builder.active.truncate(depth);
        builder
    }

    /// Run `body` with a single modifier appended to the active stack
    pub fn modifier(self, modifier: Modifier, body: impl FnOnce(Self) -> Self) -> Self {
        self.modifiers(&[modifier], body)
    }

    modifier_blocks! {
        /// Styles for extra small screens and up
        xs => Modifier::Xs;
        /// Styles for small screens and up
        sm => Modifier::Sm;
        /// Styles for medium screens and up
        md => Modifier::Md;
        /// Styles for large screens and up
        lg => Modifier::Lg;
        /// Styles for extra large screens and up
        xl => Modifier::Xl;
        /// Styles for 2xl screens and up
        xl2 => Modifier::Xl2;
        /// Styles while the pointer is over the element
        hover => Modifier::Hover;
        /// Styles while the element has focus
        focus => Modifier::Focus;
        /// Styles while the element is being activated
        active => Modifier::Active;
        /// Styles for placeholder text
        placeholder => Modifier::Placeholder;
        /// Styles in dark mode
        dark => Modifier::Dark;
        /// Styles when the element is its parent's first child
        first => Modifier::First;
        /// Styles when the element is its parent's last child
        last => Modifier::Last;
        /// Styles while the element is disabled
        disabled => Modifier::Disabled;
        /// Styles when the user prefers reduced motion
        motion_reduce => Modifier::MotionReduce;
        /// Styles when `aria-busy` is true
        aria_busy => Modifier::AriaBusy;
        /// Styles when `aria-checked` is true
        aria_checked => Modifier::AriaChecked;
        /// Styles when `aria-disabled` is true
        aria_disabled => Modifier::AriaDisabled;
        /// Styles when `aria-expanded` is true
        aria_expanded => Modifier::AriaExpanded;
        /// Styles when `aria-hidden` is true
        aria_hidden => Modifier::AriaHidden;
        /// Styles when `aria-pressed` is true
        aria_pressed => Modifier::AriaPressed;
        /// Styles when `aria-readonly` is true
        aria_readonly => Modifier::AriaReadonly;
        /// Styles when `aria-required` is true
        aria_required => Modifier::AriaRequired;
        /// Styles when `aria-selected` is true
        aria_selected => Modifier::AriaSelected;
    }

    /// Append a raw class to the pending buffer
    pub fn add_class(mut self, class: impl Into<String>) -> Self {
        self.pending.push(class.into());
        self
    }

    /// Append every class an operation produces
    pub fn style(mut self, operation: impl StyleOperation) -> Self {
        self.pending.extend(operation.classes());
        self
    }

    /// Append font classes
    pub fn font(self, font: Font) -> Self {
        self.style(font)
    }

    /// Append a background color class
    pub fn background(self, background: Background) -> Self {
        self.style(background)
    }

    /// Append padding classes
    pub fn padding(self, padding: Padding) -> Self {
        self.style(padding)
    }

    /// Append margin classes
    pub fn margins(self, margins: Margins) -> Self {
        self.style(margins)
    }

    /// Append border classes
    pub fn border(self, border: Border) -> Self {
        self.style(border)
    }

    /// Append an opacity class
    pub fn opacity(self, opacity: Opacity) -> Self {
        self.style(opacity)
    }

    /// Append a `size-*` class
    pub fn size(self, size: Size) -> Self {
        self.style(size)
    }

    /// Append width and height constraint classes
    pub fn frame(self, frame: Frame) -> Self {
        self.style(frame)
    }

    /// Append flex container classes
    pub fn flex(self, flex: Flex) -> Self {
        self.style(flex)
    }

    /// Append grid container classes
    pub fn grid(self, grid: Grid) -> Self {
        self.style(grid)
    }

    /// Append positioning classes
    pub fn position(self, position: Position) -> Self {
        self.style(position)
    }

    /// Append overflow classes
    pub fn overflow(self, overflow: Overflow) -> Self {
        self.style(overflow)
    }

    /// Append `hidden` when `hidden` is true
    pub fn hidden(self, hidden: bool) -> Self {
        self.style(Hidden(hidden))
    }

    /// Append border radius classes
    pub fn rounded(self, rounded: Rounded) -> Self {
        self.style(rounded)
    }

    /// Append child spacing classes
    pub fn spacing(self, spacing: Spacing) -> Self {
        self.style(spacing)
    }

    /// Append transition classes
    pub fn transition(self, transition: Transition) -> Self {
        self.style(transition)
    }

    /// Prefix pending classes with the active stack and merge them into the
    /// element
    pub fn flush(mut self) -> Self {
        if self.pending.is_empty() {
            return self;
        }

        let pending = std::mem::take(&mut self.pending);
        let mut classes = combine(pending, &self.active);
        if !self.active.is_empty() {
            classes = self.filter.retain(self.element.classes(), classes);
        }

        trace!(
            modifiers = self.active.len(),
            classes = classes.len(),
            "flushing responsive classes"
        );

        if !classes.is_empty() {
            self.element = self.element.add_classes(classes);
        }
        self
    }

    /// Flush anything pending and return the element
    pub fn finish(self) -> E {
        self.flush().element
    }
}

/// A modifier scope described as data
///
/// Operations are applied under `modifiers`; nested rules append their own
/// modifiers to this rule's.
pub struct ResponsiveRule {
    pub modifiers: Vec<Modifier>,
    pub operations: Vec<Box<dyn StyleOperation>>,
    pub nested: Vec<ResponsiveRule>,
}

impl ResponsiveRule {
    /// A rule applied under `modifiers`
    pub fn new(modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        Self {
            modifiers: modifiers.into_iter().collect(),
            operations: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Add an operation to apply under this rule's modifiers
    pub fn with(mut self, operation: impl StyleOperation + 'static) -> Self {
        self.operations.push(Box::new(operation));
        self
    }

    /// Nest a rule whose modifiers append to this one's
    pub fn nest(mut self, rule: ResponsiveRule) -> Self {
        self.nested.push(rule);
        self
    }

    fn apply<E: Stylable>(&self, builder: ResponsiveBuilder<E>) -> ResponsiveBuilder<E> {
        builder.modifiers(&self.modifiers, |builder| {
            let builder = self
                .operations
                .iter()
                .fold(builder, |builder, operation| builder.style(operation));
            self.nested
                .iter()
                .fold(builder, |builder, rule| rule.apply(builder))
        })
    }
}

/// Apply a list of rules to an element, in order
pub fn apply_rules<E: Stylable>(element: E, rules: &[ResponsiveRule]) -> E {
    rules
        .iter()
        .fold(ResponsiveBuilder::new(element), |builder, rule| {
            rule.apply(builder)
        })
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::tokens::{Color, TextSize, TransitionProperty, Weight};

    fn text_lg() -> Font {
        Font::new().size(TextSize::Lg)
    }

    #[test]
    fn test_unscoped_classes_flush_on_finish() {
        let el = Element::new("div")
            .on(|r| r.padding(Padding::new(4)).font(Font::new().weight(Weight::Bold)));
        assert_eq!(el.classes(), ["p-4", "font-bold"]);
    }

    #[test]
    fn test_single_block_prefix() {
        let el = Element::new("div").on(|r| r.md(|r| r.padding(Padding::new(8)).font(text_lg())));
        assert_eq!(el.classes(), ["md:p-8", "md:text-lg"]);
    }

    #[test]
    fn test_nested_blocks_compose() {
        let el = Element::new("div").on(|r| r.dark(|r| r.hover(|r| r.font(text_lg()))));
        assert_eq!(el.classes(), ["dark:hover:text-lg"]);
    }

    #[test]
    fn test_pending_does_not_leak_across_blocks() {
        let el = Element::new("div").on(|r| {
            r.dark(|r| {
                r.background(Background(Color::black()))
                    .hover(|r| r.font(text_lg()))
                    .opacity(Opacity(90))
            })
            .font(Font::new().weight(Weight::Light))
        });
        assert_eq!(
            el.classes(),
            [
                "dark:bg-black",
                "dark:hover:text-lg",
                "dark:opacity-90",
                "font-light"
            ]
        );
    }

    #[test]
    fn test_stack_pops_after_block() {
        let builder = ResponsiveBuilder::new(Element::new("div"))
            .lg(|r| {
                assert_eq!(r.active_modifiers(), [Modifier::Lg]);
                r.hover(|r| {
                    assert_eq!(r.active_modifiers(), [Modifier::Lg, Modifier::Hover]);
                    r
                })
            });
        assert!(builder.active_modifiers().is_empty());
        assert!(builder.pending().is_empty());
    }

    #[test]
    fn test_multi_modifier_block() {
        let el = Element::new("a").on(|r| {
            r.modifiers(&[Modifier::Md, Modifier::Focus], |r| {
                r.add_class("underline")
            })
        });
        assert_eq!(el.classes(), ["md:focus:underline"]);
    }

    #[test]
    fn test_duplicates_within_flush_are_kept() {
        let el = Element::new("div").on(|r| {
            r.md(|r| r.padding(Padding::new(2)).padding(Padding::new(2)))
        });
        assert_eq!(el.classes(), ["md:p-2", "md:p-2"]);
    }

    #[test]
    fn test_redundant_transition_dropped() {
        let el = Element::new("button").on(|r| {
            r.transition(Transition::new(TransitionProperty::Colors))
                .hover(|r| {
                    r.transition(Transition::new(TransitionProperty::All).duration(500))
                        .background(Background(Color::new("blue", 600)))
                })
        });
        assert_eq!(
            el.classes(),
            [
                "transition-colors",
                "hover:duration-500",
                "hover:bg-blue-600"
            ]
        );
    }

    #[test]
    fn test_transition_kept_without_base_declaration() {
        let el = Element::new("button").on(|r| {
            r.hover(|r| r.transition(Transition::new(TransitionProperty::Opacity)))
        });
        assert_eq!(el.classes(), ["hover:transition-opacity"]);
    }

    #[test]
    fn test_filter_can_be_disabled() {
        let el = ResponsiveBuilder::with_filter(
            Element::new("div").class("transition"),
            RedundancyFilter::empty(),
        )
        .hover(|r| r.add_class("transition-all"))
        .finish();
        assert_eq!(el.classes(), ["transition", "hover:transition-all"]);
    }

    #[test]
    fn test_apply_rules() {
        let rules = vec![
            ResponsiveRule::new([]).with(Padding::new(2)),
            ResponsiveRule::new([Modifier::Md])
                .with(Padding::new(4))
                .nest(ResponsiveRule::new([Modifier::Hover]).with(Opacity(75))),
            ResponsiveRule::new([Modifier::Dark]).with(Hidden(true)),
        ];
        let el = apply_rules(Element::new("section"), &rules);
        assert_eq!(el.classes(), ["p-2", "md:p-4", "md:hover:opacity-75", "dark:hidden"]);
    }
}
