//! Style operations
//!
//! Each operation turns one semantic style request into zero or more
//! utility classes. Operations hold no modifier information; prefixes are
//! applied later by [`combine`](crate::combine) or by a
//! [`ResponsiveBuilder`](crate::ResponsiveBuilder) block.
//!
//! ```
//! use webui_style::ops::{Font, Padding, StyleOperation};
//! use webui_style::tokens::{TextSize, Weight};
//! use webui_style::Edge;
//!
//! let font = Font::new().size(TextSize::Lg).weight(Weight::Bold);
//! assert_eq!(font.classes(), vec!["text-lg", "font-bold"]);
//!
//! let padding = Padding::new(4).edges([Edge::Horizontal, Edge::Top]);
//! assert_eq!(padding.classes(), vec!["px-4", "pt-4"]);
//! ```

use smallvec::{smallvec, SmallVec};

use crate::edge::{Axis, Edge};
use crate::tokens::{
    Align, BorderStyle, Color, CursorType, Decoration, Direction, Easing, Justify, Leading,
    Length, OverflowType, PositionType, RadiusSize, TextAlign, TextSize, Tracking,
    TransitionProperty, Weight, Wrapping,
};

/// A style request that produces utility classes
pub trait StyleOperation {
    /// The classes for this request, in emission order
    fn classes(&self) -> Vec<String>;
}

impl<T: StyleOperation + ?Sized> StyleOperation for &T {
    fn classes(&self) -> Vec<String> {
        (**self).classes()
    }
}

impl<T: StyleOperation + ?Sized> StyleOperation for Box<T> {
    fn classes(&self) -> Vec<String> {
        (**self).classes()
    }
}

type Edges = SmallVec<[Edge; 2]>;

// =============================================================================
// Typography & color
// =============================================================================

/// Font size, weight, spacing, alignment, decoration, and color
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Font {
    size: Option<TextSize>,
    weight: Option<Weight>,
    tracking: Option<Tracking>,
    leading: Option<Leading>,
    align: Option<TextAlign>,
    decoration: Option<Decoration>,
    wrapping: Option<Wrapping>,
    color: Option<Color>,
    family: Option<String>,
}

impl Font {
    /// Empty font request; produces no classes until a field is set
    pub fn new() -> Self {
        Self::default()
    }

    /// Text size (`text-lg`)
    pub fn size(mut self, size: TextSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Font weight (`font-bold`)
    pub fn weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Letter spacing (`tracking-wide`)
    pub fn tracking(mut self, tracking: Tracking) -> Self {
        self.tracking = Some(tracking);
        self
    }

    /// Line height (`leading-tight`)
    pub fn leading(mut self, leading: Leading) -> Self {
        self.leading = Some(leading);
        self
    }

    /// Text alignment (`text-center`)
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    /// Text decoration (`underline`)
    pub fn decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = Some(decoration);
        self
    }

    /// Whitespace and wrapping behavior
    pub fn wrapping(mut self, wrapping: Wrapping) -> Self {
        self.wrapping = Some(wrapping);
        self
    }

    /// Text color (`text-blue-500`)
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Font family keyword (`sans`, `serif`, `mono`) or theme family name
    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }
}

impl StyleOperation for Font {
    fn classes(&self) -> Vec<String> {
        let mut classes = Vec::new();
        if let Some(size) = self.size {
            classes.push(format!("text-{}", size.as_str()));
        }
        if let Some(weight) = self.weight {
            classes.push(format!("font-{}", weight.as_str()));
        }
        if let Some(tracking) = self.tracking {
            classes.push(format!("tracking-{}", tracking.as_str()));
        }
        if let Some(leading) = self.leading {
            classes.push(format!("leading-{}", leading.as_str()));
        }
        if let Some(align) = self.align {
            classes.push(format!("text-{}", align.as_str()));
        }
        if let Some(decoration) = self.decoration {
            classes.push(decoration.as_str().to_string());
        }
        if let Some(wrapping) = self.wrapping {
            classes.push(format!("text-{}", wrapping.as_str()));
        }
        if let Some(color) = &self.color {
            classes.push(format!("text-{}", color));
        }
        if let Some(family) = &self.family {
            classes.push(format!("font-{}", family));
        }
        classes
    }
}

/// Background color
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Background(pub Color);

impl StyleOperation for Background {
    fn classes(&self) -> Vec<String> {
        vec![format!("bg-{}", self.0)]
    }
}

/// Element opacity as a percentage
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opacity(pub u8);

impl StyleOperation for Opacity {
    fn classes(&self) -> Vec<String> {
        vec![format!("opacity-{}", self.0)]
    }
}

// =============================================================================
// Box model
// =============================================================================

/// Inner spacing on one or more edges
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Padding {
    edges: Edges,
    length: Length,
}

impl Padding {
    /// Padding on every edge
    pub fn new(length: impl Into<Length>) -> Self {
        Self {
            edges: smallvec![Edge::All],
            length: length.into(),
        }
    }

    /// Restrict to the given edges, in order
    pub fn edges(mut self, edges: impl IntoIterator<Item = Edge>) -> Self {
        self.edges = edges.into_iter().collect();
        self
    }
}

impl StyleOperation for Padding {
    fn classes(&self) -> Vec<String> {
        edge_classes("p", &self.edges, &self.length)
    }
}

/// Outer spacing on one or more edges
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Margins {
    edges: Edges,
    length: Length,
}

impl Margins {
    /// Margin on every edge
    pub fn new(length: impl Into<Length>) -> Self {
        Self {
            edges: smallvec![Edge::All],
            length: length.into(),
        }
    }

    /// Horizontally centered (`mx-auto`)
    pub fn auto_x() -> Self {
        Self::new(Length::Auto).edges([Edge::Horizontal])
    }

    /// Restrict the margin to these edges
    pub fn edges(mut self, edges: impl IntoIterator<Item = Edge>) -> Self {
        self.edges = edges.into_iter().collect();
        self
    }
}

impl StyleOperation for Margins {
    fn classes(&self) -> Vec<String> {
        edge_classes("m", &self.edges, &self.length)
    }
}

fn edge_classes(stem: &str, edges: &[Edge], length: &Length) -> Vec<String> {
    edges
        .iter()
        .map(|edge| format!("{}-{}", edge.stem(stem), length))
        .collect()
}

/// Border width, style, and color
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Border {
    width: Option<u16>,
    edges: Edges,
    style: Option<BorderStyle>,
    color: Option<Color>,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            width: None,
            edges: smallvec![Edge::All],
            style: None,
            color: None,
        }
    }
}

impl Border {
    /// A default-width border on every edge (`border`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Border width in pixels (`border-2`)
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Restrict the border width to these edges
    pub fn edges(mut self, edges: impl IntoIterator<Item = Edge>) -> Self {
        self.edges = edges.into_iter().collect();
        self
    }

    /// Border line style (`border-dashed`)
    pub fn style(mut self, style: BorderStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Border color (`border-gray-200`)
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl StyleOperation for Border {
    fn classes(&self) -> Vec<String> {
        let mut classes: Vec<String> = self
            .edges
            .iter()
            .map(|edge| {
                let stem = edge.dashed("border");
                match self.width {
                    Some(width) => format!("{}-{}", stem, width),
                    None => stem,
                }
            })
            .collect();
        if let Some(style) = self.style {
            classes.push(format!("border-{}", style.as_str()));
        }
        if let Some(color) = &self.color {
            classes.push(format!("border-{}", color));
        }
        classes
    }
}

/// Corner radius, optionally limited to one side
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rounded {
    size: RadiusSize,
    edge: Edge,
}

impl Rounded {
    /// Corner radius on all corners
    pub fn new(size: RadiusSize) -> Self {
        Self {
            size,
            edge: Edge::All,
        }
    }

    /// Round only the corners of one edge (`rounded-t-lg`)
    pub fn edge(mut self, edge: Edge) -> Self {
        self.edge = edge;
        self
    }
}

impl StyleOperation for Rounded {
    fn classes(&self) -> Vec<String> {
        let stem = self.edge.dashed("rounded");
        let class = match self.size.suffix() {
            "" => stem,
            suffix => format!("{}-{}", stem, suffix),
        };
        vec![class]
    }
}

// =============================================================================
// Sizing
// =============================================================================

/// Equal width and height (`size-*`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Size(pub Length);

impl StyleOperation for Size {
    fn classes(&self) -> Vec<String> {
        vec![format!("size-{}", self.0)]
    }
}

/// Width and height with optional bounds
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    width: Option<Length>,
    height: Option<Length>,
    min_width: Option<Length>,
    max_width: Option<Length>,
    min_height: Option<Length>,
    max_height: Option<Length>,
}

impl Frame {
    /// Empty frame request
    pub fn new() -> Self {
        Self::default()
    }

    /// Width (`w-64`)
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Height (`h-full`)
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Minimum width (`min-w-0`)
    pub fn min_width(mut self, width: impl Into<Length>) -> Self {
        self.min_width = Some(width.into());
        self
    }

    /// Maximum width (`max-w-screen`)
    pub fn max_width(mut self, width: impl Into<Length>) -> Self {
        self.max_width = Some(width.into());
        self
    }

    /// Minimum height (`min-h-screen`)
    pub fn min_height(mut self, height: impl Into<Length>) -> Self {
        self.min_height = Some(height.into());
        self
    }

    /// Maximum height (`max-h-96`)
    pub fn max_height(mut self, height: impl Into<Length>) -> Self {
        self.max_height = Some(height.into());
        self
    }
}

impl StyleOperation for Frame {
    fn classes(&self) -> Vec<String> {
        [
            ("w", &self.width),
            ("h", &self.height),
            ("min-w", &self.min_width),
            ("max-w", &self.max_width),
            ("min-h", &self.min_height),
            ("max-h", &self.max_height),
        ]
        .into_iter()
        .filter_map(|(stem, length)| length.as_ref().map(|l| format!("{}-{}", stem, l)))
        .collect()
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Flex container
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Flex {
    direction: Option<Direction>,
    justify: Option<Justify>,
    align: Option<Align>,
    grow: Option<bool>,
    wrap: bool,
    gap: Option<Length>,
}

impl Flex {
    /// A flex container (`flex`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Main axis direction (`flex-col`)
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Main axis distribution (`justify-between`)
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    /// Cross axis alignment (`items-center`)
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// `grow` when true, `grow-0` when false
    pub fn grow(mut self, grow: bool) -> Self {
        self.grow = Some(grow);
        self
    }

    /// Allow items to wrap (`flex-wrap`)
    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    /// Gap between items (`gap-4`)
    pub fn gap(mut self, gap: impl Into<Length>) -> Self {
        self.gap = Some(gap.into());
        self
    }
}

impl StyleOperation for Flex {
    fn classes(&self) -> Vec<String> {
        let mut classes = vec!["flex".to_string()];
        if let Some(direction) = self.direction {
            classes.push(format!("flex-{}", direction.as_str()));
        }
        if let Some(justify) = self.justify {
            classes.push(format!("justify-{}", justify.as_str()));
        }
        if let Some(align) = self.align {
            classes.push(format!("items-{}", align.as_str()));
        }
        match self.grow {
            Some(true) => classes.push("grow".to_string()),
            Some(false) => classes.push("grow-0".to_string()),
            None => {}
        }
        if self.wrap {
            classes.push("flex-wrap".to_string());
        }
        if let Some(gap) = &self.gap {
            classes.push(format!("gap-{}", gap));
        }
        classes
    }
}

/// Grid container
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    columns: Option<u16>,
    rows: Option<u16>,
    flow: Option<Direction>,
    gap: Option<Length>,
}

impl Grid {
    /// A grid container (`grid`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Column count (`grid-cols-3`)
    pub fn columns(mut self, columns: u16) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Row count (`grid-rows-2`)
    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Auto-placement direction; only `Row` and `Column` are meaningful
    pub fn flow(mut self, flow: Direction) -> Self {
        self.flow = Some(flow);
        self
    }

    /// Gap between cells (`gap-4`)
    pub fn gap(mut self, gap: impl Into<Length>) -> Self {
        self.gap = Some(gap.into());
        self
    }
}

impl StyleOperation for Grid {
    fn classes(&self) -> Vec<String> {
        let mut classes = vec!["grid".to_string()];
        if let Some(columns) = self.columns {
            classes.push(format!("grid-cols-{}", columns));
        }
        if let Some(rows) = self.rows {
            classes.push(format!("grid-rows-{}", rows));
        }
        if let Some(flow) = self.flow {
            classes.push(format!("grid-flow-{}", flow.as_str()));
        }
        if let Some(gap) = &self.gap {
            classes.push(format!("gap-{}", gap));
        }
        classes
    }
}

/// Positioning scheme and edge offsets
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    kind: Option<PositionType>,
    edges: Edges,
    offset: Option<Length>,
}

impl Position {
    /// Positioning scheme (`absolute`)
    pub fn new(kind: PositionType) -> Self {
        Self {
            kind: Some(kind),
            edges: SmallVec::new(),
            offset: None,
        }
    }

    /// Offsets only, keeping the current positioning scheme
    pub fn offset(edges: impl IntoIterator<Item = Edge>, offset: impl Into<Length>) -> Self {
        Self {
            kind: None,
            edges: edges.into_iter().collect(),
            offset: Some(offset.into()),
        }
    }

    /// Offset from the given edges (`top-0`, `inset-x-4`)
    pub fn at(mut self, edges: impl IntoIterator<Item = Edge>, offset: impl Into<Length>) -> Self {
        self.edges = edges.into_iter().collect();
        self.offset = Some(offset.into());
        self
    }
}

impl StyleOperation for Position {
    fn classes(&self) -> Vec<String> {
        let mut classes = Vec::new();
        if let Some(kind) = self.kind {
            classes.push(kind.as_str().to_string());
        }
        if let Some(offset) = &self.offset {
            for edge in &self.edges {
                let stem = match edge {
                    Edge::All => "inset",
                    Edge::Horizontal => "inset-x",
                    Edge::Vertical => "inset-y",
                    Edge::Top => "top",
                    Edge::Bottom => "bottom",
                    Edge::Leading => "left",
                    Edge::Trailing => "right",
                };
                classes.push(format!("{}-{}", stem, offset));
            }
        }
        classes
    }
}

/// Overflow behavior on one or both axes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overflow {
    kind: OverflowType,
    axis: Axis,
}

impl Overflow {
    /// Overflow behavior on both axes
    pub fn new(kind: OverflowType) -> Self {
        Self {
            kind,
            axis: Axis::Both,
        }
    }

    /// Limit the overflow behavior to one axis (`overflow-x-auto`)
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }
}

impl StyleOperation for Overflow {
    fn classes(&self) -> Vec<String> {
        vec![format!("{}-{}", self.axis.dashed("overflow"), self.kind.as_str())]
    }
}

/// Hide the element (`hidden`); `Hidden(false)` emits nothing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hidden(pub bool);

impl StyleOperation for Hidden {
    fn classes(&self) -> Vec<String> {
        if self.0 {
            vec!["hidden".to_string()]
        } else {
            Vec::new()
        }
    }
}

/// Space between children along an axis (`space-x-*`, `space-y-*`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spacing {
    axis: Axis,
    length: Length,
}

impl Spacing {
    /// Space between children along `axis` (`space-x-4`)
    pub fn new(axis: Axis, length: impl Into<Length>) -> Self {
        Self {
            axis,
            length: length.into(),
        }
    }
}

impl StyleOperation for Spacing {
    fn classes(&self) -> Vec<String> {
        match self.axis {
            Axis::Horizontal => vec![format!("space-x-{}", self.length)],
            Axis::Vertical => vec![format!("space-y-{}", self.length)],
            Axis::Both => vec![
                format!("space-x-{}", self.length),
                format!("space-y-{}", self.length),
            ],
        }
    }
}

// =============================================================================
// Effects & interaction
// =============================================================================

/// CSS transition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    property: TransitionProperty,
    duration: Option<u32>,
    easing: Option<Easing>,
    delay: Option<u32>,
}

impl Transition {
    /// Transition the given property group
    pub fn new(property: TransitionProperty) -> Self {
        Self {
            property,
            ..Self::default()
        }
    }

    /// Duration in milliseconds
    pub fn duration(mut self, ms: u32) -> Self {
        self.duration = Some(ms);
        self
    }

    /// Timing function (`ease-in-out`)
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Delay in milliseconds
    pub fn delay(mut self, ms: u32) -> Self {
        self.delay = Some(ms);
        self
    }
}

impl StyleOperation for Transition {
    fn classes(&self) -> Vec<String> {
        let mut classes = vec![self.property.class().to_string()];
        if let Some(ms) = self.duration {
            classes.push(format!("duration-{}", ms));
        }
        if let Some(easing) = self.easing {
            classes.push(format!("ease-{}", easing.as_str()));
        }
        if let Some(ms) = self.delay {
            classes.push(format!("delay-{}", ms));
        }
        classes
    }
}

/// Stacking order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZIndex(pub i32);

impl StyleOperation for ZIndex {
    fn classes(&self) -> Vec<String> {
        vec![format!("z-{}", self.0)]
    }
}

/// Mouse cursor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor(pub CursorType);

impl StyleOperation for Cursor {
    fn classes(&self) -> Vec<String> {
        vec![format!("cursor-{}", self.0.as_str())]
    }
}
