//! Style value tokens
//!
//! Each token knows the class fragment it contributes. The fragments follow
//! the utility-class naming used throughout the crate (`text-lg`,
//! `font-bold`, `rounded-md`).

use std::fmt;

/// Font size scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextSize {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    Xl2,
    Xl3,
    Xl4,
    Xl5,
    Xl6,
    Xl7,
    Xl8,
    Xl9,
}

impl TextSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextSize::Xs => "xs",
            TextSize::Sm => "sm",
            TextSize::Base => "base",
            TextSize::Lg => "lg",
            TextSize::Xl => "xl",
            TextSize::Xl2 => "2xl",
            TextSize::Xl3 => "3xl",
            TextSize::Xl4 => "4xl",
            TextSize::Xl5 => "5xl",
            TextSize::Xl6 => "6xl",
            TextSize::Xl7 => "7xl",
            TextSize::Xl8 => "8xl",
            TextSize::Xl9 => "9xl",
        }
    }
}

/// Font weight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weight {
    Thin,
    ExtraLight,
    Light,
    Normal,
    Medium,
    Semibold,
    Bold,
    ExtraBold,
    Black,
}

impl Weight {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weight::Thin => "thin",
            Weight::ExtraLight => "extralight",
            Weight::Light => "light",
            Weight::Normal => "normal",
            Weight::Medium => "medium",
            Weight::Semibold => "semibold",
            Weight::Bold => "bold",
            Weight::ExtraBold => "extrabold",
            Weight::Black => "black",
        }
    }
}

/// Letter spacing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tracking {
    Tighter,
    Tight,
    Normal,
    Wide,
    Wider,
    Widest,
}

impl Tracking {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tracking::Tighter => "tighter",
            Tracking::Tight => "tight",
            Tracking::Normal => "normal",
            Tracking::Wide => "wide",
            Tracking::Wider => "wider",
            Tracking::Widest => "widest",
        }
    }
}

/// Line height
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Leading {
    None,
    Tight,
    Snug,
    Normal,
    Relaxed,
    Loose,
}

impl Leading {
    pub fn as_str(&self) -> &'static str {
        match self {
            Leading::None => "none",
            Leading::Tight => "tight",
            Leading::Snug => "snug",
            Leading::Normal => "normal",
            Leading::Relaxed => "relaxed",
            Leading::Loose => "loose",
        }
    }
}

/// Horizontal text alignment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

/// Text decoration line; each variant is a complete class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decoration {
    Underline,
    LineThrough,
    Overline,
    NoUnderline,
}

impl Decoration {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decoration::Underline => "underline",
            Decoration::LineThrough => "line-through",
            Decoration::Overline => "overline",
            Decoration::NoUnderline => "no-underline",
        }
    }
}

/// Text wrapping behavior
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wrapping {
    Wrap,
    Nowrap,
    Balance,
    Pretty,
}

impl Wrapping {
    pub fn as_str(&self) -> &'static str {
        match self {
            Wrapping::Wrap => "wrap",
            Wrapping::Nowrap => "nowrap",
            Wrapping::Balance => "balance",
            Wrapping::Pretty => "pretty",
        }
    }
}

/// A palette color reference such as `blue-500` or `black/50`
///
/// The palette itself lives in the stylesheet; this only names an entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    name: String,
    shade: Option<u16>,
    alpha: Option<u8>,
}

impl Color {
    /// A shaded palette color, e.g. `Color::new("blue", 500)`
    pub fn new(name: impl Into<String>, shade: u16) -> Self {
        Self {
            name: name.into(),
            shade: Some(shade),
            alpha: None,
        }
    }

    /// An unshaded color keyword such as `white`, `black`, or `transparent`
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shade: None,
            alpha: None,
        }
    }

    /// Apply an alpha percentage (`/50`)
    pub fn opacity(mut self, percent: u8) -> Self {
        self.alpha = Some(percent);
        self
    }

    pub fn white() -> Self {
        Self::named("white")
    }

    pub fn black() -> Self {
        Self::named("black")
    }

    pub fn transparent() -> Self {
        Self::named("transparent")
    }

    pub fn current() -> Self {
        Self::named("current")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(shade) = self.shade {
            write!(f, "-{}", shade)?;
        }
        if let Some(alpha) = self.alpha {
            write!(f, "/{}", alpha)?;
        }
        Ok(())
    }
}

/// A length on the spacing scale or a keyword length
///
/// Numeric values are emitted literally; no range validation is performed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Length {
    /// A step on the spacing scale (`4` is `1rem`)
    Spacing(i32),
    /// A fraction of the container (`1/2`)
    Fraction(u16, u16),
    Full,
    Screen,
    Auto,
    Fit,
    Min,
    Max,
    /// A single pixel
    Px,
    /// An arbitrary CSS value, emitted in brackets (`[300px]`)
    Arbitrary(String),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Spacing(n) => write!(f, "{}", n),
            Length::Fraction(n, d) => write!(f, "{}/{}", n, d),
            Length::Full => f.write_str("full"),
            Length::Screen => f.write_str("screen"),
            Length::Auto => f.write_str("auto"),
            Length::Fit => f.write_str("fit"),
            Length::Min => f.write_str("min"),
            Length::Max => f.write_str("max"),
            Length::Px => f.write_str("px"),
            Length::Arbitrary(value) => write!(f, "[{}]", value),
        }
    }
}

impl From<i32> for Length {
    fn from(value: i32) -> Self {
        Length::Spacing(value)
    }
}

/// Corner radius scale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RadiusSize {
    None,
    Sm,
    /// The plain `rounded` class
    #[default]
    Base,
    Md,
    Lg,
    Xl,
    Xl2,
    Xl3,
    Full,
}

impl RadiusSize {
    /// Suffix after `rounded`, empty for [`RadiusSize::Base`]
    pub fn suffix(&self) -> &'static str {
        match self {
            RadiusSize::None => "none",
            RadiusSize::Sm => "sm",
            RadiusSize::Base => "",
            RadiusSize::Md => "md",
            RadiusSize::Lg => "lg",
            RadiusSize::Xl => "xl",
            RadiusSize::Xl2 => "2xl",
            RadiusSize::Xl3 => "3xl",
            RadiusSize::Full => "full",
        }
    }
}

/// Border line style
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
    Double,
    Hidden,
    None,
}

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Double => "double",
            BorderStyle::Hidden => "hidden",
            BorderStyle::None => "none",
        }
    }
}

/// Flex main axis direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "col",
            Direction::RowReverse => "row-reverse",
            Direction::ColumnReverse => "col-reverse",
        }
    }
}

/// Main axis distribution
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Justify {
    Start,
    End,
    Center,
    Between,
    Around,
    Evenly,
}

impl Justify {
    pub fn as_str(&self) -> &'static str {
        match self {
            Justify::Start => "start",
            Justify::End => "end",
            Justify::Center => "center",
            Justify::Between => "between",
            Justify::Around => "around",
            Justify::Evenly => "evenly",
        }
    }
}

/// Cross axis alignment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Align {
    Start,
    End,
    Center,
    Baseline,
    Stretch,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Start => "start",
            Align::End => "end",
            Align::Center => "center",
            Align::Baseline => "baseline",
            Align::Stretch => "stretch",
        }
    }
}

/// CSS `position` value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PositionType {
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl PositionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionType::Static => "static",
            PositionType::Relative => "relative",
            PositionType::Absolute => "absolute",
            PositionType::Fixed => "fixed",
            PositionType::Sticky => "sticky",
        }
    }
}

/// CSS `overflow` value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverflowType {
    Auto,
    Hidden,
    Clip,
    Visible,
    Scroll,
}

impl OverflowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowType::Auto => "auto",
            OverflowType::Hidden => "hidden",
            OverflowType::Clip => "clip",
            OverflowType::Visible => "visible",
            OverflowType::Scroll => "scroll",
        }
    }
}

/// Which properties a transition animates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    /// The plain `transition` class (common properties)
    #[default]
    Default,
    All,
    Colors,
    Opacity,
    Shadow,
    Transform,
    None,
}

impl TransitionProperty {
    pub fn class(&self) -> &'static str {
        match self {
            TransitionProperty::Default => "transition",
            TransitionProperty::All => "transition-all",
            TransitionProperty::Colors => "transition-colors",
            TransitionProperty::Opacity => "transition-opacity",
            TransitionProperty::Shadow => "transition-shadow",
            TransitionProperty::Transform => "transition-transform",
            TransitionProperty::None => "transition-none",
        }
    }
}

/// Transition timing function
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    In,
    Out,
    InOut,
}

impl Easing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::In => "in",
            Easing::Out => "out",
            Easing::InOut => "in-out",
        }
    }
}

/// Mouse cursor shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorType {
    Auto,
    Default,
    Pointer,
    Wait,
    Text,
    Move,
    NotAllowed,
    Grab,
}

impl CursorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CursorType::Auto => "auto",
            CursorType::Default => "default",
            CursorType::Pointer => "pointer",
            CursorType::Wait => "wait",
            CursorType::Text => "text",
            CursorType::Move => "move",
            CursorType::NotAllowed => "not-allowed",
            CursorType::Grab => "grab",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tokens() {
        assert_eq!(Color::new("blue", 500).to_string(), "blue-500");
        assert_eq!(Color::black().opacity(50).to_string(), "black/50");
        assert_eq!(Color::new("red", 600).opacity(25).to_string(), "red-600/25");
    }

    #[test]
    fn test_length_tokens() {
        assert_eq!(Length::Spacing(4).to_string(), "4");
        assert_eq!(Length::Spacing(-2).to_string(), "-2");
        assert_eq!(Length::Fraction(1, 2).to_string(), "1/2");
        assert_eq!(Length::Arbitrary("300px".into()).to_string(), "[300px]");
    }
}
