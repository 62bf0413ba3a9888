//! WebUI Styling
//!
//! This crate turns semantic style requests into utility-class strings:
//!
//! - **Modifiers**: breakpoints, interaction states, and ARIA states with
//!   their class prefixes (`md:`, `hover:`, `aria-expanded:`)
//! - **Style Operations**: typed requests (`Font`, `Padding`, `Flex`, ...)
//!   that each produce a list of classes
//! - **Composition**: [`combine`] applies a modifier chain to classes
//! - **Responsive Builder**: nested modifier blocks whose prefixes compose,
//!   with redundant scoped declarations filtered out
//!
//! # Example
//!
//! ```rust
//! use webui_style::prelude::*;
//!
//! let card = Element::new("div")
//!     .style(Padding::new(4), &[])
//!     .style(Rounded::new(RadiusSize::Lg), &[])
//!     .on(|r| {
//!         r.md(|r| r.padding(Padding::new(8)))
//!             .dark(|r| r.background(Background(Color::new("gray", 900))))
//!     });
//!
//! assert_eq!(
//!     card.render(),
//!     r#"<div class="p-4 rounded-lg md:p-8 dark:bg-gray-900"></div>"#
//! );
//! ```

pub mod compose;
pub mod edge;
pub mod element;
pub mod error;
pub mod modifier;
pub mod ops;
pub mod responsive;
pub mod tokens;

pub use compose::{combine, split_modifiers, PropertyFamily, RedundancyFilter};
pub use edge::{Axis, Edge};
pub use element::{Element, Markup, RawHtml, Stylable, Text, STATE_BINDING_ATTRIBUTE};
pub use error::{Result, StyleError};
pub use modifier::{prefix_chain, Modifier};
pub use ops::StyleOperation;
pub use responsive::{apply_rules, ResponsiveBuilder, ResponsiveRule};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::compose::combine;
    pub use crate::edge::{Axis, Edge};
    pub use crate::element::{Element, Markup, Stylable};
    pub use crate::modifier::Modifier;
    pub use crate::ops::{
        Background, Border, Cursor, Flex, Font, Frame, Grid, Hidden, Margins, Opacity, Overflow,
        Padding, Position, Rounded, Size, Spacing, StyleOperation, Transition, ZIndex,
    };
    pub use crate::responsive::{apply_rules, ResponsiveBuilder, ResponsiveRule};
    pub use crate::tokens::*;
}
