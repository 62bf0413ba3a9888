//! Breakpoint and state modifiers
//!
//! A [`Modifier`] names a condition under which a utility class applies:
//! a responsive breakpoint (`md:`), an interaction state (`hover:`), a
//! color scheme (`dark:`), or an ARIA state (`aria-expanded:`).
//!
//! Modifiers are order-sensitive when combined. Applying `hover` and then
//! `md` yields the prefix chain `hover:md:`.

use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// A breakpoint, pseudo-state, or ARIA-state condition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    // Breakpoints
    /// Extra small screens and up
    Xs,
    /// Small screens (640px) and up
    Sm,
    /// Medium screens (768px) and up
    Md,
    /// Large screens (1024px) and up
    Lg,
    /// Extra large screens (1280px) and up
    Xl,
    /// Double extra large screens (1536px) and up
    Xl2,

    // Interaction and structural states
    /// Pointer is over the element
    Hover,
    /// Element has focus
    Focus,
    /// Element is being activated
    Active,
    /// Placeholder text of an input
    Placeholder,
    /// Dark color scheme
    Dark,
    /// First child of its parent
    First,
    /// Last child of its parent
    Last,
    /// Disabled form control
    Disabled,
    /// User prefers reduced motion
    MotionReduce,

    // ARIA states
    /// `aria-busy="true"`
    AriaBusy,
    /// `aria-checked="true"`
    AriaChecked,
    /// `aria-disabled="true"`
    AriaDisabled,
    /// `aria-expanded="true"`
    AriaExpanded,
    /// `aria-hidden="true"`
    AriaHidden,
    /// `aria-pressed="true"`
    AriaPressed,
    /// `aria-readonly="true"`
    AriaReadonly,
    /// `aria-required="true"`
    AriaRequired,
    /// `aria-selected="true"`
    AriaSelected,
}

impl Modifier {
    /// Every modifier, breakpoints first
    pub const ALL: [Modifier; 24] = [
        Modifier::Xs,
        Modifier::Sm,
        Modifier::Md,
        Modifier::Lg,
        Modifier::Xl,
        Modifier::Xl2,
        Modifier::Hover,
        Modifier::Focus,
        Modifier::Active,
        Modifier::Placeholder,
        Modifier::Dark,
        Modifier::First,
        Modifier::Last,
        Modifier::Disabled,
        Modifier::MotionReduce,
        Modifier::AriaBusy,
        Modifier::AriaChecked,
        Modifier::AriaDisabled,
        Modifier::AriaExpanded,
        Modifier::AriaHidden,
        Modifier::AriaPressed,
        Modifier::AriaReadonly,
        Modifier::AriaRequired,
        Modifier::AriaSelected,
    ];

    /// The bare name used in class prefixes (`md`, `2xl`, `aria-busy`)
    pub fn name(&self) -> &'static str {
        match self {
            Modifier::Xs => "xs",
            Modifier::Sm => "sm",
            Modifier::Md => "md",
            Modifier::Lg => "lg",
            Modifier::Xl => "xl",
            Modifier::Xl2 => "2xl",
            Modifier::Hover => "hover",
            Modifier::Focus => "focus",
            Modifier::Active => "active",
            Modifier::Placeholder => "placeholder",
            Modifier::Dark => "dark",
            Modifier::First => "first",
            Modifier::Last => "last",
            Modifier::Disabled => "disabled",
            Modifier::MotionReduce => "motion-reduce",
            Modifier::AriaBusy => "aria-busy",
            Modifier::AriaChecked => "aria-checked",
            Modifier::AriaDisabled => "aria-disabled",
            Modifier::AriaExpanded => "aria-expanded",
            Modifier::AriaHidden => "aria-hidden",
            Modifier::AriaPressed => "aria-pressed",
            Modifier::AriaReadonly => "aria-readonly",
            Modifier::AriaRequired => "aria-required",
            Modifier::AriaSelected => "aria-selected",
        }
    }

    /// The canonical class prefix, e.g. `md:` or `hover:`
    pub fn prefix(&self) -> String {
        format!("{}:", self.name())
    }

    /// Whether this modifier is a responsive breakpoint
    pub fn is_breakpoint(&self) -> bool {
        matches!(
            self,
            Modifier::Xs
                | Modifier::Sm
                | Modifier::Md
                | Modifier::Lg
                | Modifier::Xl
                | Modifier::Xl2
        )
    }

    /// Minimum viewport width in pixels at which a breakpoint activates
    ///
    /// Returns `None` for `xs` (always active) and for non-breakpoints.
    pub fn min_width(&self) -> Option<u32> {
        match self {
            Modifier::Sm => Some(640),
            Modifier::Md => Some(768),
            Modifier::Lg => Some(1024),
            Modifier::Xl => Some(1280),
            Modifier::Xl2 => Some(1536),
            _ => None,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Modifier {
    type Err = StyleError;

    /// Accepts the class-prefix name (`2xl`, `aria-busy`), with or without
    /// the trailing colon, or the camel-case spelling (`xl2`, `ariaBusy`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_end_matches(':');
        Modifier::ALL
            .iter()
            .copied()
            .find(|m| m.name() == name || camel_name(*m) == name)
            .ok_or_else(|| StyleError::UnknownModifier(s.to_string()))
    }
}

fn camel_name(modifier: Modifier) -> &'static str {
    match modifier {
        Modifier::Xl2 => "xl2",
        Modifier::MotionReduce => "motionReduce",
        Modifier::AriaBusy => "ariaBusy",
        Modifier::AriaChecked => "ariaChecked",
        Modifier::AriaDisabled => "ariaDisabled",
        Modifier::AriaExpanded => "ariaExpanded",
        Modifier::AriaHidden => "ariaHidden",
        Modifier::AriaPressed => "ariaPressed",
        Modifier::AriaReadonly => "ariaReadonly",
        Modifier::AriaRequired => "ariaRequired",
        Modifier::AriaSelected => "ariaSelected",
        other => other.name(),
    }
}

/// Concatenate the prefixes of `modifiers` in the order given
pub fn prefix_chain(modifiers: &[Modifier]) -> String {
    modifiers.iter().map(Modifier::prefix).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(Modifier::Md.prefix(), "md:");
        assert_eq!(Modifier::Xl2.prefix(), "2xl:");
        assert_eq!(Modifier::MotionReduce.prefix(), "motion-reduce:");
        assert_eq!(Modifier::AriaExpanded.prefix(), "aria-expanded:");
    }

    #[test]
    fn test_prefix_chain_is_order_sensitive() {
        assert_eq!(prefix_chain(&[Modifier::Hover, Modifier::Md]), "hover:md:");
        assert_eq!(prefix_chain(&[Modifier::Md, Modifier::Hover]), "md:hover:");
        assert_eq!(prefix_chain(&[]), "");
    }

    #[test]
    fn test_parse() {
        assert_eq!("md".parse::<Modifier>(), Ok(Modifier::Md));
        assert_eq!("2xl:".parse::<Modifier>(), Ok(Modifier::Xl2));
        assert_eq!("xl2".parse::<Modifier>(), Ok(Modifier::Xl2));
        assert_eq!("ariaBusy".parse::<Modifier>(), Ok(Modifier::AriaBusy));
        assert_eq!("aria-busy".parse::<Modifier>(), Ok(Modifier::AriaBusy));
        assert_eq!(
            "wiggle".parse::<Modifier>(),
            Err(StyleError::UnknownModifier("wiggle".into()))
        );
    }

    #[test]
    fn test_breakpoints() {
        let breakpoints: Vec<_> = Modifier::ALL
            .iter()
            .filter(|m| m.is_breakpoint())
            .collect();
        assert_eq!(breakpoints.len(), 6);
        assert_eq!(Modifier::Xs.min_width(), None);
        assert_eq!(Modifier::Lg.min_width(), Some(1024));
        assert_eq!(Modifier::Hover.min_width(), None);
    }
}
