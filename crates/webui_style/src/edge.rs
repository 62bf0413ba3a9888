//! Edges and axes used by spacing, border, and position classes

use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// A side (or group of sides) of an element's box
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Every side
    #[default]
    All,
    /// Top side
    Top,
    /// Leading (left) side
    Leading,
    /// Trailing (right) side
    Trailing,
    /// Bottom side
    Bottom,
    /// Leading and trailing sides
    Horizontal,
    /// Top and bottom sides
    Vertical,
}

impl Edge {
    /// Short code inserted after a property stem (`p` + `t` = `pt`)
    ///
    /// `All` has an empty code so `p-4` rather than `pa-4` is produced.
    pub fn code(&self) -> &'static str {
        match self {
            Edge::All => "",
            Edge::Top => "t",
            Edge::Leading => "l",
            Edge::Trailing => "r",
            Edge::Bottom => "b",
            Edge::Horizontal => "x",
            Edge::Vertical => "y",
        }
    }

    /// Join a property stem with this edge's code (`"m"` becomes `"mx"`)
    pub fn stem(&self, property: &str) -> String {
        format!("{}{}", property, self.code())
    }

    /// Join a property with this edge as a dashed segment (`border-t`)
    pub fn dashed(&self, property: &str) -> String {
        match self {
            Edge::All => property.to_string(),
            edge => format!("{}-{}", property, edge.code()),
        }
    }
}

impl FromStr for Edge {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Edge::All),
            "top" => Ok(Edge::Top),
            "leading" => Ok(Edge::Leading),
            "trailing" => Ok(Edge::Trailing),
            "bottom" => Ok(Edge::Bottom),
            "horizontal" => Ok(Edge::Horizontal),
            "vertical" => Ok(Edge::Vertical),
            other => Err(StyleError::UnknownEdge(other.to_string())),
        }
    }
}

/// A layout axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis
    Horizontal,
    /// The y axis
    Vertical,
    /// Both axes
    #[default]
    Both,
}

impl Axis {
    /// Short code for class fragments; `Both` has none
    pub fn code(&self) -> &'static str {
        match self {
            Axis::Horizontal => "x",
            Axis::Vertical => "y",
            Axis::Both => "",
        }
    }

    /// Join a property with this axis as a dashed segment (`overflow-x`)
    pub fn dashed(&self, property: &str) -> String {
        match self {
            Axis::Both => property.to_string(),
            axis => format!("{}-{}", property, axis.code()),
        }
    }
}

impl FromStr for Axis {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" | "x" => Ok(Axis::Horizontal),
            "vertical" | "y" => Ok(Axis::Vertical),
            "both" => Ok(Axis::Both),
            other => Err(StyleError::UnknownAxis(other.to_string())),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::All => "all",
            Edge::Top => "top",
            Edge::Leading => "leading",
            Edge::Trailing => "trailing",
            Edge::Bottom => "bottom",
            Edge::Horizontal => "horizontal",
            Edge::Vertical => "vertical",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_empty_code() {
        assert_eq!(Edge::All.code(), "");
        assert_eq!(Edge::All.stem("p"), "p");
        assert_eq!(Edge::All.dashed("border"), "border");
    }

    #[test]
    fn test_edge_stems() {
        assert_eq!(Edge::Top.stem("p"), "pt");
        assert_eq!(Edge::Horizontal.stem("m"), "mx");
        assert_eq!(Edge::Trailing.dashed("border"), "border-r");
    }

    #[test]
    fn test_axis_codes() {
        assert_eq!(Axis::Both.dashed("overflow"), "overflow");
        assert_eq!(Axis::Vertical.dashed("overflow"), "overflow-y");
        assert_eq!("x".parse::<Axis>(), Ok(Axis::Horizontal));
        assert!("diagonal".parse::<Axis>().is_err());
        assert_eq!("leading".parse::<Edge>(), Ok(Edge::Leading));
    }
}
