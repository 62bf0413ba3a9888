//! Utility-class composition
//!
//! [`combine`] prefixes base classes with a modifier chain, and
//! [`RedundancyFilter`] drops modifier-scoped classes whose property is
//! already declared unscoped on the element.

use tracing::trace;

use crate::modifier::{prefix_chain, Modifier};

/// Prefix every class in `base_classes` with the chain built from `modifiers`
///
/// With no modifiers the input is returned untouched. Otherwise each output
/// class is the concatenation of every modifier prefix, in call order,
/// followed by the base class.
///
/// ```
/// use webui_style::{combine, Modifier};
///
/// let classes = combine(vec!["p-4".into()], &[Modifier::Hover, Modifier::Md]);
/// assert_eq!(classes, vec!["hover:md:p-4".to_string()]);
/// ```
pub fn combine(base_classes: Vec<String>, modifiers: &[Modifier]) -> Vec<String> {
    if modifiers.is_empty() {
        return base_classes;
    }

    let prefix = prefix_chain(modifiers);
    base_classes
        .into_iter()
        .map(|class| format!("{}{}", prefix, class))
        .collect()
}

/// Split a class into its modifier chain and its utility body
///
/// `"dark:hover:bg-black"` splits into `("dark:hover:", "bg-black")`.
/// Colons inside an arbitrary value (`bg-[url(a:b)]`) are not treated as
/// modifier separators.
pub fn split_modifiers(class: &str) -> (&str, &str) {
    let end = class.find('[').unwrap_or(class.len());
    match class[..end].rfind(':') {
        Some(idx) => (&class[..=idx], &class[idx + 1..]),
        None => ("", class),
    }
}

/// A family of utility classes that set the same CSS property
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyFamily {
    /// Stem shared by the family (`transition`)
    pub stem: &'static str,
    /// Stems that start with `stem` but set a different property
    pub excluded: &'static [&'static str],
}

impl PropertyFamily {
    /// The `transition` family: `transition`, `transition-colors`, ...
    ///
    /// Duration, delay, and timing classes configure a transition rather
    /// than declare one, so they are not members.
    pub const TRANSITION: PropertyFamily = PropertyFamily {
        stem: "transition",
        excluded: &[
            "transition-duration",
            "transition-delay",
            "transition-timing",
        ],
    };

    /// Whether an unprefixed utility body belongs to this family
    pub fn contains(&self, body: &str) -> bool {
        let in_stem = body == self.stem
            || body
                .strip_prefix(self.stem)
                .is_some_and(|rest| rest.starts_with('-'));
        in_stem && !self.excluded.iter().any(|ex| body.starts_with(ex))
    }
}

/// Drops modifier-scoped classes that repeat an unscoped declaration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedundancyFilter {
    families: Vec<PropertyFamily>,
}

impl Default for RedundancyFilter {
    fn default() -> Self {
        Self {
            families: vec![PropertyFamily::TRANSITION],
        }
    }
}

impl RedundancyFilter {
    /// A filter with no families; keeps every class
    pub fn empty() -> Self {
        Self {
            families: Vec::new(),
        }
    }

    /// Add a property family to check
    pub fn with_family(mut self, family: PropertyFamily) -> Self {
        self.families.push(family);
        self
    }

    /// The families this filter checks
    pub fn families(&self) -> &[PropertyFamily] {
        &self.families
    }

    /// Remove entries of `scoped` whose family is already declared without
    /// a modifier in `existing`
    ///
    /// Unscoped entries of `scoped` are always kept.
    pub fn retain(&self, existing: &[String], scoped: Vec<String>) -> Vec<String> {
        let declared: Vec<&PropertyFamily> = self
            .families
            .iter()
            .filter(|family| {
                existing.iter().any(|class| {
                    let (chain, body) = split_modifiers(class);
                    chain.is_empty() && family.contains(body)
                })
            })
            .collect();

        if declared.is_empty() {
            return scoped;
        }

        scoped
            .into_iter()
            .filter(|class| {
                let (chain, body) = split_modifiers(class);
                let redundant = !chain.is_empty() && declared.iter().any(|f| f.contains(body));
                if redundant {
                    trace!(class = %class, "dropping class already declared without modifiers");
                }
                !redundant
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_combine_identity_without_modifiers() {
        let base = classes(&["p-4", "text-lg"]);
        assert_eq!(combine(base.clone(), &[]), base);
    }

    #[test]
    fn test_combine_prefixes_each_class() {
        let base = classes(&["p-4", "text-lg", "bg-blue-500"]);
        let out = combine(base.clone(), &[Modifier::Dark, Modifier::Hover]);
        assert_eq!(out.len(), base.len());
        for (combined, original) in out.iter().zip(&base) {
            assert_eq!(combined, &format!("dark:hover:{}", original));
        }
    }

    #[test]
    fn test_split_modifiers() {
        assert_eq!(split_modifiers("p-4"), ("", "p-4"));
        assert_eq!(split_modifiers("md:hover:p-4"), ("md:hover:", "p-4"));
        assert_eq!(split_modifiers("bg-[url(a:b)]"), ("", "bg-[url(a:b)]"));
        assert_eq!(split_modifiers("md:bg-[url(a:b)]"), ("md:", "bg-[url(a:b)]"));
    }

    #[test]
    fn test_transition_family_membership() {
        let family = PropertyFamily::TRANSITION;
        assert!(family.contains("transition"));
        assert!(family.contains("transition-colors"));
        assert!(!family.contains("transition-duration-300"));
        assert!(!family.contains("transition-delay-100"));
        assert!(!family.contains("transition-timing-ease"));
        assert!(!family.contains("transitional"));
        assert!(!family.contains("duration-300"));
    }

    #[test]
    fn test_filter_drops_scoped_duplicate() {
        let filter = RedundancyFilter::default();
        let existing = classes(&["transition-colors", "p-4"]);
        let scoped = classes(&["hover:transition-all", "hover:bg-red-500"]);
        assert_eq!(
            filter.retain(&existing, scoped),
            classes(&["hover:bg-red-500"])
        );
    }

    #[test]
    fn test_filter_keeps_when_base_only_scoped() {
        let filter = RedundancyFilter::default();
        let existing = classes(&["md:transition"]);
        let scoped = classes(&["hover:transition"]);
        assert_eq!(filter.retain(&existing, scoped.clone()), scoped);
    }

    #[test]
    fn test_filter_keeps_configuration_classes() {
        let filter = RedundancyFilter::default();
        let existing = classes(&["transition"]);
        let scoped = classes(&["md:transition-duration-500", "md:duration-500"]);
        assert_eq!(filter.retain(&existing, scoped.clone()), scoped);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = RedundancyFilter::empty();
        let existing = classes(&["transition"]);
        let scoped = classes(&["hover:transition"]);
        assert_eq!(filter.retain(&existing, scoped.clone()), scoped);
    }
}
