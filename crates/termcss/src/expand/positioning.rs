//! Offsets and flat keyword families for position, display, visibility,
//! overflow and stacking.

use super::{keywords, utility};
use crate::css::Rule;
use crate::tokens::{Side, Tokens};

const POSITION: &[(&str, &str)] = &[
    ("static", "static"),
    ("relative", "relative"),
    ("absolute", "absolute"),
    ("fixed", "fixed"),
    ("sticky", "sticky"),
];

const DISPLAY: &[(&str, &str)] = &[
    ("block", "block"),
    ("inline", "inline"),
    ("inline-block", "inline-block"),
    ("flex", "flex"),
    ("grid", "grid"),
    ("hidden", "none"),
];

const VISIBILITY: &[(&str, &str)] = &[("visible", "visible"), ("invisible", "hidden")];

const OVERFLOW: &[(&str, &str)] = &[
    ("overflow-auto", "auto"),
    ("overflow-hidden", "hidden"),
    ("overflow-scroll", "scroll"),
    ("overflow-visible", "visible"),
];

const Z_INDEX: &[(&str, &str)] = &[
    ("z-0", "0"),
    ("z-10", "10"),
    ("z-20", "20"),
    ("z-50", "50"),
    ("z-auto", "auto"),
];

pub(super) fn expand(tokens: &Tokens) -> Vec<Rule> {
    let mut rules = Vec::new();
    for side in Side::ALL {
        for &n in tokens.offset_scale() {
            rules.push(utility(
                &format!("{}-{}", side.name(), n),
                side.name(),
                side.unit().times(n),
            ));
        }
    }

    rules.extend(keywords("position", POSITION));
    rules.extend(keywords("display", DISPLAY));
    rules.extend(keywords("visibility", VISIBILITY));
    rules.extend(keywords("overflow", OVERFLOW));
    rules.extend(keywords("z-index", Z_INDEX));
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_per_side() {
        let rules = expand(&Tokens::new().offsets([1]));
        let text: Vec<_> = rules.iter().take(4).map(|r| r.render()).collect();
        assert_eq!(
            text,
            [
                ".top-1 {\n  top: calc(var(--row) * 1);\n}\n\n",
                ".bottom-1 {\n  bottom: calc(var(--row) * 1);\n}\n\n",
                ".left-1 {\n  left: calc(var(--col) * 1);\n}\n\n",
                ".right-1 {\n  right: calc(var(--col) * 1);\n}\n\n",
            ]
        );
    }

    #[test]
    fn test_keyword_families_are_flat() {
        let rules = expand(&Tokens::new());
        assert!(rules.iter().all(|r| r.selectors().len() == 1));
        assert!(rules.iter().all(|r| r.declarations().len() == 1));
        assert_eq!(
            rules.len(),
            POSITION.len() + DISPLAY.len() + VISIBILITY.len() + OVERFLOW.len() + Z_INDEX.len()
        );
    }

    #[test]
    fn test_hidden_maps_to_display_none() {
        let rules = expand(&Tokens::new());
        assert!(rules
            .iter()
            .any(|r| r.render() == ".hidden {\n  display: none;\n}\n\n"));
    }
}
