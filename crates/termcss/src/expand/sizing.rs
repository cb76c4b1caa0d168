//! Width and height utilities.

use super::{keywords, utility};
use crate::css::Rule;
use crate::tokens::{GridUnit, Tokens};

/// Constraint prefixes, applied to both the class and the property.
const PREFIXES: [&str; 3] = ["", "min-", "max-"];

/// Class key, property and grid unit for each dimension.
const DIMENSIONS: [(&str, &str, GridUnit); 2] = [
    ("w", "width", GridUnit::Col),
    ("h", "height", GridUnit::Row),
];

const KEYWORD_WIDTHS: &[(&str, &str)] = &[
    ("w-full", "100%"),
    ("w-auto", "auto"),
    ("w-screen", "100vw"),
];

const KEYWORD_HEIGHTS: &[(&str, &str)] = &[
    ("h-full", "100%"),
    ("h-auto", "auto"),
    ("h-screen", "100vh"),
];

pub(super) fn expand(tokens: &Tokens) -> Vec<Rule> {
    let mut rules = Vec::new();
    for prefix in PREFIXES {
        for (key, property, unit) in DIMENSIONS {
            for &n in tokens.size_scale() {
                rules.push(utility(
                    &format!("{}{}-{}", prefix, key, n),
                    &format!("{}{}", prefix, property),
                    unit.times(n),
                ));
            }
        }
    }

    rules.extend(keywords("width", KEYWORD_WIDTHS));
    rules.extend(keywords("height", KEYWORD_HEIGHTS));
    rules
}
