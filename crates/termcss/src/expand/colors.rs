//! Text and background color classes, two per palette entry.

use super::utility;
use crate::css::Rule;
use crate::tokens::Tokens;

pub(super) fn expand(tokens: &Tokens) -> Vec<Rule> {
    tokens
        .palette()
        .iter()
        .flat_map(|entry| {
            [
                utility(&format!("text-{}", entry.name), "color", entry.var()),
                utility(&format!("bg-{}", entry.name), "background-color", entry.var()),
            ]
        })
        .collect()
}
