//! Padding and margin utilities.
//!
//! Every magnitude on a kind's scale yields one rule per side. Each rule
//! carries the side, axis and omni class for that magnitude, so `pt-2`,
//! `py-2` and `p-2` all resolve to `padding-top: calc(var(--row) * 2)` and the
//! axis and omni classes collect the remaining sides from sibling rules.

use super::{side_selectors, utility};
use crate::css::Rule;
use crate::tokens::{Side, Tokens};

/// The box-model property a spacing class sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingKind {
    Padding,
    Margin,
}

impl SpacingKind {
    /// Kinds in emission order.
    pub const ALL: [SpacingKind; 2] = [SpacingKind::Padding, SpacingKind::Margin];

    /// Class prefix, `p` or `m`.
    pub fn key(self) -> &'static str {
        match self {
            SpacingKind::Padding => "p",
            SpacingKind::Margin => "m",
        }
    }

    pub fn property(self) -> &'static str {
        match self {
            SpacingKind::Padding => "padding",
            SpacingKind::Margin => "margin",
        }
    }

    /// The magnitudes this kind is expanded over.
    pub fn scale(self, tokens: &Tokens) -> &[i32] {
        match self {
            SpacingKind::Padding => tokens.padding_scale(),
            SpacingKind::Margin => tokens.margin_scale(),
        }
    }
}

pub(super) fn expand(tokens: &Tokens) -> Vec<Rule> {
    let mut rules = Vec::new();
    for kind in SpacingKind::ALL {
        for &magnitude in kind.scale(tokens) {
            for side in Side::ALL {
                rules.push(side_rule(kind, magnitude, side));
            }
        }
    }

    rules.push(utility("m-auto", "margin", "auto"));
    rules.push(utility("mx-auto", "margin-inline", "auto"));
    rules.push(utility("my-auto", "margin-block", "auto"));
    rules
}

/// The merged rule for one kind, magnitude and side.
pub(crate) fn side_rule(kind: SpacingKind, magnitude: i32, side: Side) -> Rule {
    let sign = if magnitude < 0 { "-" } else { "" };
    let n = magnitude.unsigned_abs();

    let selectors = side_selectors(side, |key| {
        format!("{}{}{}-{}", sign, kind.key(), key.unwrap_or(""), n)
    });

    Rule::with_selectors(selectors).declare(
        format!("{}-{}", kind.property(), side.name()),
        side.unit().times(magnitude),
    )
}
