//! Per-family rule expanders.
//!
//! Each utility family is a pure function from the token registry to an
//! ordered list of [`Rule`]s. The [`Family`] enum names them and fixes the
//! order the stylesheet concatenates them in.
//!
//! # Selector merging
//!
//! Classes that must apply identical declarations never get separate rules.
//! For side-based families the side class (`pt-2`), the axis class (`py-2`)
//! and the omni class (`p-2`) all land in one selector list, and every side
//! contributes its own rule to the shared axis and omni classes. Corner radii
//! merge the same way with the two sides that form the corner.

mod borders;
mod colors;
mod foundation;
mod layout;
mod positioning;
mod sizing;
mod spacing;
mod typography;
mod variables;

use serde::Serialize;
use std::fmt;

use crate::css::{class, Rule};
use crate::tokens::{Side, Tokens};

pub use spacing::SpacingKind;

/// A group of related utilities, expanded independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Variables,
    Foundation,
    Typography,
    Colors,
    Layout,
    Spacing,
    Borders,
    Sizing,
    Positioning,
}

impl Family {
    /// Every family, in stylesheet order.
    pub const ALL: [Family; 9] = [
        Family::Variables,
        Family::Foundation,
        Family::Typography,
        Family::Colors,
        Family::Layout,
        Family::Spacing,
        Family::Borders,
        Family::Sizing,
        Family::Positioning,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Family::Variables => "variables",
            Family::Foundation => "foundation",
            Family::Typography => "typography",
            Family::Colors => "colors",
            Family::Layout => "layout",
            Family::Spacing => "spacing",
            Family::Borders => "borders",
            Family::Sizing => "sizing",
            Family::Positioning => "positioning",
        }
    }

    /// Expands this family's rules from `tokens`.
    pub fn expand(self, tokens: &Tokens) -> Vec<Rule> {
        match self {
            Family::Variables => variables::expand(tokens),
            Family::Foundation => foundation::expand(tokens),
            Family::Typography => typography::expand(tokens),
            Family::Colors => colors::expand(tokens),
            Family::Layout => layout::expand(tokens),
            Family::Spacing => spacing::expand(tokens),
            Family::Borders => borders::expand(tokens),
            Family::Sizing => sizing::expand(tokens),
            Family::Positioning => positioning::expand(tokens),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Class selectors for a side, its axis, and all sides, in that order.
///
/// `name` receives the side or axis key, or `None` for the omni class, and
/// returns the bare class name.
pub(crate) fn side_selectors(side: Side, name: impl Fn(Option<&str>) -> String) -> Vec<String> {
    vec![
        class(&name(Some(side.key()))),
        class(&name(Some(side.axis().key()))),
        class(&name(None)),
    ]
}

/// A single-declaration rule for one class.
pub(crate) fn utility(name: &str, property: &str, value: impl Into<String>) -> Rule {
    Rule::new(class(name)).declare(property, value)
}

/// One single-declaration rule per `(class, value)` pair, all setting
/// `property`.
pub(crate) fn keywords(property: &str, entries: &[(&str, &str)]) -> Vec<Rule> {
    entries
        .iter()
        .map(|(name, value)| utility(name, property, *value))
        .collect()
}
