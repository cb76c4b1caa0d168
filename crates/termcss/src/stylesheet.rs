//! Stylesheet assembly.
//!
//! [`Stylesheet::generate`] runs every [`Family`] expander over a token
//! registry and keeps the results as per-family sections in [`Family::ALL`]
//! order. Rendering concatenates the sections' rules without touching them.

use serde::Serialize;
use tracing::debug;

use crate::css::Rule;
use crate::expand::Family;
use crate::tokens::Tokens;

/// The rules one family expanded to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub family: Family,
    pub rules: Vec<Rule>,
}

/// Rule and selector counts for one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FamilyStats {
    pub family: Family,
    pub rules: usize,
    pub selectors: usize,
}

/// A complete generated stylesheet.
///
/// # Example
///
/// ```rust
/// use termcss::{Stylesheet, Tokens};
///
/// let tokens = Tokens::new().color("red", "#fc5d7c");
/// let css = Stylesheet::generate(&tokens).render();
///
/// assert!(css.contains("--red: #fc5d7c;"));
/// assert!(css.contains(".text-red {\n  color: var(--red);\n}"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    sections: Vec<Section>,
}

impl Stylesheet {
    /// Expands every family from `tokens`.
    pub fn generate(tokens: &Tokens) -> Self {
        let sections = Family::ALL
            .into_iter()
            .map(|family| {
                let rules = family.expand(tokens);
                debug!(family = family.name(), rules = rules.len(), "expanded family");
                Section { family, rules }
            })
            .collect();
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The rules of one family, empty if it produced none.
    pub fn family(&self, family: Family) -> &[Rule] {
        self.sections
            .iter()
            .find(|section| section.family == family)
            .map(|section| section.rules.as_slice())
            .unwrap_or(&[])
    }

    /// Every rule, in output order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.sections.iter().flat_map(|section| section.rules.iter())
    }

    pub fn rule_count(&self) -> usize {
        self.sections.iter().map(|section| section.rules.len()).sum()
    }

    pub fn stats(&self) -> Vec<FamilyStats> {
        self.sections
            .iter()
            .map(|section| FamilyStats {
                family: section.family,
                rules: section.rules.len(),
                selectors: section.rules.iter().map(|r| r.selectors().len()).sum(),
            })
            .collect()
    }

    /// Renders the stylesheet text.
    pub fn render(&self) -> String {
        let mut css = String::new();
        for rule in self.rules() {
            css.push_str(&rule.render());
        }
        css
    }
}

/// Generates and renders the stylesheet for `tokens` in one step.
pub fn generate(tokens: &Tokens) -> String {
    Stylesheet::generate(tokens).render()
}
