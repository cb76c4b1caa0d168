//! Type scale and text keyword utilities.

use super::{keywords, utility};
use crate::css::Rule;
use crate::tokens::{GridUnit, Tokens};

const WEIGHTS: &[(&str, &str)] = &[("font-normal", "normal"), ("font-bold", "bold")];

const STYLES: &[(&str, &str)] = &[("italic", "italic"), ("not-italic", "normal")];

const CASES: &[(&str, &str)] = &[
    ("uppercase", "uppercase"),
    ("lowercase", "lowercase"),
    ("capitalize", "capitalize"),
    ("normal-case", "none"),
];

const WHITESPACE: &[(&str, &str)] = &[
    ("whitespace-normal", "normal"),
    ("whitespace-nowrap", "nowrap"),
    ("whitespace-pre", "pre"),
    ("whitespace-pre-wrap", "pre-wrap"),
];

const DECORATION: &[(&str, &str)] = &[("underline", "underline"), ("no-underline", "none")];

pub(super) fn expand(tokens: &Tokens) -> Vec<Rule> {
    let mut rules: Vec<Rule> = tokens.type_steps().iter().map(|&step| text_size(step)).collect();

    rules.extend(keywords("font-weight", WEIGHTS));
    rules.extend(keywords("font-style", STYLES));
    rules.extend(keywords("text-transform", CASES));
    rules.extend(keywords("white-space", WHITESPACE));
    rules.extend(keywords("text-decoration", DECORATION));
    rules
}

/// Font size as a multiple of the base size. Line height rounds up to whole
/// rows so text never breaks the vertical grid.
fn text_size(step: f64) -> Rule {
    let rows = step.ceil() as i32;
    utility(
        &format!("text-{}", step),
        "font-size",
        format!("calc(var(--base-size) * {})", step),
    )
    .declare("line-height", GridUnit::Row.times(rows))
}
