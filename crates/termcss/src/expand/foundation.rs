//! Element resets the utilities rely on.
//!
//! Border compensation adds margin, border and padding together to one grid
//! cell, so the universal rule must keep the additive `content-box` model.

use crate::css::Rule;
use crate::tokens::{GridUnit, Tokens};

/// Maximum body width, in columns.
const BODY_COLUMNS: i32 = 90;

pub(super) fn expand(_tokens: &Tokens) -> Vec<Rule> {
    vec![
        Rule::new("*, *::before, *::after")
            .declare("padding", "0")
            .declare("margin", "0")
            .declare("font-family", "inherit")
            .declare("box-sizing", "content-box"),
        Rule::new("body")
            .declare("font-family", "\"Monaco Nerd Font\"")
            .declare("background-color", "var(--bg-dim)")
            .declare("color", "var(--fg)")
            .declare("max-width", GridUnit::Col.times(BODY_COLUMNS)),
        Rule::new("ul")
            .declare("list-style", "none")
            .declare("padding-left", GridUnit::Col.times(2))
            .declare("margin", "0"),
        Rule::new("li").declare("position", "relative"),
        Rule::new("li:before")
            .declare("content", "\"*\"")
            .declare("position", "absolute")
            .declare("left", GridUnit::Col.times(-2))
            .declare("color", "var(--grey)"),
    ]
}
