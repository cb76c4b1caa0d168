//! Flexbox helpers and grid-aligned gaps.

use super::{keywords, utility};
use crate::css::Rule;
use crate::tokens::{GridUnit, Tokens};

const ALIGN_ITEMS: &[(&str, &str)] = &[
    ("items-start", "flex-start"),
    ("items-center", "center"),
    ("items-end", "flex-end"),
    ("items-stretch", "stretch"),
];

const JUSTIFY_CONTENT: &[(&str, &str)] = &[
    ("justify-start", "flex-start"),
    ("justify-center", "center"),
    ("justify-end", "flex-end"),
    ("justify-between", "space-between"),
];

pub(super) fn expand(tokens: &Tokens) -> Vec<Rule> {
    let mut rules = vec![
        utility("flex-row", "display", "flex").declare("flex-direction", "row"),
        utility("flex-col", "display", "flex").declare("flex-direction", "column"),
        utility("grow", "flex-grow", "1"),
        utility("shrink-0", "flex-shrink", "0"),
        utility("flex-wrap", "flex-wrap", "wrap"),
    ];
    rules.extend(keywords("align-items", ALIGN_ITEMS));
    rules.extend(keywords("justify-content", JUSTIFY_CONTENT));

    // Gaps reuse the padding steps: a gap is spacing between children.
    for &n in tokens.padding_scale() {
        rules.push(
            utility(&format!("gap-{}", n), "row-gap", GridUnit::Row.times(n))
                .declare("column-gap", GridUnit::Col.times(n)),
        );
        rules.push(utility(
            &format!("gap-x-{}", n),
            "column-gap",
            GridUnit::Col.times(n),
        ));
        rules.push(utility(
            &format!("gap-y-{}", n),
            "row-gap",
            GridUnit::Row.times(n),
        ));
    }

    rules
}
