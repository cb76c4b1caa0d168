//! Border utilities that keep elements on the grid.
//!
//! A stroke class sets the border on a side and splits the rest of one grid
//! cell evenly between margin and padding:
//!
//! ```text
//! margin (R - w) / 2  +  border w  +  padding (R - w) / 2  =  R
//! ```
//!
//! so a bordered side always consumes exactly one column or row. Color and
//! style overrides only touch `border-*-color` and `border-*-style` and
//! leave that balance alone.
//!
//! `border-merge` pulls a side back by half a cell plus half a stroke, making
//! two bordered neighbours share one visible line. It only stays on the grid
//! when paired with a stroke class on the same side.

use super::side_selectors;
use crate::css::{class, Rule};
use crate::tokens::{BorderTokens, Corner, PaletteEntry, RadiusPreset, Side, Tokens};

pub(super) fn expand(tokens: &Tokens) -> Vec<Rule> {
    let border = tokens.border();
    let mut rules = Vec::new();

    for side in Side::ALL {
        rules.push(stroke(border, side));
        rules.push(zero(side));
    }

    for style in &border.styles {
        for side in Side::ALL {
            rules.push(line_style(style, side));
        }
    }

    for entry in tokens.palette() {
        for side in Side::ALL {
            rules.push(color(entry, side));
        }
    }

    for preset in &border.radii {
        for corner in Corner::ALL {
            rules.push(radius(preset, corner));
        }
    }

    for side in Side::ALL {
        rules.push(merge(border, side));
    }

    rules
}

/// `border`, `border-{axis}` or `border-{side}` followed by `suffix`.
fn border_class(key: Option<&str>, suffix: &str) -> String {
    match key {
        Some(key) => format!("border-{}{}", key, suffix),
        None => format!("border{}", suffix),
    }
}

pub(crate) fn stroke(border: &BorderTokens, side: Side) -> Rule {
    let half = border.half(side.unit());
    Rule::with_selectors(side_selectors(side, |key| border_class(key, "")))
        .declare(
            format!("border-{}", side.name()),
            format!("{} solid {}", border.width(), border.color),
        )
        .declare(format!("margin-{}", side.name()), half.clone())
        .declare(format!("padding-{}", side.name()), half)
}

fn zero(side: Side) -> Rule {
    Rule::with_selectors(side_selectors(side, |key| border_class(key, "-0")))
        .declare(format!("border-{}", side.name()), "0")
        .declare(format!("margin-{}", side.name()), "0")
        .declare(format!("padding-{}", side.name()), "0")
}

fn line_style(style: &str, side: Side) -> Rule {
    let suffix = format!("-{}", style);
    Rule::with_selectors(side_selectors(side, |key| border_class(key, &suffix)))
        .declare(format!("border-{}-style", side.name()), style)
}

fn color(entry: &PaletteEntry, side: Side) -> Rule {
    let suffix = format!("-{}", entry.name);
    Rule::with_selectors(side_selectors(side, |key| border_class(key, &suffix)))
        .declare(format!("border-{}-color", side.name()), entry.var())
}

/// One corner of a radius preset. The corner class shares its rule with the
/// two side classes forming the corner and the preset's omni class, so a side
/// class never competes with a corner class of the same preset.
pub(crate) fn radius(preset: &RadiusPreset, corner: Corner) -> Rule {
    let [vertical, horizontal] = corner.sides();
    Rule::with_selectors([
        class(&format!("{}-{}", preset.name, corner.key())),
        class(&format!("{}-{}", preset.name, vertical.key())),
        class(&format!("{}-{}", preset.name, horizontal.key())),
        class(&preset.name),
    ])
    .declare(format!("border-{}-radius", corner.name()), preset.value.as_str())
}

fn merge(border: &BorderTokens, side: Side) -> Rule {
    Rule::with_selectors(side_selectors(side, |key| match key {
        Some(key) => format!("border-merge-{}", key),
        None => "border-merge".to_string(),
    }))
    .declare(
        format!("margin-{}", side.name()),
        border.merge_offset(side.unit()),
    )
}
