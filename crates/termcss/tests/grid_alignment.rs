//! Bordered sides must still consume exactly one grid cell.

mod support;

use proptest::prelude::*;
use support::{eval_calc, rules_with, value_of};
use termcss::tokens::{BorderTokens, GridUnit, Side};
use termcss::{Family, Stylesheet, Tokens};

fn border_rules(width_px: u32) -> Vec<termcss::css::Rule> {
    let tokens = Tokens::builtin().border_tokens(BorderTokens {
        width_px,
        ..BorderTokens::default()
    });
    Family::Borders.expand(&tokens)
}

#[test]
fn test_half_value_for_builtin_stroke() {
    let rules = border_rules(2);
    let stroke = rules_with(&rules, ".border-t")[0];
    assert_eq!(
        value_of(stroke, "margin-top"),
        Some("calc((var(--row) - 2px) / 2)")
    );
    assert_eq!(value_of(stroke, "margin-top"), value_of(stroke, "padding-top"));
    assert_eq!(value_of(stroke, "border-top"), Some("2px solid var(--grey)"));
}

#[test]
fn test_zero_variant_clears_all_three() {
    let rules = border_rules(2);
    for side in Side::ALL {
        let class = format!(".border-{}-0", side.key());
        let zero = rules_with(&rules, &class);
        assert_eq!(zero.len(), 1);
        for property in ["border", "margin", "padding"] {
            assert_eq!(
                value_of(zero[0], &format!("{}-{}", property, side.name())),
                Some("0")
            );
        }
    }
}

#[test]
fn test_color_and_style_overrides_skip_compensation() {
    let rules = border_rules(2);
    for rule in rules_with(&rules, ".border-red")
        .into_iter()
        .chain(rules_with(&rules, ".border-dashed"))
    {
        for decl in rule.declarations() {
            assert!(
                decl.property().ends_with("-color") || decl.property().ends_with("-style"),
                "unexpected {}",
                decl
            );
        }
    }
}

#[test]
fn test_radius_side_classes_share_corner_rules() {
    let rules = border_rules(2);
    let top = rules_with(&rules, ".round-t");
    let corners: Vec<_> = top
        .iter()
        .flat_map(|r| r.declarations().iter().map(|d| d.property()))
        .collect();
    assert_eq!(
        corners,
        ["border-top-left-radius", "border-top-right-radius"]
    );
    for rule in top {
        assert!(rule.selectors().iter().any(|s| s == ".round"));
    }
    assert_eq!(rules_with(&rules, ".square").len(), 4);
}

proptest! {
    #[test]
    fn stroke_margin_padding_fill_one_cell(
        width_px in 1u32..16,
        col in 4.0f64..32.0,
        row in 8.0f64..48.0,
    ) {
        let rules = border_rules(width_px);
        for side in Side::ALL {
            let class = format!(".border-{}", side.key());
            let stroke = rules_with(&rules, &class);
            prop_assert_eq!(stroke.len(), 1);

            let margin = value_of(stroke[0], &format!("margin-{}", side.name())).unwrap();
            let padding = value_of(stroke[0], &format!("padding-{}", side.name())).unwrap();
            let cell = if side.unit() == GridUnit::Col { col } else { row };

            let total = eval_calc(margin, col, row) + width_px as f64 + eval_calc(padding, col, row);
            prop_assert!((total - cell).abs() < 1e-9, "{} != {}", total, cell);
        }
    }

    #[test]
    fn merge_offset_cancels_half_cell_and_stroke(
        width_px in 1u32..16,
        row in 8.0f64..48.0,
    ) {
        let rules = border_rules(width_px);
        let merge = rules_with(&rules, ".border-merge-t")[0];
        let offset = eval_calc(value_of(merge, "margin-top").unwrap(), 8.0, row);
        prop_assert!((2.0 * offset + row + width_px as f64).abs() < 1e-9);
    }
}

#[test]
fn test_builtin_sheet_keeps_additive_box_model() {
    let sheet = Stylesheet::generate(&Tokens::builtin());
    let reset = sheet.family(Family::Foundation)[0].clone();
    assert_eq!(value_of(&reset, "box-sizing"), Some("content-box"));
}
