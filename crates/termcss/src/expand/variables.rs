//! Custom properties on the root element.

use crate::css::Rule;
use crate::tokens::{GridUnit, Tokens};

pub(super) fn expand(tokens: &Tokens) -> Vec<Rule> {
    let palette = Rule::new("html").declare_all(
        tokens
            .palette()
            .iter()
            .map(|entry| (entry.property(), entry.value.clone())),
    );

    let grid = tokens.grid_definition();
    let mut units = Rule::new("html").declare("--base-size", grid.base_size.as_str());
    for unit in GridUnit::ALL {
        units = units.declare(format!("--{}", unit.name()), grid.definition(unit));
    }

    let base = Rule::new("html")
        .declare("font-size", "var(--base-size)")
        .declare("line-height", GridUnit::Row.var());

    vec![palette, units, base]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_properties() {
        let tokens = Tokens::new().color("red", "#fc5d7c").color("fg", "#e2e2e3");
        let rules = expand(&tokens);
        assert_eq!(
            rules[0].render(),
            "html {\n  --red: #fc5d7c;\n  --fg: #e2e2e3;\n}\n\n"
        );
    }

    #[test]
    fn test_grid_properties() {
        let rules = expand(&Tokens::new());
        assert_eq!(
            rules[1].render(),
            "html {\n  --base-size: 13px;\n  --col: 1rch;\n  --row: 1rlh;\n}\n\n"
        );
        assert_eq!(
            rules[2].block(),
            "font-size: var(--base-size);\n  line-height: var(--row);"
        );
    }
}
