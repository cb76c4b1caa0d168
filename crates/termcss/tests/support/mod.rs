//! Shared helpers for integration tests.

#![allow(dead_code)]

use termcss::css::Rule;

/// Every rule that lists `selector`.
pub fn rules_with<'a>(rules: &'a [Rule], selector: &str) -> Vec<&'a Rule> {
    rules
        .iter()
        .filter(|rule| rule.selectors().iter().any(|s| s == selector))
        .collect()
}

/// The value of `property` in `rule`, if declared.
pub fn value_of<'a>(rule: &'a Rule, property: &str) -> Option<&'a str> {
    rule.declarations()
        .iter()
        .find(|d| d.property() == property)
        .map(|d| d.value())
}

/// Evaluates the `calc()` subset the generator emits, with `var(--col)` and
/// `var(--row)` bound to pixel values. Lengths are read as pixels.
pub fn eval_calc(expr: &str, col: f64, row: f64) -> f64 {
    let substituted = expr
        .replace("var(--col)", &format!("({})", col))
        .replace("var(--row)", &format!("({})", row))
        .replace("calc", "")
        .replace("px", "");
    let tokens: Vec<char> = substituted.chars().filter(|c| !c.is_whitespace()).collect();
    let mut parser = Calc { tokens, pos: 0 };
    let value = parser.sum();
    assert_eq!(parser.pos, parser.tokens.len(), "trailing input in {:?}", expr);
    value
}

struct Calc {
    tokens: Vec<char>,
    pos: usize,
}

impl Calc {
    fn peek(&self) -> Option<char> {
        self.tokens.get(self.pos).copied()
    }

    fn sum(&mut self) -> f64 {
        let mut value = self.product();
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.pos += 1;
            let rhs = self.product();
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        value
    }

    fn product(&mut self) -> f64 {
        let mut value = self.atom();
        while let Some(op @ ('*' | '/')) = self.peek() {
            self.pos += 1;
            let rhs = self.atom();
            value = if op == '*' { value * rhs } else { value / rhs };
        }
        value
    }

    fn atom(&mut self) -> f64 {
        match self.peek() {
            Some('(') => {
                self.pos += 1;
                let value = self.sum();
                assert_eq!(self.peek(), Some(')'));
                self.pos += 1;
                value
            }
            Some('-') => {
                self.pos += 1;
                -self.atom()
            }
            _ => {
                let start = self.pos;
                while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
                    self.pos += 1;
                }
                let text: String = self.tokens[start..self.pos].iter().collect();
                text.parse()
                    .unwrap_or_else(|_| panic!("expected number at {}", start))
            }
        }
    }
}

#[test]
fn test_eval_calc_subset() {
    assert_eq!(eval_calc("calc(var(--row) * 2)", 8.0, 16.0), 32.0);
    assert_eq!(eval_calc("calc((var(--col) - 2px) / 2)", 8.0, 16.0), 3.0);
    assert_eq!(eval_calc("calc((var(--row) + 2px) / -2)", 8.0, 16.0), -9.0);
    assert_eq!(eval_calc("calc(var(--col) * -1)", 8.0, 16.0), -8.0);
    assert_eq!(eval_calc("0", 8.0, 16.0), 0.0);
}
