//! # termcss - grid-aligned atomic CSS
//!
//! `termcss` expands a small registry of design tokens into a complete
//! utility stylesheet for pages laid out like a terminal: every box measures
//! whole monospace columns and whole lines.
//!
//! ## Quick Start
//!
//! ```rust
//! use termcss::{Stylesheet, Tokens};
//!
//! let sheet = Stylesheet::generate(&Tokens::builtin());
//! let css = sheet.render();
//!
//! assert!(css.contains(".pt-2, .py-2, .p-2 {\n  padding-top: calc(var(--row) * 2);\n}"));
//! ```
//!
//! ## Concepts
//!
//! - [`Tokens`]: Palette, grid units, scales and border settings
//! - [`Family`]: A group of utilities expanded by one pure function
//! - [`Stylesheet`]: Every family's rules, in a fixed order
//! - [`css::Rule`], [`css::Declaration`]: The rendered text primitives
//!
//! ## The Grid
//!
//! Lengths are written as `calc(var(--col) * n)` or `calc(var(--row) * n)`.
//! The only raw length is the border stroke, and bordered sides absorb it
//! with half-cell margin and padding so they still occupy one full cell.
//!
//! ## Determinism
//!
//! Every token collection and taxonomy is an ordered list, so generating
//! from the same registry twice gives byte-identical output.

pub mod css;
pub mod expand;
pub mod stylesheet;
pub mod tokens;

pub use expand::{Family, SpacingKind};
pub use stylesheet::{generate, FamilyStats, Section, Stylesheet};
pub use tokens::{TokenError, Tokens};
