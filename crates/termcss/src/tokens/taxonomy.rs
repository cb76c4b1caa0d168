//! Grid units and the side, axis and corner taxonomies.

use std::fmt;

/// One cell of the layout grid.
///
/// Columns are one monospace character wide, rows one line tall. All spacing,
/// sizing and offsets are whole multiples of one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridUnit {
    Col,
    Row,
}

impl GridUnit {
    pub const ALL: [GridUnit; 2] = [GridUnit::Col, GridUnit::Row];

    /// Custom property name, without the leading dashes.
    pub fn name(self) -> &'static str {
        match self {
            GridUnit::Col => "col",
            GridUnit::Row => "row",
        }
    }

    /// The `var(--…)` reference for this unit.
    pub fn var(self) -> &'static str {
        match self {
            GridUnit::Col => "var(--col)",
            GridUnit::Row => "var(--row)",
        }
    }

    /// `count` cells of this unit as a `calc()` expression.
    ///
    /// # Example
    ///
    /// ```rust
    /// use termcss::tokens::GridUnit;
    ///
    /// assert_eq!(GridUnit::Row.times(2), "calc(var(--row) * 2)");
    /// assert_eq!(GridUnit::Col.times(-1), "calc(var(--col) * -1)");
    /// ```
    pub fn times(self, count: i32) -> String {
        format!("calc({} * {})", self.var(), count)
    }
}

impl fmt::Display for GridUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Horizontal (`x`) or vertical (`y`) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    pub fn key(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }

    /// The grid unit lengths along this axis scale with.
    pub fn unit(self) -> GridUnit {
        match self {
            Axis::X => GridUnit::Col,
            Axis::Y => GridUnit::Row,
        }
    }
}

/// One side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Sides in emission order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// Short key used in class names (`t`, `b`, `l`, `r`).
    pub fn key(self) -> &'static str {
        match self {
            Side::Top => "t",
            Side::Bottom => "b",
            Side::Left => "l",
            Side::Right => "r",
        }
    }

    /// CSS property suffix (`top`, `bottom`, `left`, `right`).
    pub fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Side::Top | Side::Bottom => Axis::Y,
            Side::Left | Side::Right => Axis::X,
        }
    }

    /// Shorthand for `self.axis().unit()`.
    pub fn unit(self) -> GridUnit {
        self.axis().unit()
    }
}

/// One corner of a box, composed of a vertical and a horizontal side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Corners in emission order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Corner::TopLeft => "tl",
            Corner::TopRight => "tr",
            Corner::BottomLeft => "bl",
            Corner::BottomRight => "br",
        }
    }

    /// Property infix, as in `border-top-left-radius`.
    pub fn name(self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }

    /// The two sides meeting at this corner, vertical side first.
    pub fn sides(self) -> [Side; 2] {
        match self {
            Corner::TopLeft => [Side::Top, Side::Left],
            Corner::TopRight => [Side::Top, Side::Right],
            Corner::BottomLeft => [Side::Bottom, Side::Left],
            Corner::BottomRight => [Side::Bottom, Side::Right],
        }
    }
}
