use serde::Serialize;

/// Integer size measured in figure character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Rectangle anchored at its top-left `+` within a figure.
///
/// `width` and `height` include the border, so the smallest rectangle a
/// figure can hold is 2×2 (four corners, no interior).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from its bottom-right corner and border-inclusive size.
    pub fn from_bottom_right(row: usize, col: usize, size: Size) -> Self {
        Self::new(
            (col + 1).saturating_sub(size.width),
            (row + 1).saturating_sub(size.height),
            size.width,
            size.height,
        )
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Column one past the right border.
    pub fn right(&self) -> usize {
        self.x.saturating_add(self.width)
    }

    /// Row one past the bottom border.
    pub fn bottom(&self) -> usize {
        self.y.saturating_add(self.height)
    }

    pub fn interior_width(&self) -> usize {
        self.width.saturating_sub(2)
    }

    pub fn interior_height(&self) -> usize {
        self.height.saturating_sub(2)
    }

    /// Number of space cells enclosed by the border.
    pub fn interior_area(&self) -> usize {
        self.interior_width() * self.interior_height()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.y && row < self.bottom() && col >= self.x && col < self.right()
    }

    /// Whether `(row, col)` lies on this rectangle's border.
    pub fn on_border(&self, row: usize, col: usize) -> bool {
        self.contains(row, col)
            && (row == self.y || row + 1 == self.bottom() || col == self.x || col + 1 == self.right())
    }
}
