//! Integer window geometry
//!
//! Two coordinate models meet at the peer boundary. The framework side uses a
//! half-open pixel model where a rectangle carries its width and height
//! directly. The toolkit side uses inclusive frames where a window spanning
//! pixels 0..=99 has `left = 0`, `right = 99` and an integer span of 99.
//! Every crossing applies the span + 1 conversion exactly once.

/// Top-left point of a window, framework coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    /// Horizontal position in pixels
    pub x: i32,
    /// Vertical position in pixels
    pub y: i32,
}

impl Point {
    /// Create a new point
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Framework-side rectangle: position plus half-open width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rectangle {
    /// Left edge in pixels
    pub x: i32,
    /// Top edge in pixels
    pub y: i32,
    /// Width in pixels (inclusive span + 1)
    pub width: i32,
    /// Height in pixels (inclusive span + 1)
    pub height: i32,
}

impl Rectangle {
    /// The zero rectangle, returned for reads on a dead window
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a new rectangle
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner of the rectangle
    #[must_use]
    pub const fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Convert back to the toolkit's inclusive frame model
    #[must_use]
    pub const fn to_frame(self) -> ToolkitFrame {
        ToolkitFrame {
            left: self.x,
            top: self.y,
            right: self.x + self.width - 1,
            bottom: self.y + self.height - 1,
        }
    }
}

/// Toolkit-side frame with inclusive edge coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolkitFrame {
    /// Left edge in pixels
    pub left: i32,
    /// Top edge in pixels
    pub top: i32,
    /// Right edge in pixels, inclusive
    pub right: i32,
    /// Bottom edge in pixels, inclusive
    pub bottom: i32,
}

impl ToolkitFrame {
    /// Create a new frame from inclusive edges
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal integer span (`right - left`); one less than the width
    #[must_use]
    pub const fn integer_width(&self) -> i32 {
        self.right - self.left
    }

    /// Vertical integer span (`bottom - top`); one less than the height
    #[must_use]
    pub const fn integer_height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Convert to the framework's half-open rectangle model
    #[must_use]
    pub const fn to_rectangle(self) -> Rectangle {
        Rectangle::new(
            self.left,
            self.top,
            self.integer_width() + 1,
            self.integer_height() + 1,
        )
    }
}
