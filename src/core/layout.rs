//! # Column Layout
//!
//! Turns terminal dimensions into per-column sizes. Each column gets a third
//! of the width. Its height is the terminal height minus a fixed allowance
//! for titles, help and decoration ("chrome").
//!
//! ```text
//!  ◀──────────────── terminal width ────────────────▶
//!  ┌──────────────┐┌──────────────┐┌──────────────┐  ▲
//!  │  outer box   ││              ││              │  │ height - chrome
//!  │ ┌──inner───┐ ││              ││              │  │
//!  │ └──────────┘ ││              ││              │  │
//!  └──────────────┘└──────────────┘└──────────────┘  ▼
//!   width / 3
//! ```
//!
//! The outer box includes a one-cell frame on every side; the list widget
//! receives the inner size.

/// Rows reserved for decoration below the column lists.
pub const DEFAULT_CHROME_HEIGHT: u16 = 20;

/// Number of columns sharing the terminal width.
pub const COLUMN_COUNT: u16 = 3;

/// Frame thickness drawn around every column, focused or not.
pub const FRAME_THICKNESS: u16 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

/// Sizes for a single column, shared by all three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    /// The whole column box, frame included.
    pub outer: Dimensions,
    /// What the list widget gets to draw into.
    pub inner: Dimensions,
}

impl ColumnLayout {
    /// Computes the column sizes for a terminal of `width` x `height`.
    pub fn compute(width: u16, height: u16, chrome_height: u16) -> Self {
        let outer = Dimensions {
            width: width / COLUMN_COUNT,
            height: height.saturating_sub(chrome_height),
        };
        let inner = Dimensions {
            width: outer.width.saturating_sub(2 * FRAME_THICKNESS),
            height: outer.height.saturating_sub(2 * FRAME_THICKNESS),
        };
        Self { outer, inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_split_in_thirds() {
        let layout = ColumnLayout::compute(120, 40, DEFAULT_CHROME_HEIGHT);
        assert_eq!(layout.outer.width, 40);
        assert_eq!(layout.inner.width, 38);
    }

    #[test]
    fn test_height_reserves_chrome() {
        let layout = ColumnLayout::compute(120, 40, DEFAULT_CHROME_HEIGHT);
        assert_eq!(layout.outer.height, 20);
        assert_eq!(layout.inner.height, 18);
    }

    #[test]
    fn test_width_rounds_down() {
        let layout = ColumnLayout::compute(100, 40, 0);
        assert_eq!(layout.outer.width, 33);
        assert_eq!(layout.outer.height, 40);
    }

    #[test]
    fn test_tiny_terminal_saturates_to_zero() {
        let layout = ColumnLayout::compute(2, 10, DEFAULT_CHROME_HEIGHT);
        assert_eq!(layout.outer, Dimensions { width: 0, height: 0 });
        assert_eq!(layout.inner, Dimensions { width: 0, height: 0 });
    }
}
