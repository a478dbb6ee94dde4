//! Screen geometry used to place windows relative to the tray icon.

use serde::{Deserialize, Serialize};

/// A screen rectangle, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Top-left corner of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Place a window of `window_width` so its right edge lines up with the
/// anchor's right edge and its top edge touches the anchor's bottom edge.
///
/// Off-screen results are not clamped.
pub fn position_below_anchor(anchor: Bounds, window_width: u32) -> Position {
    let right = i64::from(anchor.x) + i64::from(anchor.width);
    let bottom = i64::from(anchor.y) + i64::from(anchor.height);

    Position {
        x: saturate(right - i64::from(window_width)),
        y: saturate(bottom),
    }
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
