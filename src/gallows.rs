//! ASCII drawings of the gallows, one per illustration.
//!
//! Frames 0-5 add one body part per incorrect guess, frame 6 is the
//! finished figure shown on a loss and frame 7 is the free figure shown
//! on a win. All frames have the same height and width so the layout
//! never jumps between guesses.

use crate::types::Illustration;

/// Rows in every frame.
pub const FRAME_HEIGHT: usize = 7;

/// Columns in every frame.
pub const FRAME_WIDTH: usize = 11;

const FRAMES: [[&str; FRAME_HEIGHT]; 8] = [
    [
        "  +-----+  ",
        "  |     |  ",
        "        |  ",
        "        |  ",
        "        |  ",
        "        |  ",
        "  =======  ",
    ],
    [
        "  +-----+  ",
        "  |     |  ",
        "  O     |  ",
        "        |  ",
        "        |  ",
        "        |  ",
        "  =======  ",
    ],
    [
        "  +-----+  ",
        "  |     |  ",
        "  O     |  ",
        "  |     |  ",
        "        |  ",
        "        |  ",
        "  =======  ",
    ],
    [
        "  +-----+  ",
        "  |     |  ",
        "  O     |  ",
        " /|     |  ",
        "        |  ",
        "        |  ",
        "  =======  ",
    ],
    [
        "  +-----+  ",
        "  |     |  ",
        "  O     |  ",
        " /|\\    |  ",
        "        |  ",
        "        |  ",
        "  =======  ",
    ],
    [
        "  +-----+  ",
        "  |     |  ",
        "  O     |  ",
        " /|\\    |  ",
        " /      |  ",
        "        |  ",
        "  =======  ",
    ],
    [
        "  +-----+  ",
        "  |     |  ",
        "  X     |  ",
        " /|\\    |  ",
        " / \\    |  ",
        "        |  ",
        "  =======  ",
    ],
    [
        "  +-----+  ",
        "  |     |  ",
        "        |  ",
        "  \\O/   |  ",
        "   |    |  ",
        "  / \\   |  ",
        "  =======  ",
    ],
];

/// The rows of the drawing for an illustration.
pub fn frame(illustration: Illustration) -> &'static [&'static str; FRAME_HEIGHT] {
    &FRAMES[illustration.asset_index()]
}

// ============================================================================
// TESTS
// ============================================================================
