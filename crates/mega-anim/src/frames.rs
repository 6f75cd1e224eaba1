//! Emitted walk-frame records.

use mega_core::Direction;

/// Reserved frame id meaning "no more frames".  Real frame ids are always
/// below this; the renderer stops on the first sentinel it sees, and the
/// emitted stream always carries three of them.
pub const END_FRAME: u16 = 512;

/// Fixed capacity of the emitted frame buffer.  Overflow is a hard,
/// caller-visible error, never a silent truncation.
pub const FRAME_CAPACITY: usize = 600;

/// One animation instruction for the external renderer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkFrame {
    /// Sprite-sheet frame id, or [`END_FRAME`].
    pub frame: u16,
    /// Facing this frame represents.
    pub dir: Direction,
    /// Position within the walk cycle (0 for stand/turn frames).
    pub step: u16,
    /// Absolute screen position when this frame is shown.
    pub x: i32,
    pub y: i32,
}

impl WalkFrame {
    /// `true` for the end-of-route sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.frame == END_FRAME
    }
}
