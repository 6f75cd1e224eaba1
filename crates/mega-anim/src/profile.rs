//! Per-character animation quirks.
//!
//! The legacy system keyed extra frames off hardcoded character ids deep
//! inside the animator.  Here every quirk is data in a `CharProfile`
//! looked up once per request, so the state machine itself stays free of
//! character-identity branches.

use rustc_hash::FxHashMap;

use mega_core::{CharId, Direction};

/// Table-driven animation overrides for one character.
///
/// The default profile has no quirks and is what unknown characters get.
#[derive(Clone, Debug, Default)]
pub struct CharProfile {
    /// Extra head-turn frame emitted before the initial turn ramp.
    pub head_turn_frame: Option<u16>,

    /// Frame-id shift applied to the last step's frames when the route
    /// turns left (counter-clockwise) by 45° or 90° between legs.
    pub walking_turn_left: Option<u16>,

    /// Same for clockwise turns.
    pub walking_turn_right: Option<u16>,

    /// Scripted slow-in frame bursts, keyed on the entry direction of the
    /// first walking leg.
    pub slow_in: FxHashMap<Direction, Vec<u16>>,

    /// Scripted slow-out frame bursts, keyed on the exit facing.
    pub slow_out: FxHashMap<Direction, Vec<u16>>,
}

/// All known character profiles, with a shared no-quirk default.
#[derive(Default)]
pub struct ProfileRegistry {
    map: FxHashMap<CharId, CharProfile>,
    default: CharProfile,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: CharId, profile: CharProfile) {
        self.map.insert(id, profile);
    }

    /// Profile for `id`, or the quirk-free default.
    pub fn get(&self, id: CharId) -> &CharProfile {
        self.map.get(&id).unwrap_or(&self.default)
    }
}
