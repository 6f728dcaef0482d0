/// Stable identity of a note, invariant across reordering.
pub type NoteId = i32;

/// The visual transition applied to a set of rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionKind {
    Insert,
    Remove,
    MoveOut,
    MoveIn,
}

impl TransitionKind {
    /// Insert plays the timeline forward (rows grow in); every other kind plays it backward.
    pub fn direction(self) -> PlayDirection {
        match self {
            Self::Insert => PlayDirection::Forward,
            Self::Remove | Self::MoveOut | Self::MoveIn => PlayDirection::Backward,
        }
    }
}

/// The list's animation state. `Normal` is both the initial and the resting state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListState {
    #[default]
    Normal,
    Animating(TransitionKind),
}

impl ListState {
    pub fn kind(self) -> Option<TransitionKind> {
        match self {
            Self::Normal => None,
            Self::Animating(kind) => Some(kind),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayDirection {
    /// Frame runs from `0` up to `max_frame`.
    Forward,
    /// Frame runs from `max_frame` down to `0`.
    Backward,
}

/// A snapshot of the active session as seen by one animating row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationFrame {
    pub kind: TransitionKind,
    pub frame: u32,
    pub max_frame: u32,
}

impl AnimationFrame {
    /// `frame / max_frame`, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        let max = self.max_frame.max(1);
        self.frame.min(max) as f32 / max as f32
    }

    /// Scales a full length by the session's progress.
    ///
    /// Insert/Remove/MoveOut scale by `progress`, MoveIn by `1 - progress`. This is the only
    /// place progress is converted to a length, and it always rounds down.
    pub fn scale(&self, length: u32) -> u32 {
        let max = u64::from(self.max_frame.max(1));
        let frame = u64::from(self.frame).min(max);
        let numerator = match self.kind {
            TransitionKind::MoveIn => max - frame,
            TransitionKind::Insert | TransitionKind::Remove | TransitionKind::MoveOut => frame,
        };
        (u64::from(length) * numerator / max) as u32
    }
}
