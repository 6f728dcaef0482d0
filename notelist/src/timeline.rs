use crate::PlayDirection;

/// Easing curves for the frame timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// Quadratic ease-in: slow start, accelerating towards the end.
    #[default]
    EaseIn,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// What a [`Timeline::tick`] observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineTick {
    /// Still running; the current frame.
    Frame(u32),
    /// Reached the end frame on this tick and stopped.
    Finished,
}

/// A frame counter advanced by externally delivered ticks.
///
/// There is no hidden clock: the caller passes `now_ms` to [`Timeline::start`] and every
/// [`Timeline::tick`]. The frame range is `[0, max_frame]`; forward playback runs up from `0`,
/// backward playback runs down from `max_frame`. The tick that reaches the duration always
/// lands exactly on the end frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    max_frame: u32,
    duration_ms: u64,
    easing: Easing,
    direction: PlayDirection,
    start_ms: u64,
    running: bool,
    frame: u32,
}

impl Timeline {
    pub fn new(max_frame: u32, duration_ms: u64, easing: Easing) -> Self {
        Self {
            max_frame: max_frame.max(1),
            duration_ms: duration_ms.max(1),
            easing,
            direction: PlayDirection::Forward,
            start_ms: 0,
            running: false,
            frame: 0,
        }
    }

    pub fn max_frame(&self) -> u32 {
        self.max_frame
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Takes effect on the next [`Timeline::start`].
    pub fn set_duration(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms.max(1);
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current_frame(&self) -> u32 {
        self.frame
    }

    /// `current_frame / max_frame`.
    pub fn current_progress(&self) -> f32 {
        self.frame as f32 / self.max_frame as f32
    }

    /// Restarts playback from the direction's start frame.
    pub fn start(&mut self, now_ms: u64, direction: PlayDirection) {
        self.direction = direction;
        self.start_ms = now_ms;
        self.running = true;
        self.frame = self.frame_at(0);
    }

    pub fn tick(&mut self, now_ms: u64) -> Option<TimelineTick> {
        if !self.running {
            return None;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            self.frame = self.end_frame();
            self.running = false;
            return Some(TimelineTick::Finished);
        }
        self.frame = self.frame_at(elapsed);
        Some(TimelineTick::Frame(self.frame))
    }

    fn end_frame(&self) -> u32 {
        match self.direction {
            PlayDirection::Forward => self.max_frame,
            PlayDirection::Backward => 0,
        }
    }

    fn frame_at(&self, elapsed_ms: u64) -> u32 {
        let t = (elapsed_ms as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let t = match self.direction {
            PlayDirection::Forward => t,
            PlayDirection::Backward => 1.0 - t,
        };
        let frame = self.easing.sample(t) * self.max_frame as f32;
        (frame.max(0.0) as u32).min(self.max_frame)
    }
}
