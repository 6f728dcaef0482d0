use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::{
    AnimationFrame, AnimationOptions, ListState, NoteId, NoteSource, RowHost, Timeline,
    TimelineTick, TransitionKind,
};

/// A transition requested while another one was in flight.
///
/// Holds identities only; they are resolved to positions when the entry is dequeued.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingTransition {
    pub ids: Vec<NoteId>,
    pub kind: TransitionKind,
}

/// What [`Transitions::request`] did with a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A session started immediately.
    Started,
    /// Appended to the pending queue behind the active session.
    Queued,
    /// None of the identities resolve to a row.
    Dropped,
}

/// The animation state machine.
///
/// At most one session runs at a time. Requests that arrive during a session are queued in
/// FIFO order and started, one after another, as sessions complete. All bookkeeping is keyed
/// by [`NoteId`]; positions are looked up through the [`NoteSource`] whenever the host has to
/// be told about a row.
#[derive(Clone, Debug)]
pub struct Transitions {
    timeline: Timeline,
    state: ListState,
    animating: Vec<NoteId>,
    queue: VecDeque<PendingTransition>,
}

impl Transitions {
    pub fn new(options: &AnimationOptions) -> Self {
        Self {
            timeline: Timeline::new(options.max_frame, options.duration_ms, options.easing),
            state: ListState::Normal,
            animating: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.timeline.is_running()
    }

    pub fn animating_ids(&self) -> &[NoteId] {
        &self.animating
    }

    pub fn is_animating_id(&self, id: NoteId) -> bool {
        self.animating.contains(&id)
    }

    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    pub fn pending(&self) -> impl Iterator<Item = &PendingTransition> {
        self.queue.iter()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn current_frame(&self) -> u32 {
        self.timeline.current_frame()
    }

    pub fn max_frame(&self) -> u32 {
        self.timeline.max_frame()
    }

    /// Applies to sessions started after this call.
    pub fn set_animation_duration(&mut self, duration_ms: u64) {
        self.timeline.set_duration(duration_ms);
    }

    /// The session as seen by row `id`, or `None` if the row is not animating.
    pub fn frame_for(&self, id: NoteId) -> Option<AnimationFrame> {
        let kind = self.state.kind()?;
        if !self.is_animating_id(id) {
            return None;
        }
        Some(AnimationFrame {
            kind,
            frame: self.timeline.current_frame(),
            max_frame: self.timeline.max_frame(),
        })
    }

    /// Starts a transition for `ids`, or queues it behind the active session.
    pub fn request<S, H>(
        &mut self,
        kind: TransitionKind,
        ids: impl IntoIterator<Item = NoteId>,
        source: &S,
        host: &mut H,
        now_ms: u64,
    ) -> RequestOutcome
    where
        S: NoteSource + ?Sized,
        H: RowHost + ?Sized,
    {
        let ids = resolvable_ids(ids, source);
        if ids.is_empty() {
            ndebug!(?kind, "transition request dropped: no resolvable rows");
            return RequestOutcome::Dropped;
        }
        if self.is_animating() {
            ndebug!(?kind, rows = ids.len(), pending = self.queue.len() + 1, "transition queued");
            self.queue.push_back(PendingTransition { ids, kind });
            return RequestOutcome::Queued;
        }
        self.start(kind, ids, source, host, now_ms);
        RequestOutcome::Started
    }

    /// Advances the active session.
    ///
    /// Every tick reports each animating row's geometry as stale. When the timeline finishes,
    /// the host is told which kind finished and asked to reopen the rows' inline editors; then
    /// the next queued request (if any) starts at the same `now_ms`.
    ///
    /// Returns `true` while a session is running after this tick.
    pub fn tick<S, H>(&mut self, now_ms: u64, source: &S, host: &mut H) -> bool
    where
        S: NoteSource + ?Sized,
        H: RowHost + ?Sized,
    {
        let Some(tick) = self.timeline.tick(now_ms) else {
            return false;
        };
        ntrace!(frame = self.timeline.current_frame(), now_ms, "transition tick");
        self.notify_geometry(source, host);
        if tick == TimelineTick::Finished {
            self.finish(source, host, now_ms);
        }
        self.is_animating()
    }

    fn finish<S, H>(&mut self, source: &S, host: &mut H, now_ms: u64)
    where
        S: NoteSource + ?Sized,
        H: RowHost + ?Sized,
    {
        if let Some(kind) = self.state.kind() {
            ndebug!(?kind, rows = self.animating.len(), "transition finished");
            host.animation_finished(kind);
        }
        for &id in &self.animating {
            if let Some(index) = source.index_of(id) {
                host.open_persistent_editor(index);
            }
        }

        while let Some(next) = self.queue.pop_front() {
            let ids = resolvable_ids(next.ids, source);
            if ids.is_empty() {
                ndebug!(kind = ?next.kind, "queued transition discarded: rows are gone");
                continue;
            }
            self.start(next.kind, ids, source, host, now_ms);
            return;
        }

        self.animating.clear();
        self.state = ListState::Normal;
    }

    fn start<S, H>(
        &mut self,
        kind: TransitionKind,
        ids: Vec<NoteId>,
        source: &S,
        host: &mut H,
        now_ms: u64,
    ) where
        S: NoteSource + ?Sized,
        H: RowHost + ?Sized,
    {
        ndebug!(?kind, rows = ids.len(), "transition started");
        self.animating = ids;
        for &id in &self.animating {
            if let Some(index) = source.index_of(id) {
                host.close_persistent_editor(index);
            }
        }
        self.state = ListState::Animating(kind);
        self.timeline.start(now_ms, kind.direction());
    }

    fn notify_geometry<S, H>(&self, source: &S, host: &mut H)
    where
        S: NoteSource + ?Sized,
        H: RowHost + ?Sized,
    {
        for &id in &self.animating {
            match source.index_of(id) {
                Some(index) => host.geometry_changed(index),
                None => {
                    nwarn!(id, "animating row no longer resolves");
                }
            }
        }
    }
}

impl Default for Transitions {
    fn default() -> Self {
        Self::new(&AnimationOptions::default())
    }
}

/// Keeps the identities that currently resolve, in request order, without duplicates.
fn resolvable_ids<S: NoteSource + ?Sized>(
    ids: impl IntoIterator<Item = NoteId>,
    source: &S,
) -> Vec<NoteId> {
    let mut out = Vec::new();
    for id in ids {
        if out.contains(&id) {
            continue;
        }
        if source.index_of(id).is_some() {
            out.push(id);
        }
    }
    out
}
