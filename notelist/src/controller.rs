use crate::{
    AnimationFrame, ListState, NoteId, NoteSource, RequestOutcome, RowLayout, RowOptions,
    SectionFacts, Transitions, TransitionKind,
};

/// Notifications the engine sends to the hosting list view.
///
/// All methods default to no-ops so hosts only implement what they react to.
pub trait RowHost {
    /// The row's geometry is stale: re-query its size and repaint it.
    fn geometry_changed(&mut self, index: usize) {
        let _ = index;
    }

    fn animation_finished(&mut self, kind: TransitionKind) {
        let _ = kind;
    }

    /// Materialize the row's persistent inline editor, if it has one.
    fn open_persistent_editor(&mut self, index: usize) {
        let _ = index;
    }

    fn close_persistent_editor(&mut self, index: usize) {
        let _ = index;
    }
}

impl RowHost for () {}

/// A framework-neutral row delegate: layout plus transitions.
///
/// This type does not hold any UI objects or model data. Hosts drive it by calling:
/// - `display_size`/`buffer_size` from their layout and paint passes
/// - `request_transition` when rows are inserted, removed or moved
/// - `tick(now_ms)` on every frame while `is_animating()`
/// - `update_measured_size`/`editor_destroyed` from inline editors
#[derive(Clone, Debug)]
pub struct RowController {
    layout: RowLayout,
    transitions: Transitions,
}

impl RowController {
    pub fn new(options: RowOptions) -> Self {
        let mut layout = RowLayout::new(options.layout);
        layout.set_all_notes(options.all_notes);
        layout.set_pinned_collapsed(options.pinned_collapsed);
        Self {
            layout,
            transitions: Transitions::new(&options.animation),
        }
    }

    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    pub fn transitions(&self) -> &Transitions {
        &self.transitions
    }

    pub fn state(&self) -> ListState {
        self.transitions.state()
    }

    pub fn is_animating(&self) -> bool {
        self.transitions.is_animating()
    }

    pub fn is_all_notes(&self) -> bool {
        self.layout.is_all_notes()
    }

    /// Changes every row's geometry; the host should relayout the whole list.
    pub fn set_all_notes(&mut self, all_notes: bool) {
        self.layout.set_all_notes(all_notes);
    }

    pub fn pinned_collapsed(&self) -> bool {
        self.layout.pinned_collapsed()
    }

    /// Changes every pinned row's geometry; the host should relayout the whole list.
    pub fn set_pinned_collapsed(&mut self, collapsed: bool) {
        self.layout.set_pinned_collapsed(collapsed);
    }

    pub fn set_animation_duration(&mut self, duration_ms: u64) {
        self.transitions.set_animation_duration(duration_ms);
    }

    pub fn facts<S: NoteSource + ?Sized>(&self, source: &S, index: usize) -> Option<SectionFacts> {
        self.layout.facts(source, index)
    }

    /// The active session as seen by the row at `index`, if it is animating.
    pub fn animation_frame<S: NoteSource + ?Sized>(
        &self,
        source: &S,
        index: usize,
    ) -> Option<AnimationFrame> {
        let id = source.note_id(index)?;
        self.transitions.frame_for(id)
    }

    /// Height the container should reserve for the row. Zero for unknown rows.
    pub fn display_size<S: NoteSource + ?Sized>(&self, source: &S, index: usize) -> u32 {
        let (Some(facts), Some(id)) = (self.facts(source, index), source.note_id(index)) else {
            nwarn!(index, "display_size: row does not resolve");
            return 0;
        };
        self.layout
            .display_size(&facts, id, self.transitions.frame_for(id))
    }

    /// Height of the row's offscreen buffer. Zero for unknown rows.
    pub fn buffer_size<S: NoteSource + ?Sized>(&self, source: &S, index: usize) -> u32 {
        let (Some(facts), Some(id)) = (self.facts(source, index), source.note_id(index)) else {
            nwarn!(index, "buffer_size: row does not resolve");
            return 0;
        };
        self.layout
            .buffer_size(&facts, id, self.transitions.is_animating_id(id))
    }

    pub fn header_offset<S: NoteSource + ?Sized>(&self, source: &S, index: usize) -> u32 {
        self.facts(source, index)
            .map_or(0, |facts| self.layout.header_offset(&facts))
    }

    /// Whether the host should keep an inline editor open on the row.
    ///
    /// Only rows with tags that are at rest get one. Rows hidden behind a collapsed pinned
    /// header never do; the header cell itself does.
    pub fn wants_inline_editor<S: NoteSource + ?Sized>(&self, source: &S, index: usize) -> bool {
        let (Some(facts), Some(id)) = (self.facts(source, index), source.note_id(index)) else {
            return false;
        };
        facts.has_tags
            && !self.transitions.is_animating_id(id)
            && !facts.is_hidden()
    }

    /// See [`Transitions::request`].
    pub fn request_transition<S, H>(
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
        self.transitions.request(kind, ids, source, host, now_ms)
    }

    /// See [`Transitions::tick`].
    pub fn tick<S, H>(&mut self, now_ms: u64, source: &S, host: &mut H) -> bool
    where
        S: NoteSource + ?Sized,
        H: RowHost + ?Sized,
    {
        self.transitions.tick(now_ms, source, host)
    }

    /// Records the height an inline editor measured for its row.
    pub fn update_measured_size<H: RowHost + ?Sized>(
        &mut self,
        id: NoteId,
        index: usize,
        height: u32,
        host: &mut H,
    ) {
        ntrace!(id, index, height, "update_measured_size");
        self.layout.insert_measured(id, height);
        host.geometry_changed(index);
    }

    /// Drops the row's measured height when its inline editor goes away.
    pub fn editor_destroyed<H: RowHost + ?Sized>(&mut self, id: NoteId, index: usize, host: &mut H) {
        ntrace!(id, index, "editor_destroyed");
        self.layout.remove_measured(id);
        host.geometry_changed(index);
    }

    /// Forgets every measured height, e.g. after the list width changed.
    pub fn clear_measured_sizes(&mut self) {
        ndebug!(entries = self.layout.measured_len(), "clear_measured_sizes");
        self.layout.clear_measured();
    }
}

impl Default for RowController {
    fn default() -> Self {
        Self::new(RowOptions::default())
    }
}
