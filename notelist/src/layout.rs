use crate::key::IdSizeMap;
use crate::{AnimationFrame, LayoutOptions, NoteId, NoteSource, SectionFacts};

/// Row geometry: natural height, animated height, and the offscreen buffer height.
///
/// Owns the measured-size cache (heights reported by inline editors hosted on rows with tags).
/// Everything else is recomputed from [`SectionFacts`] on every query.
#[derive(Clone, Debug)]
pub struct RowLayout {
    options: LayoutOptions,
    pinned_collapsed: bool,
    all_notes: bool,
    measured: IdSizeMap,
}

impl RowLayout {
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            options,
            pinned_collapsed: false,
            all_notes: false,
            measured: IdSizeMap::default(),
        }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: LayoutOptions) {
        self.options = options;
    }

    pub fn pinned_collapsed(&self) -> bool {
        self.pinned_collapsed
    }

    pub fn set_pinned_collapsed(&mut self, collapsed: bool) {
        self.pinned_collapsed = collapsed;
    }

    pub fn is_all_notes(&self) -> bool {
        self.all_notes
    }

    pub fn set_all_notes(&mut self, all_notes: bool) {
        self.all_notes = all_notes;
    }

    pub fn facts<S: NoteSource + ?Sized>(&self, source: &S, index: usize) -> Option<SectionFacts> {
        SectionFacts::resolve(source, index, self.pinned_collapsed)
    }

    /// Height a container should reserve for the row.
    ///
    /// `frame` is the row's view of the active session, if its identity is animating.
    pub fn display_size(
        &self,
        facts: &SectionFacts,
        id: NoteId,
        frame: Option<AnimationFrame>,
    ) -> u32 {
        if frame.is_none() {
            if let Some(size) = self.measured_override(facts, id) {
                return size;
            }
        }
        let base = self.base_height(facts);
        let mut height = i64::from(frame.map_or(base, |f| f.scale(base)));
        if self.all_notes {
            height += i64::from(self.options.folder_label_height);
        }
        if facts.pinned_collapsed && facts.is_pinned {
            return self.collapsed_pinned_height(facts);
        }
        if facts.owes_header() {
            height += i64::from(self.options.header_height);
        }
        height += i64::from(self.section_spacing(facts, true));
        height += i64::from(self.trailing_adjustment());
        clamp_height(height)
    }

    /// Height a compositor buffer must be allocated at.
    ///
    /// Always the full size: in-flight scaling is applied later by clipping. The header band
    /// and the gap above the "Notes" header are excluded; they are painted onto the target
    /// above the buffer (see [`RowLayout::header_offset`]).
    pub fn buffer_size(&self, facts: &SectionFacts, id: NoteId, animating: bool) -> u32 {
        if !animating {
            if let Some(size) = self.measured_override(facts, id) {
                return size;
            }
        }
        let mut height = i64::from(self.base_height(facts));
        if self.all_notes {
            height += i64::from(self.options.folder_label_height);
        }
        if facts.pinned_collapsed && facts.is_pinned {
            return self.collapsed_pinned_height(facts);
        }
        height += i64::from(self.section_spacing(facts, false));
        height += i64::from(self.trailing_adjustment());
        clamp_height(height)
    }

    /// Vertical distance from the top of the row's target rect to the top of its buffer.
    ///
    /// For a row at rest, `display_size == buffer_size + header_offset`.
    pub fn header_offset(&self, facts: &SectionFacts) -> u32 {
        if !facts.owes_header() || facts.is_header_only() {
            return 0;
        }
        let gap = if self.owes_section_gap(facts) {
            self.options.last_pinned_to_unpinned_header.max(0) as u32
        } else {
            0
        };
        self.options.header_height + gap
    }

    /// Sum of the inter-row and header spacing rules that apply to the row.
    ///
    /// `include_section_gap` adds the gap between an expanded pinned block and the "Notes"
    /// header, which belongs to the target rect rather than the row buffer.
    pub fn section_spacing(&self, facts: &SectionFacts, include_section_gap: bool) -> i32 {
        let o = &self.options;
        let mut spacing = 0;
        if !facts.is_first {
            spacing += o.next_note_offset;
        }
        if facts.is_first_pinned {
            spacing += o.pinned_header_to_note_space;
        }
        if facts.is_first_unpinned {
            spacing += o.unpinned_header_to_note_space;
        }
        if include_section_gap && self.owes_section_gap(facts) {
            spacing += o.last_pinned_to_unpinned_header;
        }
        spacing
    }

    fn owes_section_gap(&self, facts: &SectionFacts) -> bool {
        facts.is_first_unpinned && facts.has_pinned && !facts.pinned_collapsed
    }

    fn base_height(&self, facts: &SectionFacts) -> u32 {
        if facts.has_tags {
            self.options.tagged_row_height
        } else {
            self.options.row_height
        }
    }

    fn collapsed_pinned_height(&self, facts: &SectionFacts) -> u32 {
        if facts.is_first_pinned {
            self.options.header_height
        } else {
            0
        }
    }

    fn trailing_adjustment(&self) -> i32 {
        let inset = if self.all_notes {
            self.options.all_notes_bottom_inset
        } else {
            self.options.bottom_inset
        };
        self.options.last_el_sep_space - inset
    }

    fn measured_override(&self, facts: &SectionFacts, id: NoteId) -> Option<u32> {
        if !facts.has_tags || facts.is_hidden() || facts.is_header_only() {
            return None;
        }
        self.measured.get(&id).copied()
    }

    pub fn measured_size(&self, id: NoteId) -> Option<u32> {
        self.measured.get(&id).copied()
    }

    pub fn measured_len(&self) -> usize {
        self.measured.len()
    }

    /// Returns `true` when the stored height changed.
    pub fn insert_measured(&mut self, id: NoteId, height: u32) -> bool {
        self.measured.insert(id, height) != Some(height)
    }

    pub fn remove_measured(&mut self, id: NoteId) -> bool {
        self.measured.remove(&id).is_some()
    }

    pub fn clear_measured(&mut self) {
        self.measured.clear();
    }
}

impl Default for RowLayout {
    fn default() -> Self {
        Self::new(LayoutOptions::default())
    }
}

fn clamp_height(height: i64) -> u32 {
    height.clamp(0, i64::from(u32::MAX)) as u32
}
