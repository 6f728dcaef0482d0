use crate::NoteId;

/// Read-only access to the list's current ordering.
///
/// The host's model implements the three required row queries; the section queries have
/// default implementations that scan the ordering on every call. Hosts with large lists can
/// override them with cached answers, as long as the answers track the current ordering.
///
/// Every query must tolerate out-of-range positions (answer `false`/`None`).
pub trait NoteSource {
    fn row_count(&self) -> usize;

    fn note_id(&self, index: usize) -> Option<NoteId>;

    fn is_pinned(&self, index: usize) -> bool;

    fn has_tags(&self, index: usize) -> bool;

    /// Maps a stable identity back to its current position.
    fn index_of(&self, id: NoteId) -> Option<usize> {
        (0..self.row_count()).find(|&i| self.note_id(i) == Some(id))
    }

    fn first_pinned_index(&self) -> Option<usize> {
        (0..self.row_count()).find(|&i| self.is_pinned(i))
    }

    fn first_unpinned_index(&self) -> Option<usize> {
        (0..self.row_count()).find(|&i| !self.is_pinned(i))
    }

    fn has_pinned(&self) -> bool {
        self.first_pinned_index().is_some()
    }

    /// `true` iff the row is pinned and no earlier row is pinned.
    fn is_first_pinned(&self, index: usize) -> bool {
        index < self.row_count() && self.first_pinned_index() == Some(index)
    }

    /// `true` iff the row is unpinned and no earlier row is unpinned.
    fn is_first_unpinned(&self, index: usize) -> bool {
        index < self.row_count() && self.first_unpinned_index() == Some(index)
    }

    fn is_last(&self, index: usize) -> bool {
        index.checked_add(1) == Some(self.row_count())
    }
}

/// Section facts for one row, derived from the current ordering.
///
/// These are never cached by the engine: the ordering can change between layout passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionFacts {
    pub index: usize,
    pub is_first: bool,
    pub is_last: bool,
    pub is_pinned: bool,
    pub is_first_pinned: bool,
    pub is_first_unpinned: bool,
    pub has_pinned: bool,
    pub has_tags: bool,
    pub pinned_collapsed: bool,
}

impl SectionFacts {
    /// Returns `None` for out-of-range positions.
    pub fn resolve<S: NoteSource + ?Sized>(
        source: &S,
        index: usize,
        pinned_collapsed: bool,
    ) -> Option<Self> {
        if index >= source.row_count() {
            return None;
        }
        Some(Self {
            index,
            is_first: index == 0,
            is_last: source.is_last(index),
            is_pinned: source.is_pinned(index),
            is_first_pinned: source.is_first_pinned(index),
            is_first_unpinned: source.is_first_unpinned(index),
            has_pinned: source.has_pinned(),
            has_tags: source.has_tags(index),
            pinned_collapsed,
        })
    }

    /// A "Pinned" or "Notes" header band renders directly above this row.
    ///
    /// Headers only exist when the list has a pinned section to separate.
    pub fn owes_header(&self) -> bool {
        self.has_pinned && (self.is_first_pinned || self.is_first_unpinned)
    }

    /// The collapsed pinned section is represented by its first row alone.
    pub fn is_header_only(&self) -> bool {
        self.pinned_collapsed && self.is_first_pinned
    }

    /// Pinned rows folded away by a collapsed section: present in the index space, zero height.
    pub fn is_hidden(&self) -> bool {
        self.pinned_collapsed && self.is_pinned && !self.is_first_pinned
    }
}

/// Minimal per-row data, for hosts (and tests) that keep their ordering in a plain slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteMeta {
    pub id: NoteId,
    pub pinned: bool,
    pub has_tags: bool,
}

impl NoteMeta {
    pub fn new(id: NoteId) -> Self {
        Self {
            id,
            pinned: false,
            has_tags: false,
        }
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    pub fn with_tags(mut self, has_tags: bool) -> Self {
        self.has_tags = has_tags;
        self
    }
}

impl NoteSource for [NoteMeta] {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn note_id(&self, index: usize) -> Option<NoteId> {
        self.get(index).map(|n| n.id)
    }

    fn is_pinned(&self, index: usize) -> bool {
        self.get(index).is_some_and(|n| n.pinned)
    }

    fn has_tags(&self, index: usize) -> bool {
        self.get(index).is_some_and(|n| n.has_tags)
    }
}
