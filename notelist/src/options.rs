use crate::Easing;

/// Row geometry constants.
///
/// The defaults reproduce the note list's stock look. All lengths are in device-independent
/// units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutOptions {
    /// Base height of a row without tags.
    pub row_height: u32,
    /// Base height of a row that hosts tag chips.
    pub tagged_row_height: u32,
    /// Height of the "Pinned"/"Notes" header band.
    pub header_height: u32,
    /// Extra band for the parent folder label in the "all notes" view.
    pub folder_label_height: u32,

    /// Spacing above every row except the first.
    pub next_note_offset: i32,
    /// Space between the "Pinned" header and the first pinned row.
    pub pinned_header_to_note_space: i32,
    /// Space between the "Notes" header and the first unpinned row.
    pub unpinned_header_to_note_space: i32,
    /// Space between the end of an expanded pinned block and the "Notes" header.
    pub last_pinned_to_unpinned_header: i32,

    /// Reserved bottom separator inset, subtracted from every row.
    pub bottom_inset: i32,
    /// `bottom_inset` used in the "all notes" view.
    pub all_notes_bottom_inset: i32,
    /// Re-added after the inset so the last row keeps consistent spacing.
    pub last_el_sep_space: i32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            row_height: 70,
            tagged_row_height: 106,
            header_height: 25,
            folder_label_height: 20,
            next_note_offset: 0,
            pinned_header_to_note_space: 0,
            unpinned_header_to_note_space: 0,
            last_pinned_to_unpinned_header: 10,
            bottom_inset: 10,
            all_notes_bottom_inset: 2,
            last_el_sep_space: 12,
        }
    }
}

impl LayoutOptions {
    pub fn with_row_heights(mut self, row_height: u32, tagged_row_height: u32) -> Self {
        self.row_height = row_height;
        self.tagged_row_height = tagged_row_height;
        self
    }

    pub fn with_header_height(mut self, header_height: u32) -> Self {
        self.header_height = header_height;
        self
    }

    pub fn with_folder_label_height(mut self, folder_label_height: u32) -> Self {
        self.folder_label_height = folder_label_height;
        self
    }

    pub fn with_next_note_offset(mut self, next_note_offset: i32) -> Self {
        self.next_note_offset = next_note_offset;
        self
    }

    pub fn with_section_spacing(
        mut self,
        pinned_header_to_note_space: i32,
        unpinned_header_to_note_space: i32,
        last_pinned_to_unpinned_header: i32,
    ) -> Self {
        self.pinned_header_to_note_space = pinned_header_to_note_space;
        self.unpinned_header_to_note_space = unpinned_header_to_note_space;
        self.last_pinned_to_unpinned_header = last_pinned_to_unpinned_header;
        self
    }

    pub fn with_bottom_insets(
        mut self,
        bottom_inset: i32,
        all_notes_bottom_inset: i32,
        last_el_sep_space: i32,
    ) -> Self {
        self.bottom_inset = bottom_inset;
        self.all_notes_bottom_inset = all_notes_bottom_inset;
        self.last_el_sep_space = last_el_sep_space;
        self
    }
}

/// Frame timeline configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationOptions {
    /// Upper bound of the frame counter; progress is `frame / max_frame`.
    pub max_frame: u32,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            max_frame: 200,
            duration_ms: 200,
            easing: Easing::EaseIn,
        }
    }
}

impl AnimationOptions {
    pub fn with_max_frame(mut self, max_frame: u32) -> Self {
        self.max_frame = max_frame.max(1);
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms.max(1);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Configuration for [`crate::RowController`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowOptions {
    pub layout: LayoutOptions,
    pub animation: AnimationOptions,
    /// Start in the flattened "all notes" view (adds the folder label band).
    pub all_notes: bool,
    pub pinned_collapsed: bool,
}

impl RowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_animation(mut self, animation: AnimationOptions) -> Self {
        self.animation = animation;
        self
    }

    pub fn with_all_notes(mut self, all_notes: bool) -> Self {
        self.all_notes = all_notes;
        self
    }

    pub fn with_pinned_collapsed(mut self, pinned_collapsed: bool) -> Self {
        self.pinned_collapsed = pinned_collapsed;
        self
    }
}
