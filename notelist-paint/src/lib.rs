//! Row compositing for the `notelist` engine.
//!
//! This crate paints rows onto an abstract [`Canvas`]: selection/hover backgrounds, drag-target
//! edges, separators, title/date/preview labels, section header bands and tag chips. During a
//! transition it clips the row's offscreen layer to the reveal window the
//! [`notelist::RowController`] reports, so painting stays consistent with the container's
//! layout pass.
//!
//! Backends implement [`Canvas`] and [`TextMetrics`]; the model implements [`NoteRows`]; the
//! tag pool implements [`TagLookup`].
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod canvas;
mod compositor;
mod tags;
mod text;
mod theme;


pub use canvas::{
    Align, Canvas, Color, Font, FontWeight, HAlign, Image, Rect, RenderHints, TextMetrics, VAlign,
};
pub use compositor::{
    AppFocus, CHEVRON_DOWN, CHEVRON_RIGHT, NoteRow, NoteRows, PINNED_HEADER, PaintOptions,
    RevealWindow, RowPainter, UNPINNED_HEADER, ViewState,
};
pub use tags::{
    TAG_DOT_GLYPH, Tag, TagChip, TagChipOptions, TagId, TagLookup, layout_tag_chips,
    paint_tag_list,
};
pub use text::{NO_PREVIEW_TEXT, date_label, preview_line};
pub use theme::{Fonts, Palette, Theme, ThemeObserver};
