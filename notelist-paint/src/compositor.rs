use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use notelist::{AnimationFrame, NoteSource, RowController, SectionFacts, TransitionKind};

use crate::tags::{TagChipOptions, TagId, TagLookup, layout_tag_chips, paint_tag_list};
use crate::text::{date_label, preview_line};
use crate::{Align, Canvas, Image, Palette, Rect, RenderHints, Theme, ThemeObserver};

pub const PINNED_HEADER: &str = "Pinned";
pub const UNPINNED_HEADER: &str = "Notes";
/// Chevron shown while the pinned section is collapsed.
pub const CHEVRON_RIGHT: &str = "\u{f054}";
/// Chevron shown while the pinned section is expanded.
pub const CHEVRON_DOWN: &str = "\u{f078}";

/// The text attributes of one row, borrowed from the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteRow<'a> {
    pub title: &'a str,
    pub modified: NaiveDateTime,
    /// Full note text; only the second line is shown.
    pub content: &'a str,
    /// Folder name, shown in the "all notes" view.
    pub parent_name: &'a str,
    pub tag_ids: &'a [TagId],
}

/// A [`NoteSource`] that can also hand out the text the compositor paints.
pub trait NoteRows: NoteSource {
    fn row(&self, index: usize) -> Option<NoteRow<'_>>;
}

/// Whether the application window is in the foreground.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AppFocus {
    #[default]
    Active,
    Inactive,
    /// Hidden or suspended: selected rows get no fill.
    Hidden,
}

/// Interaction state of the hosting list view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    pub selected: BTreeSet<usize>,
    pub hovered: Option<usize>,
    /// A row drag is in progress.
    pub dragging: bool,
    /// The drag cursor is over the pinned section.
    pub dragging_inside_pinned: bool,
    pub app_focus: AppFocus,
    /// The list view itself has keyboard focus.
    pub list_active: bool,
}

impl ViewState {
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }
}

/// Text placement and decoration constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaintOptions {
    /// Subtracted from the target width (e.g. the scrollbar).
    pub row_right_offset: i32,
    /// Horizontal text inset on both sides.
    pub left_offset_x: i32,
    pub top_offset_y: i32,
    pub title_date_space: i32,
    pub date_desc_space: i32,
    pub desc_folder_space: i32,
    /// Extra indent of the folder name, leaving room for the folder icon.
    pub folder_label_indent: i32,
    pub folder_icon_size: i32,
    /// Gap between the last text line and the tag chips.
    pub tag_list_spacing: i32,
    pub drag_top_edge: i32,
    pub drag_edge: i32,
    /// Strip painted at the bottom of a hovered pinned row while dragging.
    pub drag_target_strip: i32,
    pub chevron_size: i32,
    /// Distance from the header's right edge to the chevron.
    pub chevron_inset: i32,
    pub chevron_top: i32,
    pub tag_chips: TagChipOptions,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self {
            row_right_offset: 0,
            left_offset_x: 20,
            top_offset_y: 10,
            title_date_space: 2,
            date_desc_space: 5,
            desc_folder_space: 7,
            folder_label_indent: 20,
            folder_icon_size: 16,
            tag_list_spacing: 5,
            drag_top_edge: 4,
            drag_edge: 3,
            drag_target_strip: 5,
            chevron_size: 16,
            chevron_inset: 25,
            chevron_top: 5,
            tag_chips: TagChipOptions::default(),
        }
    }
}

impl PaintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row_right_offset(mut self, row_right_offset: i32) -> Self {
        self.row_right_offset = row_right_offset.max(0);
        self
    }

    pub fn with_text_insets(mut self, left_offset_x: i32, top_offset_y: i32) -> Self {
        self.left_offset_x = left_offset_x;
        self.top_offset_y = top_offset_y;
        self
    }

    pub fn with_text_spacing(
        mut self,
        title_date_space: i32,
        date_desc_space: i32,
        desc_folder_space: i32,
    ) -> Self {
        self.title_date_space = title_date_space;
        self.date_desc_space = date_desc_space;
        self.desc_folder_space = desc_folder_space;
        self
    }

    pub fn with_tag_chips(mut self, tag_chips: TagChipOptions) -> Self {
        self.tag_chips = tag_chips;
        self
    }
}

/// Where a row buffer lands on the target: `source` within the buffer, `target` on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealWindow {
    pub source: Rect,
    pub target: Rect,
}

impl RevealWindow {
    /// The visible part of a `buffer_height` tall buffer at `frame`.
    ///
    /// Rows at rest show the whole buffer. Insert, Remove and MoveOut show the bottom
    /// `reveal` units, MoveIn the top ones. Either way the window starts `header_offset`
    /// below the top of `row`, inside the height the layout reserves for the row.
    pub fn new(
        buffer_height: u32,
        frame: Option<AnimationFrame>,
        row: Rect,
        header_offset: u32,
    ) -> Self {
        let buffer = to_i32(buffer_height);
        let reveal = frame.map_or(buffer, |f| to_i32(f.scale(buffer_height)));
        let top = row.y + to_i32(header_offset);
        let source_y = match frame.map(|f| f.kind) {
            Some(TransitionKind::MoveIn) => 0,
            _ => buffer - reveal,
        };
        Self {
            source: Rect::new(0, source_y, row.width, reveal),
            target: Rect::new(row.x, top, row.width, reveal),
        }
    }
}

/// Paints rows of a sectioned note list.
///
/// Each row is drawn into a transparent offscreen layer the size of its buffer height, then a
/// clipped window of that layer is copied onto the target below the row's header band. Rows
/// that carry tags are left to their inline editor while at rest.
#[derive(Clone, Debug)]
pub struct RowPainter {
    theme: Theme,
    palette: Palette,
    options: PaintOptions,
    view: ViewState,
    now: Option<NaiveDateTime>,
}

impl RowPainter {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            palette: Palette::for_theme(theme),
            options: PaintOptions::default(),
            view: ViewState::default(),
            now: None,
        }
    }

    pub fn with_options(mut self, options: PaintOptions) -> Self {
        self.options = options;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replaces the palette and tells `observer` (e.g. open inline editors).
    pub fn set_theme<O: ThemeObserver + ?Sized>(&mut self, theme: Theme, observer: &mut O) {
        pdebug!(?theme, "set_theme");
        self.theme = theme;
        self.palette = Palette::for_theme(theme);
        observer.theme_changed(theme, &self.palette);
    }

    pub fn options(&self) -> &PaintOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PaintOptions) {
        self.options = options;
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn set_view(&mut self, view: ViewState) {
        self.view = view;
    }

    /// Pins the clock used for date labels. `None` reads the local clock on every paint.
    pub fn set_now(&mut self, now: Option<NaiveDateTime>) {
        self.now = now;
    }

    /// Composites row `index` into `target`.
    ///
    /// Returns `false` when nothing was drawn: the row does not resolve, it is folded into a
    /// collapsed pinned section, or it carries tags and is at rest.
    pub fn render_row<C, S, T>(
        &self,
        canvas: &mut C,
        source: &S,
        tags: &T,
        controller: &RowController,
        index: usize,
        target: Rect,
    ) -> bool
    where
        C: Canvas,
        S: NoteRows + ?Sized,
        T: TagLookup + ?Sized,
    {
        let (Some(facts), Some(row)) = (controller.facts(source, index), source.row(index)) else {
            pwarn!(index, "render_row: row does not resolve");
            return false;
        };
        let frame = controller.animation_frame(source, index);
        let header_only = facts.is_header_only();
        if facts.is_hidden() {
            return false;
        }
        if facts.has_tags && frame.is_none() {
            return false;
        }

        let target = Rect::new(
            target.x,
            target.y,
            (target.width - self.options.row_right_offset).max(0),
            target.height,
        );
        let buffer_height = controller.buffer_size(source, index);
        let header_offset = controller.layout().header_offset(&facts);
        ptrace!(index, buffer_height, header_offset, animating = frame.is_some(), "render_row");

        let mut layer = canvas.new_layer(target.width as u32, buffer_height);
        layer.set_render_hints(RenderHints::SMOOTH);
        let bounds = Rect::new(0, 0, target.width, to_i32(buffer_height));

        self.paint_background(&mut layer, &facts, bounds);
        self.paint_drag_edges(&mut layer, &facts, bounds);
        if self.should_paint_separator(source, &facts) {
            let inset = self.options.left_offset_x;
            layer.fill_rect(
                Rect::new(bounds.x + inset, bounds.bottom() - 1, bounds.width - 2 * inset, 1),
                self.palette.separator,
            );
        }
        if !header_only {
            let text_bottom = self.paint_labels(&mut layer, &row, &facts, controller, bounds);
            if frame.is_some() && !row.tag_ids.is_empty() {
                let area = Rect::new(
                    bounds.x,
                    text_bottom + self.options.tag_list_spacing,
                    bounds.width,
                    self.options.tag_chips.height,
                );
                let chips = layout_tag_chips(
                    &layer,
                    &self.palette,
                    &self.options.tag_chips,
                    tags,
                    row.tag_ids,
                    area,
                );
                let selected = self.view.is_selected(facts.index);
                paint_tag_list(
                    &mut layer,
                    &self.palette,
                    &self.options.tag_chips,
                    tags,
                    &chips,
                    selected,
                );
            }
        }

        canvas.set_render_hints(RenderHints::SMOOTH);
        let window = RevealWindow::new(buffer_height, frame, target, header_offset);
        if !window.source.is_empty() {
            canvas.blit(&layer, window.source, window.target);
        }
        // Header bands go over the buffer: a collapsed header cell shares its rect.
        self.paint_headers(canvas, &facts, controller, target);
        true
    }

    /// Whether the 1-unit separator is drawn at the bottom of the row.
    pub fn should_paint_separator<S: NoteSource + ?Sized>(
        &self,
        source: &S,
        facts: &SectionFacts,
    ) -> bool {
        let index = facts.index;
        if facts.is_last {
            return false;
        }
        let selected = self.view.is_selected(index);
        if !selected && (self.view.is_hovered(index) || self.view.is_hovered(index + 1)) {
            return false;
        }
        if selected != self.view.is_selected(index + 1) {
            return false;
        }
        if source.first_unpinned_index() == Some(index + 1) {
            return false;
        }
        !(facts.pinned_collapsed && facts.is_pinned)
    }

    fn paint_background<L: Canvas>(&self, layer: &mut L, facts: &SectionFacts, bounds: Rect) {
        let p = &self.palette;
        let index = facts.index;
        if facts.is_header_only() {
            layer.fill_rect(bounds, p.background);
        } else if self.view.is_selected(index) {
            let fill = match self.view.app_focus {
                AppFocus::Active if self.view.list_active => Some(p.active),
                AppFocus::Active => Some(p.not_active),
                AppFocus::Inactive => Some(p.application_inactive),
                AppFocus::Hidden => None,
            };
            if let Some(fill) = fill {
                layer.fill_rect(bounds, fill);
            }
        } else if self.view.is_hovered(index) {
            if !self.view.dragging {
                layer.fill_rect(bounds, p.hover);
            } else if facts.is_pinned {
                layer.fill_rect(
                    bounds.bottom_strip(self.options.drag_target_strip),
                    p.drag_indicator,
                );
            }
        } else if !(facts.pinned_collapsed && facts.is_pinned) {
            layer.fill_rect(bounds, p.background);
        }
    }

    fn paint_drag_edges<L: Canvas>(&self, layer: &mut L, facts: &SectionFacts, bounds: Rect) {
        if !self.view.dragging || facts.is_pinned || self.view.dragging_inside_pinned {
            return;
        }
        let o = &self.options;
        let color = self.palette.drag_indicator;
        if facts.is_first_unpinned {
            layer.fill_rect(bounds.top_strip(o.drag_top_edge), color);
        }
        layer.fill_rect(bounds.left_strip(o.drag_edge), color);
        layer.fill_rect(bounds.right_strip(o.drag_edge), color);
        if facts.is_last {
            layer.fill_rect(bounds.bottom_strip(o.drag_edge), color);
        }
    }

    /// Draws title, date, preview and (in the "all notes" view) the folder line.
    ///
    /// Returns the bottom edge of the last line.
    fn paint_labels<L: Canvas>(
        &self,
        layer: &mut L,
        row: &NoteRow<'_>,
        facts: &SectionFacts,
        controller: &RowController,
        bounds: Rect,
    ) -> i32 {
        let o = &self.options;
        let p = &self.palette;
        let title_font = if self.view.is_selected(facts.index) {
            &p.fonts.title_selected
        } else {
            &p.fonts.title
        };
        let offsets = controller.layout().section_spacing(facts, false);
        let x = bounds.x + o.left_offset_x;
        let width = (bounds.width - 2 * o.left_offset_x).max(0);
        let title_height = layer.line_height(title_font);
        let date_height = layer.line_height(&p.fonts.date);

        let title_rect = Rect::new(x, bounds.y, width, title_height + o.top_offset_y + offsets);
        let date_rect = Rect::new(x, title_rect.bottom(), width, date_height + o.title_date_space);
        let content_rect =
            Rect::new(x, date_rect.bottom(), width, title_height + o.date_desc_space);

        let now = self
            .now
            .unwrap_or_else(|| chrono::Local::now().naive_local());
        let title = layer.elide_right(title_font, row.title, width);
        let date = date_label(row.modified, now);
        let preview = layer.elide_right(title_font, preview_line(row.content), width);

        layer.draw_text(title_rect, Align::BOTTOM_LEFT, title_font, p.title, &title);
        layer.draw_text(date_rect, Align::BOTTOM_LEFT, &p.fonts.date, p.date, &date);
        layer.draw_text(content_rect, Align::BOTTOM_LEFT, title_font, p.content, &preview);

        if !controller.is_all_notes() {
            return content_rect.bottom();
        }
        let folder_width = (width - o.folder_label_indent).max(0);
        let folder_rect = Rect::new(
            x + o.folder_label_indent,
            content_rect.bottom(),
            folder_width,
            title_height + o.desc_folder_space,
        );
        layer.draw_image(
            Rect::new(
                x,
                folder_rect.y + o.desc_folder_space,
                o.folder_icon_size,
                o.folder_icon_size,
            ),
            Image::Folder,
        );
        let parent = layer.elide_right(title_font, row.parent_name, folder_width);
        layer.draw_text(folder_rect, Align::BOTTOM_LEFT, title_font, p.content, &parent);
        folder_rect.bottom()
    }

    /// Draws the "Pinned"/"Notes" band above the row's buffer, directly onto the target.
    fn paint_headers<C: Canvas>(
        &self,
        canvas: &mut C,
        facts: &SectionFacts,
        controller: &RowController,
        target: Rect,
    ) {
        if !facts.owes_header() {
            return;
        }
        let o = &self.options;
        let p = &self.palette;
        let layout = controller.layout();
        let height = to_i32(layout.options().header_height);
        let half = o.left_offset_x / 2;

        if facts.is_first_pinned {
            let rect = Rect::new(target.x + half, target.y, target.width - half, height);
            let chevron = if facts.pinned_collapsed {
                CHEVRON_RIGHT
            } else {
                CHEVRON_DOWN
            };
            canvas.draw_text(
                Rect::new(
                    rect.right() - o.chevron_inset,
                    rect.y + o.chevron_top,
                    o.chevron_size,
                    o.chevron_size,
                ),
                Align::TOP_LEFT,
                &p.fonts.icon,
                p.accent,
                chevron,
            );
            canvas.draw_text(rect, Align::CENTER_LEFT, &p.fonts.header, p.content, PINNED_HEADER);
        } else {
            let gap = layout.section_spacing(facts, true) - layout.section_spacing(facts, false);
            let rect = Rect::new(target.x + half, target.y + gap, target.width - half, height);
            canvas.draw_text(rect, Align::CENTER_LEFT, &p.fonts.header, p.content, UNPINNED_HEADER);
        }
    }
}

impl Default for RowPainter {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
