use std::collections::{BTreeMap, HashMap};

use crate::{Align, Canvas, Color, Palette, Rect, TextMetrics};

pub type TagId = i32;

/// The dot drawn in a tag's own color at the start of each chip.
pub const TAG_DOT_GLYPH: &str = "\u{f111}";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub color: Color,
}

impl Tag {
    pub fn new(id: TagId, name: impl Into<String>, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            color,
        }
    }
}

/// Read access to the tag pool.
pub trait TagLookup {
    fn tag(&self, id: TagId) -> Option<&Tag>;
}

impl TagLookup for HashMap<TagId, Tag> {
    fn tag(&self, id: TagId) -> Option<&Tag> {
        self.get(&id)
    }
}

impl TagLookup for BTreeMap<TagId, Tag> {
    fn tag(&self, id: TagId) -> Option<&Tag> {
        self.get(&id)
    }
}

impl TagLookup for [Tag] {
    fn tag(&self, id: TagId) -> Option<&Tag> {
        self.iter().find(|tag| tag.id == id)
    }
}

/// Chip geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagChipOptions {
    /// Distance from the left edge of the area to the first chip.
    pub left_margin: i32,
    pub height: i32,
    /// Horizontal gap between chips.
    pub spacing: i32,
    pub radius: i32,
    pub padding_left: i32,
    pub dot_width: i32,
    pub dot_to_label: i32,
    pub padding_right: i32,
    /// Side of the square the dot glyph is drawn in.
    pub icon_size: i32,
}

impl Default for TagChipOptions {
    fn default() -> Self {
        Self {
            left_margin: 10,
            height: 20,
            spacing: 5,
            radius: 10,
            padding_left: 5,
            dot_width: 12,
            dot_to_label: 5,
            padding_right: 7,
            icon_size: 14,
        }
    }
}

impl TagChipOptions {
    /// Total chip width for a label `label_width` wide.
    pub fn chip_width(&self, label_width: i32) -> i32 {
        self.padding_left + self.dot_width + self.dot_to_label + label_width + self.padding_right
    }
}

/// One laid out chip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagChip {
    pub tag_id: TagId,
    pub rect: Rect,
    pub icon_rect: Rect,
    pub label_rect: Rect,
}

/// Lays chips out left to right along the top of `area`.
///
/// Layout stops as soon as the running left edge reaches the right edge of `area`; the chip
/// that starts just before it is still placed even if it overflows. Tags the pool does not
/// know are skipped.
pub fn layout_tag_chips<M, T>(
    metrics: &M,
    palette: &Palette,
    options: &TagChipOptions,
    tags: &T,
    tag_ids: &[TagId],
    area: Rect,
) -> Vec<TagChip>
where
    M: TextMetrics + ?Sized,
    T: TagLookup + ?Sized,
{
    let mut chips = Vec::new();
    let mut left = area.x + options.left_margin;
    for &tag_id in tag_ids {
        if left >= area.right() {
            break;
        }
        let Some(tag) = tags.tag(tag_id) else {
            pwarn!(tag_id, "tag chip skipped: unknown tag");
            continue;
        };
        let label_width = metrics.text_width(&palette.fonts.title, &tag.name);
        let rect = Rect::new(left, area.y, options.chip_width(label_width), options.height);
        left += rect.width + options.spacing;

        let icon_rect = Rect::new(
            rect.x + options.padding_left,
            rect.y + (rect.height - options.dot_width) / 2,
            options.icon_size,
            options.icon_size,
        );
        let label_left = icon_rect.right() + options.dot_to_label;
        let label_rect = Rect::new(label_left, rect.y, rect.right() - label_left, rect.height);
        chips.push(TagChip {
            tag_id,
            rect,
            icon_rect,
            label_rect,
        });
    }
    chips
}

/// Paints chips produced by [`layout_tag_chips`].
pub fn paint_tag_list<C, T>(
    canvas: &mut C,
    palette: &Palette,
    options: &TagChipOptions,
    tags: &T,
    chips: &[TagChip],
    selected: bool,
) where
    C: Canvas + ?Sized,
    T: TagLookup + ?Sized,
{
    let fill = if selected {
        palette.chip_selected
    } else {
        palette.chip
    };
    for chip in chips {
        let Some(tag) = tags.tag(chip.tag_id) else {
            continue;
        };
        canvas.fill_rounded_rect(chip.rect, options.radius, fill);
        canvas.draw_text(
            chip.icon_rect,
            Align::TOP_LEFT,
            &palette.fonts.icon,
            tag.color,
            TAG_DOT_GLYPH,
        );
        canvas.draw_text(
            chip.label_rect,
            Align::CENTER_LEFT,
            &palette.fonts.title,
            palette.title,
            &tag.name,
        );
    }
}
