use std::borrow::Cow;

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`. Returns `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        match digits.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }
}

/// An integer rectangle in canvas coordinates (y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// The top `height` units of this rect.
    pub fn top_strip(&self, height: i32) -> Self {
        Self::new(self.x, self.y, self.width, height.min(self.height))
    }

    /// The bottom `height` units of this rect.
    pub fn bottom_strip(&self, height: i32) -> Self {
        let height = height.min(self.height);
        Self::new(self.x, self.bottom() - height, self.width, height)
    }

    pub fn left_strip(&self, width: i32) -> Self {
        Self::new(self.x, self.y, width.min(self.width), self.height)
    }

    pub fn right_strip(&self, width: i32) -> Self {
        let width = width.min(self.width);
        Self::new(self.right() - width, self.y, width, self.height)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    #[default]
    Normal,
    DemiBold,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    pub family: Cow<'static, str>,
    pub point_size: u16,
    pub weight: FontWeight,
}

impl Font {
    pub fn new(family: impl Into<Cow<'static, str>>, point_size: u16) -> Self {
        Self {
            family: family.into(),
            point_size,
            weight: FontWeight::Normal,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Text placement inside its rect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Align {
    pub horizontal: HAlign,
    pub vertical: VAlign,
}

impl Align {
    pub const TOP_LEFT: Self = Self::new(HAlign::Left, VAlign::Top);
    pub const CENTER_LEFT: Self = Self::new(HAlign::Left, VAlign::Center);
    pub const BOTTOM_LEFT: Self = Self::new(HAlign::Left, VAlign::Bottom);

    pub const fn new(horizontal: HAlign, vertical: VAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Images the compositor asks the canvas to draw. The canvas owns the pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Image {
    Folder,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderHints {
    pub antialiasing: bool,
    pub smooth_pixmap_transform: bool,
}

impl RenderHints {
    pub const SMOOTH: Self = Self {
        antialiasing: true,
        smooth_pixmap_transform: true,
    };
}

/// Font metrics and text elision.
pub trait TextMetrics {
    fn text_width(&self, font: &Font, text: &str) -> i32;

    fn line_height(&self, font: &Font) -> i32;

    /// Elides `text` on the right so it fits in `max_width`.
    ///
    /// The default implementation trims characters one at a time and appends an ellipsis;
    /// backends with native elision should override it.
    fn elide_right<'a>(&self, font: &Font, text: &'a str, max_width: i32) -> Cow<'a, str> {
        if self.text_width(font, text) <= max_width {
            return Cow::Borrowed(text);
        }
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            out.push(ch);
            out.push('…');
            let fits = self.text_width(font, &out) <= max_width;
            out.pop();
            if !fits {
                out.pop();
                break;
            }
        }
        out.push('…');
        Cow::Owned(out)
    }
}

/// The 2D drawing surface rows are composited onto.
///
/// Offscreen layers are canvases of the same backend; `new_layer` returns a fully transparent
/// one, and `blit` copies a sub-rectangle of a layer into a target rectangle of this canvas.
pub trait Canvas: TextMetrics {
    type Layer: Canvas;

    fn set_render_hints(&mut self, hints: RenderHints);

    fn render_hints(&self) -> RenderHints;

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_rounded_rect(&mut self, rect: Rect, radius: i32, color: Color);

    fn draw_text(&mut self, rect: Rect, align: Align, font: &Font, color: Color, text: &str);

    fn draw_image(&mut self, rect: Rect, image: Image);

    fn new_layer(&self, width: u32, height: u32) -> Self::Layer;

    fn blit(&mut self, layer: &Self::Layer, source: Rect, target: Rect);
}
