use crate::{Color, Font, FontWeight};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Sepia,
}

/// Display fonts. The same for every theme; point sizes follow the platform.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fonts {
    pub title: Font,
    pub title_selected: Font,
    pub date: Font,
    pub header: Font,
    /// Glyph font for the chevron and the tag dots.
    pub icon: Font,
}

#[cfg(target_os = "macos")]
const DISPLAY_FAMILY: &str = "SF Pro Text";
#[cfg(not(target_os = "macos"))]
const DISPLAY_FAMILY: &str = "Roboto";

const ICON_FAMILY: &str = "Font Awesome 6 Free Solid";

impl Default for Fonts {
    #[cfg(target_os = "macos")]
    fn default() -> Self {
        Self {
            title: Font::new(DISPLAY_FAMILY, 13).with_weight(FontWeight::DemiBold),
            title_selected: Font::new(DISPLAY_FAMILY, 13).with_weight(FontWeight::DemiBold),
            date: Font::new(DISPLAY_FAMILY, 13),
            header: Font::new(DISPLAY_FAMILY, 10).with_weight(FontWeight::DemiBold),
            icon: Font::new(ICON_FAMILY, 14),
        }
    }

    #[cfg(not(target_os = "macos"))]
    fn default() -> Self {
        Self {
            title: Font::new(DISPLAY_FAMILY, 10).with_weight(FontWeight::DemiBold),
            title_selected: Font::new(DISPLAY_FAMILY, 10),
            date: Font::new(DISPLAY_FAMILY, 10),
            header: Font::new(DISPLAY_FAMILY, 10).with_weight(FontWeight::DemiBold),
            icon: Font::new(ICON_FAMILY, 10),
        }
    }
}

/// Every color a row is painted with, plus the display fonts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    pub title: Color,
    pub date: Color,
    pub content: Color,
    pub background: Color,
    /// Selection while the list has focus.
    pub active: Color,
    /// Selection while the list does not have focus.
    pub not_active: Color,
    pub hover: Color,
    /// Selection while the application is in the background.
    pub application_inactive: Color,
    pub separator: Color,
    pub chip: Color,
    pub chip_selected: Color,
    /// Header chevron.
    pub accent: Color,
    /// Drop-target edges while dragging.
    pub drag_indicator: Color,
    pub fonts: Fonts,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        let fonts = Fonts::default();
        let accent = Color::rgb(68, 138, 201);
        let drag_indicator = Color::rgb(0xd6, 0xd5, 0xd5);
        match theme {
            Theme::Light => Self {
                title: Color::rgb(26, 26, 26),
                date: Color::rgb(26, 26, 26),
                content: Color::rgb(142, 146, 150),
                background: Color::rgb(247, 247, 247),
                active: Color::rgb(218, 233, 239),
                not_active: Color::rgb(175, 212, 228),
                hover: Color::rgb(207, 207, 207),
                application_inactive: Color::rgb(207, 207, 207),
                separator: Color::rgb(191, 191, 191),
                chip: Color::rgb(227, 234, 243),
                chip_selected: Color::rgb(218, 235, 248),
                accent,
                drag_indicator,
                fonts,
            },
            Theme::Dark => Self {
                title: Color::rgb(255, 255, 255),
                date: Color::rgb(255, 255, 255),
                content: Color::rgba(255, 255, 255, 127),
                background: Color::rgb(25, 25, 25),
                active: Color::rgba(35, 52, 69, 127),
                not_active: Color::rgb(35, 52, 69),
                hover: Color::rgba(35, 52, 69, 127),
                application_inactive: Color::rgb(35, 52, 69),
                separator: Color::rgba(255, 255, 255, 127),
                // Dark chips ignore selection.
                chip: Color::rgb(76, 85, 97),
                chip_selected: Color::rgb(76, 85, 97),
                accent,
                drag_indicator,
                fonts,
            },
            Theme::Sepia => Self {
                background: Color::rgb(251, 240, 217),
                ..Self::for_theme(Theme::Light)
            },
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

/// Anything that has to restyle itself when the theme changes (e.g. open inline editors).
pub trait ThemeObserver {
    fn theme_changed(&mut self, theme: Theme, palette: &Palette);
}

impl ThemeObserver for () {
    fn theme_changed(&mut self, _theme: Theme, _palette: &Palette) {}
}
