//! Themes supply the default [`Style`] for every built-in element type.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::ConfigError;
use crate::style::{Alignment, Dp, EdgeInsets, FontWeight, Style};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: Color,
    pub on_primary: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
}

/// Per element defaults, looked up by container and leaf builders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentStyles {
    pub row: Style,
    pub column: Style,
    pub card: Style,
    pub image: Style,
    pub text: Style,
    pub button: Style,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub palette: Palette,
    #[serde(default)]
    pub components: ComponentStyles,
}

impl Theme {
    pub fn light() -> Self {
        Self::from_palette(
            "light",
            Palette {
                primary: Color::rgb(0x25, 0x63, 0xeb),
                on_primary: Color::WHITE,
                background: Color::rgb(0xfa, 0xfa, 0xfa),
                surface: Color::WHITE,
                text: Color::rgb(0x11, 0x18, 0x27),
                muted: Color::rgb(0x6b, 0x72, 0x80),
            },
        )
    }

    pub fn dark() -> Self {
        Self::from_palette(
            "dark",
            Palette {
                primary: Color::rgb(0x60, 0xa5, 0xfa),
                on_primary: Color::rgb(0x0b, 0x12, 0x20),
                background: Color::rgb(0x0f, 0x17, 0x2a),
                surface: Color::rgb(0x1e, 0x29, 0x3b),
                text: Color::rgb(0xe5, 0xe7, 0xeb),
                muted: Color::rgb(0x9c, 0xa3, 0xaf),
            },
        )
    }

    /// Looks up a built-in preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }

    /// Derives component defaults from a palette.
    pub fn from_palette(name: impl Into<String>, palette: Palette) -> Self {
        let components = ComponentStyles {
            row: Style {
                gap: Some(Dp(8.0)),
                align: Some(Alignment::Center),
                ..Style::default()
            },
            column: Style {
                gap: Some(Dp(8.0)),
                align: Some(Alignment::Stretch),
                ..Style::default()
            },
            card: Style {
                padding: Some(EdgeInsets::uniform(16.0)),
                background: Some(palette.surface),
                corner_radius: Some(Dp(12.0)),
                border_width: Some(Dp(1.0)),
                border_color: Some(palette.muted.with_alpha(0x40)),
                ..Style::default()
            },
            image: Style {
                corner_radius: Some(Dp(0.0)),
                ..Style::default()
            },
            text: Style {
                color: Some(palette.text),
                font_size: Some(Dp(16.0)),
                font_weight: Some(FontWeight::Regular),
                ..Style::default()
            },
            button: Style {
                padding: Some(EdgeInsets::symmetric(16.0, 8.0)),
                background: Some(palette.primary),
                color: Some(palette.on_primary),
                corner_radius: Some(Dp(8.0)),
                font_weight: Some(FontWeight::Medium),
                ..Style::default()
            },
        };
        Self {
            name: name.into(),
            palette,
            components,
        }
    }

    /// Parses a theme from TOML. Missing component sections fall back to
    /// empty styles rather than to the palette-derived defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(ConfigError::from)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
