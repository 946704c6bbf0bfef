//! Resolved style records and the directives that build them.
//!
//! A [`Style`] starts from the theme default for an element type and is then
//! refined by [`StyleProp`] directives applied in the order they were listed.
//! Later directives override earlier ones, and all override the theme.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Density independent length.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dp(pub f32);

// Bitwise fallback keeps NaN lengths equal to themselves.
impl PartialEq for Dp {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 || self.0.to_bits() == other.0.to_bits()
    }
}

impl From<f32> for Dp {
    fn from(value: f32) -> Self {
        Dp(value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: Dp,
    pub right: Dp,
    pub bottom: Dp,
    pub left: Dp,
}

impl EdgeInsets {
    pub fn uniform(all: f32) -> Self {
        Self::from_components(all, all, all, all)
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::from_components(vertical, horizontal, vertical, horizontal)
    }

    pub fn from_components(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top: Dp(top),
            right: Dp(right),
            bottom: Dp(bottom),
            left: Dp(left),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Start,
    Center,
    End,
    Stretch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    Regular,
    Medium,
    Bold,
}

/// Style record attached to a node. Unset fields are left to the consumer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<EdgeInsets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<EdgeInsets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<Dp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<Dp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<Dp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Dp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify: Option<Justify>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies each directive in order on top of `self`.
    pub fn refined<'a>(mut self, directives: impl IntoIterator<Item = &'a StyleProp>) -> Self {
        for directive in directives {
            directive.apply(&mut self);
        }
        self
    }
}

/// A single style directive. Directives are cheap to clone and can be
/// applied any number of times, once per render pass.
#[derive(Clone)]
pub struct StyleProp {
    name: &'static str,
    apply: Rc<dyn Fn(&mut Style)>,
}

impl StyleProp {
    /// Builds a directive from an arbitrary mutation.
    pub fn custom(name: &'static str, apply: impl Fn(&mut Style) + 'static) -> Self {
        Self {
            name,
            apply: Rc::new(apply),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, style: &mut Style) {
        (self.apply)(style);
    }

    pub fn padding(all: f32) -> Self {
        let insets = EdgeInsets::uniform(all);
        Self::custom("padding", move |style| style.padding = Some(insets))
    }

    pub fn padding_symmetric(horizontal: f32, vertical: f32) -> Self {
        let insets = EdgeInsets::symmetric(horizontal, vertical);
        Self::custom("padding", move |style| style.padding = Some(insets))
    }

    pub fn padding_each(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        let insets = EdgeInsets::from_components(top, right, bottom, left);
        Self::custom("padding", move |style| style.padding = Some(insets))
    }

    pub fn margin(all: f32) -> Self {
        let insets = EdgeInsets::uniform(all);
        Self::custom("margin", move |style| style.margin = Some(insets))
    }

    pub fn gap(gap: f32) -> Self {
        Self::custom("gap", move |style| style.gap = Some(Dp(gap)))
    }

    pub fn width(width: f32) -> Self {
        Self::custom("width", move |style| style.width = Some(Dp(width)))
    }

    pub fn height(height: f32) -> Self {
        Self::custom("height", move |style| style.height = Some(Dp(height)))
    }

    pub fn size(width: f32, height: f32) -> Self {
        Self::custom("size", move |style| {
            style.width = Some(Dp(width));
            style.height = Some(Dp(height));
        })
    }

    pub fn background(color: Color) -> Self {
        Self::custom("background", move |style| style.background = Some(color))
    }

    pub fn color(color: Color) -> Self {
        Self::custom("color", move |style| style.color = Some(color))
    }

    pub fn border(width: f32, color: Color) -> Self {
        Self::custom("border", move |style| {
            style.border_width = Some(Dp(width));
            style.border_color = Some(color);
        })
    }

    pub fn corner_radius(radius: f32) -> Self {
        Self::custom("corner_radius", move |style| {
            style.corner_radius = Some(Dp(radius))
        })
    }

    pub fn font_size(size: f32) -> Self {
        Self::custom("font_size", move |style| style.font_size = Some(Dp(size)))
    }

    pub fn font_weight(weight: FontWeight) -> Self {
        Self::custom("font_weight", move |style| style.font_weight = Some(weight))
    }

    pub fn align(align: Alignment) -> Self {
        Self::custom("align", move |style| style.align = Some(align))
    }

    pub fn justify(justify: Justify) -> Self {
        Self::custom("justify", move |style| style.justify = Some(justify))
    }
}

impl fmt::Debug for StyleProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StyleProp").field(&self.name).finish()
    }
}
