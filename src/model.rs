use crate::color::Color;
use schemars::JsonSchema;
use serde::de;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Center => "CENTER",
            Self::Right => "RIGHT",
        }
    }
}

impl<'de> Deserialize<'de> for HorizontalAlign {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_ascii_uppercase().as_str() {
            "LEFT" => Ok(Self::Left),
            "CENTER" => Ok(Self::Center),
            "RIGHT" => Ok(Self::Right),
            other => Err(de::Error::unknown_variant(
                other,
                &["LEFT", "CENTER", "RIGHT"],
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Middle => "MIDDLE",
            Self::Bottom => "BOTTOM",
        }
    }
}

impl<'de> Deserialize<'de> for VerticalAlign {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_ascii_uppercase().as_str() {
            "TOP" => Ok(Self::Top),
            "MIDDLE" => Ok(Self::Middle),
            "BOTTOM" => Ok(Self::Bottom),
            other => Err(de::Error::unknown_variant(
                other,
                &["TOP", "MIDDLE", "BOTTOM"],
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WrapStrategy {
    OverflowCell,
    LegacyWrap,
    Clip,
    Wrap,
}

impl<'de> Deserialize<'de> for WrapStrategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_ascii_uppercase().as_str() {
            "OVERFLOW_CELL" => Ok(Self::OverflowCell),
            "LEGACY_WRAP" => Ok(Self::LegacyWrap),
            "CLIP" => Ok(Self::Clip),
            "WRAP" => Ok(Self::Wrap),
            other => Err(de::Error::unknown_variant(
                other,
                &["OVERFLOW_CELL", "LEGACY_WRAP", "CLIP", "WRAP"],
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BorderStyle {
    Dotted,
    Dashed,
    Solid,
    SolidMedium,
    SolidThick,
    Double,
}

impl BorderStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dotted => "DOTTED",
            Self::Dashed => "DASHED",
            Self::Solid => "SOLID",
            Self::SolidMedium => "SOLID_MEDIUM",
            Self::SolidThick => "SOLID_THICK",
            Self::Double => "DOUBLE",
        }
    }
}

impl<'de> Deserialize<'de> for BorderStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_ascii_uppercase().as_str() {
            "DOTTED" => Ok(Self::Dotted),
            "DASHED" => Ok(Self::Dashed),
            "SOLID" => Ok(Self::Solid),
            "SOLID_MEDIUM" => Ok(Self::SolidMedium),
            "SOLID_THICK" => Ok(Self::SolidThick),
            "DOUBLE" => Ok(Self::Double),
            other => Err(de::Error::unknown_variant(
                other,
                &[
                    "DOTTED",
                    "DASHED",
                    "SOLID",
                    "SOLID_MEDIUM",
                    "SOLID_THICK",
                    "DOUBLE",
                ],
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberFormatType {
    Text,
    Number,
    Percent,
    Currency,
    Date,
    Time,
    DateTime,
    Scientific,
}

impl<'de> Deserialize<'de> for NumberFormatType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_ascii_uppercase().as_str() {
            "TEXT" => Ok(Self::Text),
            "NUMBER" => Ok(Self::Number),
            "PERCENT" => Ok(Self::Percent),
            "CURRENCY" => Ok(Self::Currency),
            "DATE" => Ok(Self::Date),
            "TIME" => Ok(Self::Time),
            "DATE_TIME" | "DATETIME" => Ok(Self::DateTime),
            "SCIENTIFIC" => Ok(Self::Scientific),
            other => Err(de::Error::unknown_variant(
                other,
                &[
                    "TEXT",
                    "NUMBER",
                    "PERCENT",
                    "CURRENCY",
                    "DATE",
                    "TIME",
                    "DATE_TIME",
                    "SCIENTIFIC",
                ],
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NumberFormatSpec {
    #[serde(rename = "type")]
    pub kind: NumberFormatType,
    #[serde(default)]
    pub pattern: Option<String>,
}

/// Sparse cell-format description fed by CLI flags or a JSON document.
///
/// Every field is independently optional; presence, not value, decides what
/// lands in the emitted payload and field mask.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct CellFormatSpec {
    #[serde(default, alias = "backgroundColor")]
    pub background_color: Option<Color>,
    #[serde(default)]
    pub bold: Option<bool>,
    #[serde(default)]
    pub italic: Option<bool>,
    #[serde(default)]
    pub underline: Option<bool>,
    #[serde(default)]
    pub strikethrough: Option<bool>,
    #[serde(default, alias = "fontSize")]
    pub font_size: Option<u32>,
    #[serde(default, alias = "fontFamily")]
    pub font_family: Option<String>,
    #[serde(default, alias = "foregroundColor")]
    pub foreground_color: Option<Color>,
    #[serde(default, alias = "horizontalAlignment")]
    pub horizontal_alignment: Option<HorizontalAlign>,
    #[serde(default, alias = "verticalAlignment")]
    pub vertical_alignment: Option<VerticalAlign>,
    #[serde(default, alias = "wrapStrategy")]
    pub wrap_strategy: Option<WrapStrategy>,
    #[serde(default, alias = "numberFormat")]
    pub number_format: Option<NumberFormatSpec>,
}

impl CellFormatSpec {
    pub fn is_empty(&self) -> bool {
        self.background_color.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.underline.is_none()
            && self.strikethrough.is_none()
            && self.font_size.is_none()
            && self.font_family.is_none()
            && self.foreground_color.is_none()
            && self.horizontal_alignment.is_none()
            && self.vertical_alignment.is_none()
            && self.wrap_strategy.is_none()
            && self.number_format.is_none()
    }
}

/// One edge of a border update. A missing color means opaque black.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
pub struct BorderEdgeSpec {
    pub style: BorderStyle,
    #[serde(default)]
    pub color: Option<Color>,
}

/// Up to four independently optional edges. Edges left out are omitted from
/// the emitted request entirely, so existing borders on those edges survive.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct BorderSpec {
    #[serde(default)]
    pub top: Option<BorderEdgeSpec>,
    #[serde(default)]
    pub bottom: Option<BorderEdgeSpec>,
    #[serde(default)]
    pub left: Option<BorderEdgeSpec>,
    #[serde(default)]
    pub right: Option<BorderEdgeSpec>,
}

impl BorderSpec {
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.left.is_none() && self.right.is_none()
    }
}
