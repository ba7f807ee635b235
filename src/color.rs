use crate::errors::ColorError;
use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::de;
use serde::{Deserialize, Serialize};

/// RGBA color with channels normalized to `[0.0, 1.0]`, the shape the cell
/// grid API consumes.
///
/// Deserializes from either a token string (`"#4285f4"`, `"orange"`) or an
/// explicit channel object; always serializes as the channel object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };

    pub const WHITE: Color = Color {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };

    /// Channels outside the unit interval are clamped, not rejected.
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: red.clamp(0.0, 1.0),
            green: green.clamp(0.0, 1.0),
            blue: blue.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn opaque(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// `#rrggbb` rendering for diagnostics; alpha is dropped.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8
        )
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorInput {
            Token(String),
            Channels {
                #[serde(default)]
                red: f64,
                #[serde(default)]
                green: f64,
                #[serde(default)]
                blue: f64,
                #[serde(default = "opaque_alpha")]
                alpha: f64,
            },
        }

        match ColorInput::deserialize(deserializer)? {
            ColorInput::Token(token) => parse_color(&token).map_err(de::Error::custom),
            ColorInput::Channels {
                red,
                green,
                blue,
                alpha,
            } => Ok(Color::new(red, green, blue, alpha)),
        }
    }
}

fn opaque_alpha() -> f64 {
    1.0
}

const NAMED_COLORS: [(&str, Color); 12] = [
    ("red", Color { red: 1.0, green: 0.0, blue: 0.0, alpha: 1.0 }),
    ("green", Color { red: 0.0, green: 1.0, blue: 0.0, alpha: 1.0 }),
    ("blue", Color { red: 0.0, green: 0.0, blue: 1.0, alpha: 1.0 }),
    ("yellow", Color { red: 1.0, green: 1.0, blue: 0.0, alpha: 1.0 }),
    ("orange", Color { red: 1.0, green: 0.65, blue: 0.0, alpha: 1.0 }),
    ("purple", Color { red: 0.5, green: 0.0, blue: 0.5, alpha: 1.0 }),
    ("pink", Color { red: 1.0, green: 0.75, blue: 0.8, alpha: 1.0 }),
    ("white", Color { red: 1.0, green: 1.0, blue: 1.0, alpha: 1.0 }),
    ("black", Color { red: 0.0, green: 0.0, blue: 0.0, alpha: 1.0 }),
    ("gray", Color { red: 0.5, green: 0.5, blue: 0.5, alpha: 1.0 }),
    ("lightgray", Color { red: 0.83, green: 0.83, blue: 0.83, alpha: 1.0 }),
    ("darkgray", Color { red: 0.66, green: 0.66, blue: 0.66, alpha: 1.0 }),
];

static HEX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#?[0-9A-Fa-f]{6}$").expect("regex"));

/// Map a user-facing color token to channel values.
///
/// Accepts 6-digit hex with an optional leading `#`, or one of the named
/// colors (case-insensitive). Anything else is an error; tokens are never
/// silently defaulted.
pub fn parse_color(token: &str) -> Result<Color, ColorError> {
    if HEX_RE.is_match(token) {
        let hex = token.strip_prefix('#').unwrap_or(token);
        let rgb = u32::from_str_radix(hex, 16).unwrap_or(0);
        return Ok(Color {
            red: ((rgb >> 16) & 0xFF) as f64 / 255.0,
            green: ((rgb >> 8) & 0xFF) as f64 / 255.0,
            blue: (rgb & 0xFF) as f64 / 255.0,
            alpha: 1.0,
        });
    }

    let lowered = token.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, color)| *color)
        .ok_or_else(|| ColorError::InvalidToken(token.to_string()))
}

pub(crate) fn accepted_color_hint() -> String {
    let names: Vec<&str> = NAMED_COLORS.iter().map(|(name, _)| *name).collect();
    format!("6-digit hex like '#4285f4' or one of: {}", names.join(", "))
}
