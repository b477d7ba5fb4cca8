use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GanttError, GanttResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS hex string (`#rrggbb`, with an alpha byte appended
/// when not fully opaque) so event colors in config JSON stay readable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> GanttResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GanttError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Parses `#rgb`, `#rrggbb`, or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> GanttResult<Self> {
        let invalid = || GanttError::InvalidData(format!("invalid hex color `{hex}`"));
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        // Byte-offset slicing below requires ASCII; multi-byte input is
        // malformed anyway.
        if !digits.is_ascii() {
            return Err(invalid());
        }
        let byte = |slice: &str| u8::from_str_radix(slice, 16).map_err(|_| invalid());
        let channel = |value: u8| f64::from(value) / 255.0;

        let (red, green, blue, alpha) = match digits.len() {
            3 => {
                let nibble = |slice: &str| byte(slice).map(|value| value * 0x11);
                (
                    nibble(&digits[0..1])?,
                    nibble(&digits[1..2])?,
                    nibble(&digits[2..3])?,
                    0xff,
                )
            }
            6 | 8 => (
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
                if digits.len() == 8 {
                    byte(&digits[6..8])?
                } else {
                    0xff
                },
            ),
            _ => return Err(invalid()),
        };

        Ok(Self::rgba(
            channel(red),
            channel(green),
            channel(blue),
            channel(alpha),
        ))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (red, green, blue) = (byte(self.red), byte(self.green), byte(self.blue));
        if self.alpha >= 1.0 {
            format!("#{red:02x}{green:02x}{blue:02x}")
        } else {
            format!("#{red:02x}{green:02x}{blue:02x}{:02x}", byte(self.alpha))
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(D::Error::custom)
    }
}

/// One row's vertical band plus the label/tooltip text the backend needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBand {
    pub name: String,
    pub description: Option<String>,
    pub top: f64,
    pub height: f64,
}

impl RowBand {
    pub fn validate(&self) -> GanttResult<()> {
        if self.name.is_empty() {
            return Err(GanttError::InvalidData(
                "row band must carry a name".to_owned(),
            ));
        }
        if !self.top.is_finite() || !self.height.is_finite() || self.height < 0.0 {
            return Err(GanttError::InvalidData(format!(
                "row band `{}` has invalid geometry",
                self.name
            )));
        }
        Ok(())
    }
}

/// One labeled tick on the time axis. Rotation and offsets are passed
/// through from configuration for the backend to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub x: f64,
    pub label: String,
    pub rotation: f64,
    pub dx: f64,
    pub dy: f64,
}

impl AxisTick {
    pub fn validate(&self) -> GanttResult<()> {
        if !self.x.is_finite() || !self.rotation.is_finite() || !self.dx.is_finite() || !self.dy.is_finite() {
            return Err(GanttError::InvalidData(format!(
                "axis tick `{}` has non-finite geometry",
                self.label
            )));
        }
        Ok(())
    }
}

/// Label anchored inside a bar, offset from the bar origin.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLabel {
    pub text: String,
    pub dx: f64,
    pub dy: f64,
}

/// Draw command for one event bar in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub label: BarLabel,
}

impl BarRect {
    pub fn validate(&self) -> GanttResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(GanttError::InvalidData(format!(
                "bar `{}` has non-finite geometry",
                self.label.text
            )));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(GanttError::InvalidData(format!(
                "bar `{}` has negative extent",
                self.label.text
            )));
        }
        if !self.label.dx.is_finite() || !self.label.dy.is_finite() {
            return Err(GanttError::InvalidData(format!(
                "bar `{}` has non-finite label offset",
                self.label.text
            )));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn hex_parsing_accepts_short_and_long_forms() {
        assert_eq!(Color::from_hex("#fff").expect("short"), Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(
            Color::from_hex("#ff0000").expect("long"),
            Color::rgb(1.0, 0.0, 0.0)
        );
        let translucent = Color::from_hex("#00ff0080").expect("alpha");
        assert!((translucent.alpha - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn hex_parsing_rejects_malformed_input() {
        assert!(Color::from_hex("ff0000").is_err());
        assert!(Color::from_hex("#ff00").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
    }

    #[test]
    fn hex_parsing_rejects_multi_byte_input_without_panicking() {
        // "é" is two bytes, so "#é0" passes the length gate for short form.
        assert!(Color::from_hex("#\u{e9}0").is_err());
        assert!(Color::from_hex("#\u{e9}\u{e9}\u{e9}").is_err());
        assert!(Color::from_hex("#ffff\u{e9}").is_err());
    }

    #[test]
    fn hex_round_trip() {
        let color = Color::from_hex("#1a2b3c").expect("parse");
        assert_eq!(color.to_hex(), "#1a2b3c");
    }
}
