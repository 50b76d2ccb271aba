//! Presentational configuration: size variants and tint.
//!
//! None of this affects transitions. The renderer receives it as a [`Style`].

use crate::config::error::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size variant of the stepper.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Size {
    /// Small
    S,
    /// Medium
    M,
    /// Large
    #[default]
    L,
}

impl Size {
    /// Parse a size name, falling back to [`Size::L`] for anything unknown.
    ///
    /// Unknown names are logged, never rejected.
    ///
    /// ```rust
    /// use cart_stepper::config::Size;
    ///
    /// assert_eq!(Size::parse_lossy("m"), Size::M);
    /// assert_eq!(Size::parse_lossy("z"), Size::L);
    /// ```
    pub fn parse_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|issue: ConfigIssue| {
            tracing::warn!(%issue, "falling back to default size");
            Self::default()
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
        }
    }

    /// Font and icon metrics for this variant.
    pub fn metrics(&self) -> SizeMetrics {
        let (points, icon) = match self {
            Self::S => (14, 22),
            Self::M => (16, 24),
            Self::L => (18, 28),
        };
        SizeMetrics {
            label_font: Font {
                points,
                weight: FontWeight::Regular,
            },
            badge_font: Font {
                points,
                weight: FontWeight::Bold,
            },
            icon: IconSize {
                width: icon,
                height: icon,
            },
        }
    }
}

impl FromStr for Size {
    type Err = ConfigIssue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Self::S),
            "M" => Ok(Self::M),
            "L" => Ok(Self::L),
            _ => Err(ConfigIssue::UnknownSize(s.to_string())),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Font {
    pub points: u16,
    pub weight: FontWeight,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IconSize {
    pub width: u16,
    pub height: u16,
}

/// Everything a size variant decides.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SizeMetrics {
    /// Font of the count label in the expanded row.
    pub label_font: Font,
    /// Font of the quantity badge on the collapsed icon.
    pub badge_font: Font,
    /// Size of the cart, plus and minus icons.
    pub icon: IconSize,
}

/// Accent color of the icons and the active badge background.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Tint {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            red: 250,
            green: 0,
            blue: 80,
        }
    }
}

impl Tint {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// `#RRGGBB` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for Tint {
    type Err = ConfigIssue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigIssue::InvalidTint(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// What the renderer needs to draw the stepper.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Style {
    pub size: Size,
    pub metrics: SizeMetrics,
    pub tint: Tint,
}

impl Style {
    pub fn new(size: Size, tint: Tint) -> Self {
        Self {
            size,
            metrics: size.metrics(),
            tint,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Size::default(), Tint::default())
    }
}
