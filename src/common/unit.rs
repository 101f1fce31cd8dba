//! Coordinate unit utilities.
//!
//! Slide enumerators hand over shape geometry in whatever unit their source
//! format uses: OOXML and legacy PowerPoint report EMUs, PDF-derived layouts
//! report points, and rendered images report pixels. Detection tolerances are
//! compared directly against those coordinates, so they must be expressed in
//! the same unit. The helpers here convert a physical length (in inches) into
//! a unit-matched tolerance.

use crate::Result;
use std::fmt;
use std::str::FromStr;

pub const EMUS_PER_INCH: i64 = 914_400;
pub const POINTS_PER_INCH: f64 = 72.0;
pub const TWIPS_PER_INCH: f64 = 1440.0;
pub const DEFAULT_DPI: u32 = 96;

/// Units in which shape coordinates may be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateUnit {
    /// English Metric Unit (914 400 per inch), used by OOXML and PPT
    Emu,
    /// Point (1/72 inch)
    Point,
    /// Twip (1/1440 inch), used by RTF and legacy Word geometry
    Twip,
    /// Pixel at the given DPI
    Pixel(u32),
}

impl CoordinateUnit {
    /// Get the unit abbreviation
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emu => "emu",
            Self::Point => "pt",
            Self::Twip => "twip",
            Self::Pixel(_) => "px",
        }
    }

    /// Number of units that make up one inch.
    #[inline]
    pub fn units_per_inch(&self) -> f64 {
        match self {
            Self::Emu => EMUS_PER_INCH as f64,
            Self::Point => POINTS_PER_INCH,
            Self::Twip => TWIPS_PER_INCH,
            Self::Pixel(dpi) => *dpi as f64,
        }
    }

    /// Express a physical length in inches in this unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use pseudotable::common::unit::CoordinateUnit;
    ///
    /// assert_eq!(CoordinateUnit::Emu.from_inches(0.1), 91_440.0);
    /// assert_eq!(CoordinateUnit::Point.from_inches(0.5), 36.0);
    /// ```
    #[inline]
    pub fn from_inches(&self, inches: f64) -> f64 {
        inches * self.units_per_inch()
    }

    /// Convert a value in this unit to inches.
    #[inline]
    pub fn to_inches(&self, value: f64) -> f64 {
        value / self.units_per_inch()
    }

    fn from_str_internal(s: &str) -> Option<Self> {
        match s {
            "emu" => Some(Self::Emu),
            "pt" | "point" => Some(Self::Point),
            "twip" => Some(Self::Twip),
            "px" | "pixel" => Some(Self::Pixel(DEFAULT_DPI)),
            _ => {
                // "px@150" selects a non-default resolution
                let dpi = s.strip_prefix("px@")?.parse::<u32>().ok()?;
                (dpi > 0).then_some(Self::Pixel(dpi))
            },
        }
    }
}

impl FromStr for CoordinateUnit {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_internal(&s.trim().to_ascii_lowercase()).ok_or_else(|| {
            crate::Error::InvalidConfig(format!("Unknown coordinate unit '{}'", s))
        })
    }
}

impl fmt::Display for CoordinateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixel(dpi) if *dpi != DEFAULT_DPI => write!(f, "px@{}", dpi),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}
