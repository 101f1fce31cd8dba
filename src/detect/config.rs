//! Configuration for pseudo-table detection.
//!
//! # Units
//!
//! **Tolerances are absolute distances in the caller's coordinate unit.** The
//! detector compares them directly against shape `top`/`left` values and
//! never converts. The defaults (`10.0`) suit point or pixel coordinates; fed
//! EMU coordinates from an OOXML slide they are a ten-thousandth of an inch
//! and will split every jittered row. Use [`ParserOptions::for_unit`] or
//! [`ParserOptions::with_tolerance_inches`] when the unit is known.

use crate::common::unit::CoordinateUnit;
use crate::common::{Error, Result};
use crate::shape::Axis;
use serde::{Deserialize, Serialize};

/// Default alignment tolerance, in caller units.
pub const DEFAULT_TOLERANCE: f64 = 10.0;
/// Physical tolerance used by the unit presets.
pub const DEFAULT_TOLERANCE_INCHES: f64 = 0.1;
pub const DEFAULT_MIN_ROWS: usize = 3;
pub const DEFAULT_MIN_COLS: usize = 2;

/// Share of rows (or columns) whose length must sit near the median.
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.7;
/// Minimum ratio of present shapes to grid cells.
pub const DEFAULT_DENSITY_THRESHOLD: f64 = 0.7;
/// How far a row length may stray from the median and still count as consistent.
pub const DEFAULT_ROW_LENGTH_SLACK: usize = 1;
pub const DEFAULT_ROW_ALIGNMENT_WEIGHT: f64 = 0.3;
pub const DEFAULT_COLUMN_ALIGNMENT_WEIGHT: f64 = 0.3;
pub const DEFAULT_DENSITY_WEIGHT: f64 = 0.4;

/// Grid validation thresholds and confidence weights.
///
/// These are tuning policy rather than derived values; the defaults accept a
/// mostly regular grid with modest holes (merged cells, short rows) and reject
/// scattered text boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridPolicy {
    pub consistency_threshold: f64,
    pub density_threshold: f64,
    pub row_length_slack: usize,
    pub row_alignment_weight: f64,
    pub column_alignment_weight: f64,
    pub density_weight: f64,
}

impl Default for GridPolicy {
    fn default() -> Self {
        Self {
            consistency_threshold: DEFAULT_CONSISTENCY_THRESHOLD,
            density_threshold: DEFAULT_DENSITY_THRESHOLD,
            row_length_slack: DEFAULT_ROW_LENGTH_SLACK,
            row_alignment_weight: DEFAULT_ROW_ALIGNMENT_WEIGHT,
            column_alignment_weight: DEFAULT_COLUMN_ALIGNMENT_WEIGHT,
            density_weight: DEFAULT_DENSITY_WEIGHT,
        }
    }
}

impl GridPolicy {
    fn validate(&self) -> Result<()> {
        for (name, ratio) in [
            ("consistency_threshold", self.consistency_threshold),
            ("density_threshold", self.density_threshold),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, ratio
                )));
            }
        }

        let weights = [
            ("row_alignment_weight", self.row_alignment_weight),
            ("column_alignment_weight", self.column_alignment_weight),
            ("density_weight", self.density_weight),
        ];
        if let Some((name, weight)) = weights
            .iter()
            .find(|(_, w)| !w.is_finite() || *w < 0.0)
        {
            return Err(Error::InvalidConfig(format!(
                "{} must be a non-negative number, got {}",
                name, weight
            )));
        }
        if weights.iter().map(|(_, w)| w).sum::<f64>() <= 0.0 {
            return Err(Error::InvalidConfig(
                "confidence weights must not all be zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Options controlling pseudo-table detection.
///
/// # Examples
///
/// ```rust
/// use pseudotable::common::unit::CoordinateUnit;
/// use pseudotable::ParserOptions;
///
/// // Point/pixel coordinates with the default 10-unit tolerance
/// let options = ParserOptions::default();
///
/// // OOXML slide coordinates, 0.1 inch tolerance
/// let options = ParserOptions::for_unit(CoordinateUnit::Emu);
/// assert_eq!(options.x_tolerance, 91_440.0);
///
/// // Or customize
/// let options = ParserOptions::new()
///     .with_tolerance_inches(0.3, CoordinateUnit::Emu)
///     .with_min_cols(3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserOptions {
    /// Max horizontal deviation treated as the same column (caller units)
    pub x_tolerance: f64,
    /// Max vertical deviation treated as the same row (caller units)
    pub y_tolerance: f64,
    /// Minimum rows required to accept a table
    pub min_rows: usize,
    /// Minimum columns required to accept a table
    pub min_cols: usize,
    /// Validation thresholds and confidence weights
    pub policy: GridPolicy,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            x_tolerance: DEFAULT_TOLERANCE,
            y_tolerance: DEFAULT_TOLERANCE,
            min_rows: DEFAULT_MIN_ROWS,
            min_cols: DEFAULT_MIN_COLS,
            policy: GridPolicy::default(),
        }
    }
}

impl ParserOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with tolerances of [`DEFAULT_TOLERANCE_INCHES`] in `unit`.
    pub fn for_unit(unit: CoordinateUnit) -> Self {
        Self::default().with_tolerance_inches(DEFAULT_TOLERANCE_INCHES, unit)
    }

    #[inline]
    pub fn with_x_tolerance(mut self, tolerance: f64) -> Self {
        self.x_tolerance = tolerance;
        self
    }

    #[inline]
    pub fn with_y_tolerance(mut self, tolerance: f64) -> Self {
        self.y_tolerance = tolerance;
        self
    }

    /// Set both tolerances to the same value.
    #[inline]
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        self.with_x_tolerance(tolerance).with_y_tolerance(tolerance)
    }

    /// Set both tolerances to a physical length expressed in `unit`.
    #[inline]
    pub fn with_tolerance_inches(self, inches: f64, unit: CoordinateUnit) -> Self {
        self.with_tolerance(unit.from_inches(inches))
    }

    #[inline]
    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows;
        self
    }

    #[inline]
    pub fn with_min_cols(mut self, min_cols: usize) -> Self {
        self.min_cols = min_cols;
        self
    }

    #[inline]
    pub fn with_policy(mut self, policy: GridPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Alignment tolerance along `axis`.
    #[inline]
    pub fn tolerance(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x_tolerance,
            Axis::Vertical => self.y_tolerance,
        }
    }

    /// Smallest number of text shapes that could form an accepted table.
    #[inline]
    pub fn min_cells(&self) -> usize {
        self.min_rows.saturating_mul(self.min_cols)
    }

    /// Check that the options can drive a detection.
    pub fn validate(&self) -> Result<()> {
        for (name, tolerance) in [
            ("x_tolerance", self.x_tolerance),
            ("y_tolerance", self.y_tolerance),
        ] {
            if !tolerance.is_finite() || tolerance <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, tolerance
                )));
            }
        }
        if self.min_rows == 0 {
            return Err(Error::InvalidConfig("min_rows must be at least 1".to_string()));
        }
        if self.min_cols == 0 {
            return Err(Error::InvalidConfig("min_cols must be at least 1".to_string()));
        }
        self.policy.validate()
    }

    /// Load and validate options from YAML text.
    ///
    /// Missing keys take their default values.
    ///
    /// ```rust
    /// use pseudotable::ParserOptions;
    ///
    /// let options = ParserOptions::from_yaml_str("x_tolerance: 91440\ny_tolerance: 45720\n")?;
    /// assert_eq!(options.y_tolerance, 45_720.0);
    /// assert_eq!(options.min_rows, 3);
    /// # Ok::<(), pseudotable::Error>(())
    /// ```
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: Self = serde_saphyr::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Load and validate options from a YAML file.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }
}
