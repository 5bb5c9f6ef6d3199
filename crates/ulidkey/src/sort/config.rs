use crate::sort::hll::{MAX_PRECISION, MIN_PRECISION};

/// Tuning knobs for [`SortAbbreviator`](crate::SortAbbreviator).
///
/// The defaults are the long-standing thresholds of the index type:
///
/// | field | default |
/// |---|---|
/// | `min_rows` | 10 000 |
/// | `min_inputs` | 10 000 |
/// | `cardinality_ceiling` | 100 000.0 |
/// | `rows_per_distinct` | 2 000.0 |
/// | `fudge` | 0.5 |
/// | `precision` | 10 (1024 registers) |
///
/// ```
/// use ulidkey::AbbrevConfig;
///
/// let config = AbbrevConfig::default().with_min_rows(100).with_precision(30);
/// assert_eq!(config.min_rows(), 100);
/// assert_eq!(config.precision(), 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbbrevConfig {
    min_rows: usize,
    min_inputs: u64,
    cardinality_ceiling: f64,
    rows_per_distinct: f64,
    fudge: f64,
    precision: u8,
}

impl Default for AbbrevConfig {
    fn default() -> Self {
        Self {
            min_rows: 10_000,
            min_inputs: 10_000,
            cardinality_ceiling: 100_000.0,
            rows_per_distinct: 2_000.0,
            fudge: 0.5,
            precision: 10,
        }
    }
}

impl AbbrevConfig {
    /// The table size below which no estimate is taken.
    #[must_use]
    pub const fn with_min_rows(mut self, rows: usize) -> Self {
        self.min_rows = rows;
        self
    }

    /// The number of converted values below which no estimate is taken.
    #[must_use]
    pub const fn with_min_inputs(mut self, inputs: u64) -> Self {
        self.min_inputs = inputs;
        self
    }

    /// Above this many distinct prefixes, abbreviation is kept for good.
    #[must_use]
    pub const fn with_cardinality_ceiling(mut self, ceiling: f64) -> Self {
        self.cardinality_ceiling = ceiling;
        self
    }

    /// Abort once there are more than this many inputs per distinct prefix.
    #[must_use]
    pub const fn with_rows_per_distinct(mut self, rows: f64) -> Self {
        self.rows_per_distinct = rows;
        self
    }

    /// Constant added to the abort floor.
    #[must_use]
    pub const fn with_fudge(mut self, fudge: f64) -> Self {
        self.fudge = fudge;
        self
    }

    /// HyperLogLog precision; clamped to `4..=16`.
    #[must_use]
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision.clamp(MIN_PRECISION, MAX_PRECISION);
        self
    }

    pub const fn min_rows(&self) -> usize {
        self.min_rows
    }

    pub const fn min_inputs(&self) -> u64 {
        self.min_inputs
    }

    pub const fn cardinality_ceiling(&self) -> f64 {
        self.cardinality_ceiling
    }

    pub const fn rows_per_distinct(&self) -> f64 {
        self.rows_per_distinct
    }

    pub const fn fudge(&self) -> f64 {
        self.fudge
    }

    pub const fn precision(&self) -> u8 {
        self.precision
    }

    /// The distinct-count floor under which `inputs` values abort.
    pub(crate) fn abort_floor(&self, inputs: u64) -> f64 {
        inputs as f64 / self.rows_per_distinct + self.fudge
    }
}
