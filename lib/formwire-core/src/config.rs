//! Encoder configuration types.

use std::fmt;

/// How floating point field values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FloatPrecision {
    /// Shortest representation that parses back to the same value.
    #[default]
    Shortest,
    /// Fixed number of fractional digits, rounded.
    Fixed(usize),
}

impl FloatPrecision {
    /// Sentinel digit count meaning [`FloatPrecision::Shortest`].
    pub const SHORTEST_SENTINEL: i32 = -1;

    /// Convert a digit count to a precision, treating any negative value
    /// (conventionally `-1`) as [`FloatPrecision::Shortest`].
    ///
    /// # Example
    ///
    /// ```
    /// use formwire_core::FloatPrecision;
    ///
    /// assert_eq!(FloatPrecision::from_digits(-1), FloatPrecision::Shortest);
    /// assert_eq!(FloatPrecision::from_digits(2), FloatPrecision::Fixed(2));
    /// ```
    #[must_use]
    pub fn from_digits(digits: i32) -> Self {
        usize::try_from(digits).map_or(Self::Shortest, Self::Fixed)
    }

    /// Digit count, with [`FloatPrecision::SHORTEST_SENTINEL`] for `Shortest`.
    #[must_use]
    pub fn digits(self) -> i32 {
        match self {
            Self::Shortest => Self::SHORTEST_SENTINEL,
            Self::Fixed(digits) => i32::try_from(digits).unwrap_or(i32::MAX),
        }
    }

    /// Format a 64-bit float at this precision.
    ///
    /// Infinities render as `+Inf` and `-Inf` and NaN as `NaN`, whatever the
    /// precision.
    #[must_use]
    pub fn format_f64(self, value: f64) -> String {
        if value.is_infinite() {
            return infinity(value.is_sign_positive());
        }
        match self {
            Self::Shortest => value.to_string(),
            Self::Fixed(digits) => format!("{value:.digits$}"),
        }
    }

    /// Format a 32-bit float at this precision.
    ///
    /// `Shortest` uses the shortest form of the `f32` itself, so `1.23_f32`
    /// gives `1.23` rather than the `1.2300000190734863` of the value widened
    /// to `f64`.
    #[must_use]
    pub fn format_f32(self, value: f32) -> String {
        if value.is_infinite() {
            return infinity(value.is_sign_positive());
        }
        match self {
            Self::Shortest => value.to_string(),
            Self::Fixed(digits) => format!("{value:.digits$}"),
        }
    }
}

/// Signed infinity marker.
fn infinity(positive: bool) -> String {
    if positive { "+Inf" } else { "-Inf" }.to_string()
}

impl From<i32> for FloatPrecision {
    fn from(digits: i32) -> Self {
        Self::from_digits(digits)
    }
}

impl fmt::Display for FloatPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shortest => write!(f, "shortest"),
            Self::Fixed(digits) => write!(f, "{digits} digits"),
        }
    }
}

/// Configuration for the form encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeConfig {
    /// Precision used for `f32` and `f64` fields.
    pub float_precision: FloatPrecision,
}

impl EncodeConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> EncodeConfigBuilder {
        EncodeConfigBuilder::default()
    }
}

/// Builder for [`EncodeConfig`].
#[derive(Debug, Clone, Default)]
pub struct EncodeConfigBuilder {
    float_precision: Option<FloatPrecision>,
}

impl EncodeConfigBuilder {
    /// Set the float precision.
    #[must_use]
    pub const fn float_precision(mut self, precision: FloatPrecision) -> Self {
        self.float_precision = Some(precision);
        self
    }

    /// Render floats with a fixed number of fractional digits.
    #[must_use]
    pub const fn fixed_float_digits(mut self, digits: usize) -> Self {
        self.float_precision = Some(FloatPrecision::Fixed(digits));
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> EncodeConfig {
        let defaults = EncodeConfig::default();
        EncodeConfig {
            float_precision: self.float_precision.unwrap_or(defaults.float_precision),
        }
    }
}
