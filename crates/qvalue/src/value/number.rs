use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

///
/// CONSTANTS
///

// Magnitudes inside [EXP_LOWER, EXP_UPPER) render in plain decimal notation.
const EXP_LOWER: f64 = 1e-6;
const EXP_UPPER: f64 = 1e21;

// Integral values inside this bound serialize as JSON integers.
const F64_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

///
/// Number
///
/// Finite f64 only; -0.0 canonically stored as 0.0
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Number(f64);

impl Number {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    #[must_use]
    /// Fallible constructor that rejects non-finite values and normalizes -0.0.
    pub fn try_new(v: f64) -> Option<Self> {
        if !v.is_finite() {
            return None;
        }

        // canonicalize -0.0 to 0.0 so Eq/Hash/Ord are consistent
        Some(Self(if v == 0.0 { 0.0 } else { v }))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Integral value when the number is exactly representable as one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_safe_integer(self) -> Option<i64> {
        (self.0.fract() == 0.0 && self.0.abs() <= F64_SAFE_INTEGER).then_some(self.0 as i64)
    }
}

impl Eq for Number {}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Ord for Number {
    // non-finite values never exist and -0.0 is canonicalized,
    // so total_cmp agrees with IEEE ordering here
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.0))
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self(f64::from(n))
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Self(f64::from(n))
    }
}

impl TryFrom<f64> for Number {
    type Error = ();
    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Self::try_new(v).ok_or(())
    }
}

impl From<Number> for f64 {
    fn from(x: Number) -> Self {
        x.0
    }
}

///
/// FORMATTING
///

/// Shortest round-trippable decimal rendering.
///
/// Integers print without a fraction; magnitudes outside `[1e-6, 1e21)`
/// switch to exponent form with an explicit exponent sign (`1e+21`, `1e-7`).
#[must_use]
pub(crate) fn format_number(n: f64) -> String {
    let magnitude = n.abs();
    if magnitude != 0.0 && !(EXP_LOWER..EXP_UPPER).contains(&magnitude) {
        let text = format!("{n:e}");

        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }

    format!("{n}")
}

///
/// PARSING
///

/// Parse the longest numeric prefix of `input` after leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Trailing characters are ignored. Returns `None` when
/// no digits are present or the parsed value is not finite.
#[must_use]
pub(crate) fn parse_numeric_prefix(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    // a bare dot is consumed once a digit sits on either side of it
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // exponent only counts when at least one digit follows
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }

        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
