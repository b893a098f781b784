//! Significant-digit number rendering for coordinates.
//!
//! Coordinates are written the way C's `%.Ng` conversion writes them: `N`
//! significant digits, trailing zeros removed, and scientific notation when
//! the decimal exponent is below -4 or at least `N`.

use std::fmt;

use crate::buffer::{Buffer, bprintf_noindent};

/// Coordinate tuple format fixed at document creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateFormat {
    precision: usize,
}

impl CoordinateFormat {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Significant digits per component.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// A single value rendered at this format's precision.
    pub fn number(&self, value: f64) -> Significant {
        Significant::new(value, self.precision)
    }

    /// Write `x,y ` without an indent prefix.
    pub(crate) fn write_2d(&self, buf: &mut Buffer, x: f64, y: f64) -> usize {
        bprintf_noindent!(buf, "{},{} ", self.number(x), self.number(y))
    }

    /// Write `x,y,z ` without an indent prefix.
    pub(crate) fn write_3d(&self, buf: &mut Buffer, x: f64, y: f64, z: f64) -> usize {
        bprintf_noindent!(
            buf,
            "{},{},{} ",
            self.number(x),
            self.number(y),
            self.number(z)
        )
    }
}

/// A float displayed with a fixed number of significant digits.
#[derive(Debug, Clone, Copy)]
pub struct Significant {
    value: f64,
    precision: usize,
}

impl Significant {
    /// A precision of zero is treated as one, as `%.0g` does.
    pub fn new(value: f64, precision: usize) -> Self {
        Self {
            value,
            precision: precision.max(1),
        }
    }
}

impl fmt::Display for Significant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value;

        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // Round once in scientific form; the exponent after rounding picks the style.
        let sci = format!("{:.*e}", self.precision - 1, value);
        let (mantissa, exponent) = match sci.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (sci.as_str(), 0),
        };

        let precision = self.precision as i32;
        if exponent < -4 || exponent >= precision {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                strip_fraction_zeros(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (precision - 1 - exponent) as usize;
            let fixed = format!("{:.*}", decimals, value);
            f.write_str(strip_fraction_zeros(&fixed))
        }
    }
}

/// Drop trailing zeros after the decimal point, and the point itself if bare.
fn strip_fraction_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
