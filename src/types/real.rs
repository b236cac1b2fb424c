//! Compact rendering of floating-point values.

use std::fmt;

/// Significant digits used by [`Real`].
const PRECISION: i32 = 6;

/// `f64` wrapper rendering in the shortest "general" form with six
/// significant digits: `0`, `0.5`, `10`, `6.28319`, `1e-05`, `1.5e+10`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Real(pub f64);

impl Real {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v < 0.0 { "-inf" } else { "inf" });
        }
        if v == 0.0 {
            return f.write_str(if v.is_sign_negative() { "-0" } else { "0" });
        }

        // Exponent after rounding to PRECISION significant digits
        let sci = format!("{:.*e}", (PRECISION - 1) as usize, v);
        let (mantissa, exp) = match sci.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().map_err(|_| fmt::Error)?),
            None => return Err(fmt::Error),
        };

        if exp < -4 || exp >= PRECISION {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
        } else {
            let fixed = format!("{:.*}", (PRECISION - 1 - exp) as usize, v);
            f.write_str(trim_fraction(&fixed))
        }
    }
}
