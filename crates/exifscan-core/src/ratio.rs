//! Rational numbers as stored in TIFF RATIONAL/SRATIONAL fields.

/// A rational number reduced to lowest terms.
///
/// Signed and unsigned fields share this type; unsigned 32-bit components
/// always fit the `i64` fields. A zero denominator is kept as read so the
/// original bytes stay recoverable, and `decimal` projects such values to
/// the bare numerator (EXIF writers emit `n/0` for unused features).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Ratio {
    pub num: i64,
    pub den: i64,
}

impl Ratio {
    /// Create a ratio, reducing by the greatest common divisor.
    pub fn new(num: i64, den: i64) -> Self {
        if den == 0 {
            return Self { num, den };
        }
        let g = gcd(num.unsigned_abs(), den.unsigned_abs()) as i64;
        // normalize the sign onto the numerator
        let sign = if den < 0 { -1 } else { 1 };
        Self {
            num: sign * num / g,
            den: sign * den / g,
        }
    }

    /// Decimal projection. Zero denominators yield the numerator.
    pub fn decimal(self) -> f64 {
        if self.den == 0 {
            self.num as f64
        } else {
            self.num as f64 / self.den as f64
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a.max(1)
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_on_construction() {
        let r = Ratio::new(10, 20);
        assert_eq!((r.num, r.den), (1, 2));
        let r = Ratio::new(300, 100);
        assert_eq!((r.num, r.den), (3, 1));
    }

    #[test]
    fn zero_denominator_preserved() {
        let r = Ratio::new(7, 0);
        assert_eq!((r.num, r.den), (7, 0));
        assert_eq!(r.decimal(), 7.0);
    }

    #[test]
    fn sign_normalized() {
        let r = Ratio::new(1, -2);
        assert_eq!((r.num, r.den), (-1, 2));
        assert_eq!(Ratio::new(-4, -8), Ratio::new(1, 2));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Ratio::new(1, 3).to_string(), "1/3");
        // whole numbers print without the denominator
        assert_eq!(Ratio::new(6, 2).to_string(), "3");
        assert_eq!(Ratio::new(-2, 6).to_string(), "-1/3");
    }

    #[test]
    fn decimal_projection() {
        assert_eq!(Ratio::new(1, 4).decimal(), 0.25);
        assert_eq!(Ratio::new(0, 10).decimal(), 0.0);
    }
}
