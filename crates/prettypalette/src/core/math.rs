use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Since CIELAB coordinates range up to about a hundred, the factor
    /// is a few digits smaller than it would be for unit-range coordinates.
    const ROUNDING_FACTOR: Self;

    /// The absolute difference up to which test assertions consider two
    /// coordinates the same.
    #[cfg(test)]
    const TOLERANCE: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e9;
    #[cfg(test)]
    const TOLERANCE: f64 = 1e-9;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e2;
    #[cfg(test)]
    const TOLERANCE: f32 = 1e-2;
}

// ----------------------------------------------------------------------------------------------------------

/// A floating point accumulator.
///
/// Unlike plain summation with the `+` operator, this struct minimizes the
/// cumulative error by using [Kahan's algorithm with Neumaier's
/// improvements](https://en.wikipedia.org/wiki/Kahan_summation_algorithm).
/// The total pairwise distance of a palette sums up to n(n-1)/2 distances of
/// rather different magnitudes, which is exactly the case it helps with.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    sum: Float,
    compensation: Float,
}

impl Accumulator {
    #[inline]
    pub fn total(&self) -> Float {
        self.sum + self.compensation
    }
}

impl std::ops::AddAssign<Float> for Accumulator {
    fn add_assign(&mut self, rhs: Float) {
        let t = self.sum + rhs;
        if rhs.abs() < self.sum.abs() {
            self.compensation += (self.sum - t) + rhs;
        } else {
            self.compensation += (rhs - t) + self.sum;
        }
        self.sum = t;
    }
}

impl std::iter::FromIterator<Float> for Accumulator {
    fn from_iter<I: IntoIterator<Item = Float>>(iter: I) -> Self {
        let mut accum = Accumulator::default();
        for value in iter {
            accum += value;
        }
        accum
    }
}

#[cfg(test)]
mod test {
    use super::Accumulator;

    #[test]
    fn test_accumulator() {
        let mut accum = Accumulator::default();
        accum += 1.0;
        accum += 10e30;
        accum += 1.0;
        accum += -10e30;
        assert_eq!(accum.total(), 2.0);
    }

    #[test]
    fn test_collect() {
        let accum: Accumulator = [0.5, 0.25, 0.125].into_iter().collect();
        assert_eq!(accum.total(), 0.875);

        let empty: Accumulator = std::iter::empty().collect();
        assert_eq!(empty.total(), 0.0);
    }
}
