use crate::core::{delta_e_cie76, srgb_to_lab, to_eq_bits};
use crate::{Float, Rgb};

/// A color in CIELAB.
///
/// CIELAB coordinates are lightness L, ranging `0..=100` for sRGB colors, and
/// the two opponent axes a (green–red) and b (blue–yellow), roughly ranging
/// `-128..=128`. The coordinates are relative to the D65 white point, which is
/// also sRGB's white point. Lab values are derived from [`Rgb`] colors only.
///
/// ```
/// # use prettypalette::{Lab, Rgb};
/// let white = Lab::from(Rgb::new(255, 255, 255));
/// assert!((white.lightness() - 100.0).abs() < 1e-9);
///
/// let black = Lab::from(Rgb::new(0, 0, 0));
/// assert!(black.lightness().abs() < 1e-9);
/// assert!((white.distance(&black) - 100.0).abs() < 1e-9);
/// ```
///
/// Equality and hashing normalize coordinates with
/// [`to_eq_bits`](crate::to_eq_bits), which limits resolution before
/// comparing bits.
#[derive(Copy, Clone, Debug)]
pub struct Lab([Float; 3]);

impl Lab {
    /// Get the lightness L.
    pub fn lightness(&self) -> Float {
        self.0[0]
    }

    /// Compute the Euclidian distance to the other color, also known as
    /// ΔE\*<sub>ab</sub> or Delta-E 1976.
    ///
    /// Euclidian distance in CIELAB is only a rough approximation of
    /// perceived difference, but it is cheap and all that color set
    /// generation requires.
    pub fn distance(&self, other: &Lab) -> Float {
        delta_e_cie76(&self.0, &other.0)
    }
}

impl From<Rgb> for Lab {
    /// Convert the color to CIELAB via linear sRGB and XYZ. The alpha channel
    /// is ignored.
    fn from(value: Rgb) -> Self {
        let [r, g, b] = value.coordinates();
        Self(srgb_to_lab(r, g, b))
    }
}

impl From<&Rgb> for Lab {
    fn from(value: &Rgb) -> Self {
        Lab::from(*value)
    }
}

impl AsRef<[Float; 3]> for Lab {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

impl std::hash::Hash for Lab {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for c in self.0 {
            to_eq_bits(c).hash(state);
        }
    }
}

impl PartialEq for Lab {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(c1, c2)| to_eq_bits(*c1) == to_eq_bits(*c2))
    }
}

impl Eq for Lab {}

impl std::fmt::Display for Lab {
    /// Format this color in CSS notation, e.g., `lab(53.237 80.090 67.203)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [l, a, b] = self.0;
        let precision = f.precision().unwrap_or(3);
        write!(f, "lab({:.*} {:.*} {:.*})", precision, l, precision, a, precision, b)
    }
}
