//! The RGB color type shared by samplers, optimizer, and color lists.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Lab;

/// A 24-bit RGB color with an alpha channel.
///
/// An `Rgb` is an immutable value with four 8-bit channels, alpha, red,
/// green, and blue. Equality and hashing cover all four channels. Colors
/// convert to and from 32-bit integers packed as `alpha << 24 | r << 16 | g
/// << 8 | b`, which is the representation used by color list files and the
/// command line tool.
///
/// ```
/// # use prettypalette::Rgb;
/// let tangerine = Rgb::new(0xf2, 0x85, 0x00);
/// assert_eq!(tangerine.alpha(), 0xff);
/// assert_eq!(tangerine.coordinates(), [242, 133, 0]);
/// assert_eq!(u32::from(tangerine), 0xfff2_8500);
/// assert_eq!(tangerine.to_i32(), -883_456);
/// assert_eq!(Rgb::from(0xfff2_8500_u32), tangerine);
/// assert_eq!(format!("{}", tangerine), "#f28500");
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #f28500;"></div>
/// </div>
/// <br>
///
/// Since the channels are bytes, there is nothing to validate. The alpha
/// channel is carried along but ignored by [`Lab`] conversion and hence
/// distance calculations.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "prettypalette")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 4]);

impl Rgb {
    /// Create a new opaque color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([0xff, r, g, b])
    }

    /// Create a new color from its alpha channel and coordinates.
    pub const fn with_alpha(alpha: u8, r: u8, g: u8, b: u8) -> Self {
        Self([alpha, r, g, b])
    }

    /// Get this color's alpha channel.
    pub const fn alpha(&self) -> u8 {
        self.0[0]
    }

    /// Get this color's red, green, and blue coordinates.
    pub const fn coordinates(&self) -> [u8; 3] {
        [self.0[1], self.0[2], self.0[3]]
    }

    /// Convert this color to a signed packed integer.
    ///
    /// The bits are the same as for [`u32 as
    /// From<Rgb>`](struct.Rgb.html#impl-From%3CRgb%3E-for-u32). Opaque colors
    /// are negative.
    pub const fn to_i32(&self) -> i32 {
        i32::from_be_bytes(self.0)
    }

    /// Convert this color to CIELAB.
    pub fn to_lab(&self) -> Lab {
        Lab::from(*self)
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Rgb {
    /// Create a new color from a packed integer. <i class=python-only>Python
    /// only!</i>
    #[new]
    pub fn py_new(value: u32) -> Self {
        Self::from(value)
    }

    /// Convert this color to a packed unsigned integer. <i
    /// class=python-only>Python only!</i>
    pub fn __int__(&self) -> u32 {
        u32::from(*self)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        let [r, g, b] = self.coordinates();
        format!("Rgb({}, {}, {}, {})", self.alpha(), r, g, b)
    }

    /// Convert this color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// Index 0 is red, 1 is green, and 2 is blue. Use [`Rgb::alpha`] for the
    /// alpha channel.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < 3, "RGB coordinate index {} should be 0, 1, or 2", index);
        &self.0[index + 1]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb::new(value[0], value[1], value[2])
    }
}

impl From<u32> for Rgb {
    /// Unpack the four channels from the integer, most significant byte
    /// first.
    fn from(value: u32) -> Self {
        Self(value.to_be_bytes())
    }
}

impl From<i32> for Rgb {
    fn from(value: i32) -> Self {
        Self(value.to_be_bytes())
    }
}

impl From<Rgb> for u32 {
    fn from(value: Rgb) -> Self {
        u32::from_be_bytes(value.0)
    }
}

impl From<Rgb> for i32 {
    fn from(value: Rgb) -> Self {
        value.to_i32()
    }
}

impl std::fmt::Display for Rgb {
    /// Format this color in hashed hexadecimal notation.
    ///
    /// Opaque colors have six hexadecimal digits. All others have eight, with
    /// the alpha channel last, as in CSS.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [alpha, r, g, b] = self.0;
        if alpha == 0xff {
            write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, alpha)
        }
    }
}
