use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

/// Convert coordinates for linear sRGB to XYZ. This is a one-hop, direct conversion.
fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/lab.js
//
// Color.js adapts XYZ to D50 before converting to CIELAB. Here, CIELAB is
// relative to D65, the white point of sRGB, so that no chromatic adaptation
// is necessary. The white point is the XYZ of sRGB white, i.e., the row sums
// of the matrix above.

#[allow(clippy::excessive_precision)]
const D65_WHITE: [Float; 3] = [0.9504559270516717, 1.0, 1.0890577507598784];

/// The threshold for the linear branch near zero, 6³/29³.
const EPSILON: Float = 216.0 / 24389.0;

/// The slope of the linear branch near zero, 29³/3³.
const KAPPA: Float = 24389.0 / 27.0;

/// Convert coordinates for XYZ to CIELAB (D65). This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn compress(value: Float) -> Float {
        if value > EPSILON {
            value.cbrt()
        } else {
            KAPPA.mul_add(value, 16.0) / 116.0
        }
    }

    let fx = compress(value[0] / D65_WHITE[0]);
    let fy = compress(value[1] / D65_WHITE[1]);
    let fz = compress(value[2] / D65_WHITE[2]);

    let L = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    [L, a, b]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for sRGB to XYZ. This is a two-hop conversion.
#[inline]
fn srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = rgb_to_linear_rgb(value);
    linear_srgb_to_xyz(&linear_srgb)
}

/// Convert 24-bit sRGB coordinates to CIELAB. This is a three-hop conversion.
///
/// Since all inputs are in gamut and XYZ is non-negative for in-gamut
/// colors, the result is finite for all 2²⁴ inputs.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn srgb_to_lab(r: u8, g: u8, b: u8) -> [Float; 3] {
    let xyz = srgb_to_xyz(&from_24bit(r, g, b));
    xyz_to_lab(&xyz)
}
