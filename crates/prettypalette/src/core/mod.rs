mod conversion;
mod difference;
mod equality;
mod math;

// conversion
pub(crate) use conversion::srgb_to_lab;

// difference
pub(crate) use difference::{delta_e_cie76, find_closest_pair};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_lab;
pub use equality::to_eq_bits;

// math
pub(crate) use math::{Accumulator, FloatExt};
