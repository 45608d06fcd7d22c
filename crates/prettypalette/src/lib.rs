//! # Pretty 🎨 Palette
//!
//! Prettypalette generates sets of colors that are as easy to tell apart as
//! possible, e.g., for distinguishing the categories of a chart or the
//! regions of a segmented image.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Python integration requires the `pyffi` feature. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. "
)]
//!
//!
//! ## 1. Overview
//!
//! Prettypalette's main abstractions are:
//!
//!   * [`Rgb`] is a **24-bit color** with an additional alpha channel. It
//!     converts from and to the packed integers of other platforms.
//!   * [`Lab`] holds a color's **CIELAB coordinates**, with the Euclidian
//!     distance between them serving as measure of perceptual difference.
//!   * The [`RgbSampler`] trait abstracts over **random sampling** of colors,
//!     with [`RangeSampler`] restricting colors to a sub-cube of the RGB cube
//!     and [`Policy`] naming the two standard choices, uniform and pastel.
//!   * [`SimulatedAnnealing`] **generates color sets** by starting with
//!     random colors and then pushing apart the two closest colors according
//!     to a [`Schedule`].
//!   * [`ColorLists`] reads and writes **pre-generated color sets**.
//!
//!
//! ## 2. Generating Colors
//!
//! Generation takes a sampler and a random number generator. Seeding the
//! latter makes results reproducible.
//!
//! ```
//! # use prettypalette::{Policy, Schedule, SimulatedAnnealing};
//! # use rand::SeedableRng;
//! let generator = SimulatedAnnealing::with_schedule(
//!     Policy::Pastel.sampler(),
//!     Schedule::default().with_iterations(20).with_candidates(1_000),
//! );
//! let mut rng = rand::rngs::StdRng::seed_from_u64(13);
//! let colors = generator.generate(6, &mut rng);
//! assert_eq!(colors.len(), 6);
//!
//! for color in &colors {
//!     // Pastel colors have all channels in 128..256.
//!     assert!(color.coordinates().iter().all(|c| 128 <= *c));
//! }
//! ```
//!
//! The default schedule is calibrated for quality, not speed. With it,
//! generating a set of 50 colors takes a few seconds in release builds.
//! Applications that need many color sets of fixed size should generate
//! them once and store them as [`ColorLists`]. The `palettegen` command line
//! tool does just that.
//!
//!
//! ## 3. Optional Features
//!
//! Prettypalette supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls prettypalette's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//!
//!
//! ## 4. Acknowledgements
//!
//! The annealing algorithm follows C.A. Glasbey, G.W.A.M. van der Heijden,
//! V.F.K. Toh, and A.J. Gray, "Colour displays for categorical images,"
//! *Color Research & Application* 32(4), 2007. The conversion to CIELAB
//! reuses [Color.js](https://colorjs.io)' matrices and formulae.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod anneal;
mod core;
pub mod error;
mod lab;
mod pregen;
mod rgb;
mod sampler;
mod util;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use anneal::{Palette, Progress, Schedule, SimulatedAnnealing, STEPS_PER_ITERATION};
pub use lab::Lab;
pub use pregen::{write_line, ColorLists};
pub use rgb::Rgb;
pub use sampler::{Policy, RangeSampler, RgbSampler};
pub use util::{Env, Environment, SEED_VARIABLE};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Generate a set of `n` visually distinct colors. <i class=python-only>Python
/// only!</i>
///
/// This function uses the default schedule and returns the colors as packed
/// `0xAARRGGBB` integers in ascending order. Without a seed, it seeds the
/// random number generator from the operating system.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(signature = (n, pastel=false, seed=None))]
pub fn distinct_colors(py: Python<'_>, n: usize, pastel: bool, seed: Option<u64>) -> Vec<u32> {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let policy = if pastel { Policy::Pastel } else { Policy::Uniform };

    py.allow_threads(|| {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut colors: Vec<u32> = SimulatedAnnealing::new(policy.sampler())
            .generate(n, &mut rng)
            .into_iter()
            .map(u32::from)
            .collect();
        colors.sort_unstable();
        colors
    })
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn prettypalette(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(distinct_colors, m)?)?;
    m.add_class::<Rgb>()?;
    Ok(())
}
