//! Random sampling of RGB colors.
//!
//! [`RgbSampler`] captures the two ways color set generation draws colors:
//! anywhere in the sampler's range or within a small box around a color.
//! [`RangeSampler`] implements both for an arbitrary sub-cube of the RGB
//! cube, with [`RangeSampler::UNIFORM`] and [`RangeSampler::PASTEL`] as the
//! two ready-made configurations. Samplers hold no random state. Instead, the
//! random number generator is an argument to every method, which keeps
//! samplers immutable and lets callers seed generation for reproducible
//! results.

use std::ops::Range;

use rand::Rng;

use crate::error::RangeError;
use crate::Rgb;

/// A source of random colors.
pub trait RgbSampler {
    /// Draw a color from anywhere in this sampler's range.
    fn sample_any<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb;

    /// Draw a color from the box around the center.
    ///
    /// The box extends `max_distance` in either direction along each of the
    /// three axes, i.e., it spans `(2 * max_distance + 1)³` colors, minus
    /// those outside this sampler's range.
    fn sample_within_box<R: Rng + ?Sized>(&self, rng: &mut R, center: Rgb, max_distance: u8)
        -> Rgb;
}

impl<S: RgbSampler + ?Sized> RgbSampler for &S {
    fn sample_any<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        (**self).sample_any(rng)
    }

    fn sample_within_box<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        center: Rgb,
        max_distance: u8,
    ) -> Rgb {
        (**self).sample_within_box(rng, center, max_distance)
    }
}

// ====================================================================================================================

/// The range for all 8-bit values.
const FULL_RANGE: Range<u16> = 0..256;

/// The range for pastel colors.
const PASTEL_RANGE: Range<u16> = 128..256;

/// A sampler drawing colors uniformly from a sub-cube of the RGB cube.
///
/// Each channel has its own half-open range `min..max`. Sampling anywhere
/// draws each channel independently and uniformly from its range. Sampling
/// within a box first intersects the box with the ranges, so that a sampler
/// never produces colors outside its sub-cube.
///
/// ```
/// # use prettypalette::{RangeSampler, Rgb, RgbSampler};
/// # use rand::SeedableRng;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(665);
/// let sampler = RangeSampler::PASTEL;
///
/// let color = sampler.sample_any(&mut rng);
/// assert!(color.coordinates().iter().all(|c| 128 <= *c));
///
/// let nearby = sampler.sample_within_box(&mut rng, Rgb::new(128, 200, 255), 2);
/// let [r, g, b] = nearby.coordinates();
/// assert!((128..=130).contains(&r));
/// assert!((198..=202).contains(&g));
/// assert!((253..=255).contains(&b));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RangeSampler {
    ranges: [Range<u16>; 3],
}

impl RangeSampler {
    /// The sampler covering the entire RGB cube.
    pub const UNIFORM: RangeSampler = RangeSampler {
        ranges: [FULL_RANGE, FULL_RANGE, FULL_RANGE],
    };

    /// The sampler covering pastel colors, i.e., the sub-cube with all
    /// channels in `128..256`.
    pub const PASTEL: RangeSampler = RangeSampler {
        ranges: [PASTEL_RANGE, PASTEL_RANGE, PASTEL_RANGE],
    };

    /// Create a new sampler with the given channel ranges.
    ///
    /// This function fails if any range is empty or extends past 256.
    pub fn new(r: Range<u16>, g: Range<u16>, b: Range<u16>) -> Result<Self, RangeError> {
        let ranges = [r, g, b];
        for (channel, range) in ranges.iter().enumerate() {
            if range.is_empty() || FULL_RANGE.end < range.end {
                return Err(RangeError::new(channel, range.clone()));
            }
        }

        Ok(Self { ranges })
    }

    /// Get the channel ranges.
    pub fn ranges(&self) -> &[Range<u16>; 3] {
        &self.ranges
    }

    /// Determine whether the color's coordinates fall into this sampler's
    /// ranges.
    pub fn contains(&self, color: &Rgb) -> bool {
        color
            .coordinates()
            .iter()
            .zip(self.ranges.iter())
            .all(|(c, range)| range.contains(&(*c as u16)))
    }

    #[inline]
    fn draw<R: Rng + ?Sized>(rng: &mut R, range: Range<u16>) -> u8 {
        // Ranges are non-empty and end at 256 at most.
        rng.random_range(range) as u8
    }

    #[inline]
    fn draw_near<R: Rng + ?Sized>(rng: &mut R, range: &Range<u16>, center: u8, distance: u8) -> u8 {
        // A center outside the range is first moved to the nearest in-range
        // value. Otherwise, the box could miss the range entirely.
        let center = (center as u16).clamp(range.start, range.end - 1);
        let lower = range.start.max(center.saturating_sub(distance as u16));
        let upper = range.end.min(center + distance as u16 + 1);
        Self::draw(rng, lower..upper)
    }
}

impl Default for RangeSampler {
    fn default() -> Self {
        Self::UNIFORM
    }
}

impl RgbSampler for RangeSampler {
    fn sample_any<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        let [r, g, b] = &self.ranges;
        Rgb::new(
            Self::draw(rng, r.clone()),
            Self::draw(rng, g.clone()),
            Self::draw(rng, b.clone()),
        )
    }

    fn sample_within_box<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        center: Rgb,
        max_distance: u8,
    ) -> Rgb {
        let [r, g, b] = &self.ranges;
        Rgb::new(
            Self::draw_near(rng, r, center[0], max_distance),
            Self::draw_near(rng, g, center[1], max_distance),
            Self::draw_near(rng, b, center[2], max_distance),
        )
    }
}

// ====================================================================================================================

/// The two sampling policies.
///
/// ```
/// # use prettypalette::{Policy, RangeSampler};
/// let policy: Policy = "pastel".parse().unwrap();
/// assert_eq!(policy, Policy::Pastel);
/// assert_eq!(policy.sampler(), RangeSampler::PASTEL);
/// assert_eq!(format!("{}", Policy::Uniform), "uniform");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Sample from the entire RGB cube.
    #[default]
    Uniform,
    /// Sample pastel colors only.
    Pastel,
}

impl Policy {
    /// Get the sampler for this policy.
    pub const fn sampler(&self) -> RangeSampler {
        match self {
            Self::Uniform => RangeSampler::UNIFORM,
            Self::Pastel => RangeSampler::PASTEL,
        }
    }

    /// Get this policy's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Pastel => "pastel",
        }
    }
}

impl std::str::FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(Self::Uniform),
            "pastel" => Ok(Self::Pastel),
            _ => Err(format!(
                "sampling policy should be `uniform` or `pastel` but is `{}`",
                s
            )),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::{Policy, RangeSampler, RgbSampler};
    use crate::error::RangeError;
    use crate::Rgb;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new() {
        assert_eq!(
            RangeSampler::new(0..256, 0..256, 0..256),
            Ok(RangeSampler::UNIFORM)
        );
        assert_eq!(
            RangeSampler::new(128..256, 128..256, 128..256),
            Ok(RangeSampler::PASTEL)
        );
        assert_eq!(
            RangeSampler::new(0..256, 10..10, 0..256),
            Err(RangeError::new(1, 10..10))
        );
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = 200..100;
        assert_eq!(
            RangeSampler::new(inverted.clone(), 0..1, 0..1),
            Err(RangeError::new(0, inverted))
        );
        assert_eq!(
            RangeSampler::new(0..1, 0..1, 0..257),
            Err(RangeError::new(2, 0..257))
        );
    }

    #[test]
    fn test_sample_any_stays_in_range() -> Result<(), RangeError> {
        let mut rng = StdRng::seed_from_u64(42);
        let sampler = RangeSampler::new(10..20, 100..101, 250..256)?;

        for _ in 0..1_000 {
            let color = sampler.sample_any(&mut rng);
            assert!(sampler.contains(&color), "{:?} out of range", color);
            assert_eq!(color[1], 100);
            assert_eq!(color.alpha(), 0xff);
        }

        for _ in 0..1_000 {
            let color = RangeSampler::PASTEL.sample_any(&mut rng);
            assert!(color.coordinates().iter().all(|c| 128 <= *c));
        }

        Ok(())
    }

    #[test]
    fn test_sample_any_covers_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 256];
        for _ in 0..20_000 {
            let color = RangeSampler::UNIFORM.sample_any(&mut rng);
            seen[color[0] as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_box_in_the_middle() {
        let mut rng = StdRng::seed_from_u64(3);
        let center = Rgb::new(100, 150, 200);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..5_000 {
            let color = RangeSampler::UNIFORM.sample_within_box(&mut rng, center, 2);
            for (c, m) in color.coordinates().iter().zip(center.coordinates().iter()) {
                assert!(c.abs_diff(*m) <= 2, "{:?} too far from {:?}", color, center);
            }
            seen.insert(color);
        }

        // The box contains 5x5x5 colors, all of which should show up.
        assert_eq!(seen.len(), 125);
    }

    #[test]
    fn test_box_at_the_edges() {
        let mut rng = StdRng::seed_from_u64(11);

        let corner = Rgb::new(0, 255, 0);
        for _ in 0..1_000 {
            let color = RangeSampler::UNIFORM.sample_within_box(&mut rng, corner, 2);
            let [r, g, b] = color.coordinates();
            assert!(r <= 2 && 253 <= g && b <= 2, "{:?}", color);
        }

        let pastel_edge = Rgb::new(128, 255, 129);
        for _ in 0..1_000 {
            let color = RangeSampler::PASTEL.sample_within_box(&mut rng, pastel_edge, 2);
            let [r, g, b] = color.coordinates();
            assert!((128..=130).contains(&r), "{:?}", color);
            assert!(253 <= g, "{:?}", color);
            assert!((128..=131).contains(&b), "{:?}", color);
        }
    }

    #[test]
    fn test_box_with_center_outside_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let dark = Rgb::new(0, 10, 127);

        for _ in 0..1_000 {
            let color = RangeSampler::PASTEL.sample_within_box(&mut rng, dark, 2);
            assert!(RangeSampler::PASTEL.contains(&color), "{:?}", color);
            assert!(color.coordinates().iter().all(|c| *c <= 130));
        }
    }

    #[test]
    fn test_zero_distance() {
        let mut rng = StdRng::seed_from_u64(1);
        let center = Rgb::new(1, 2, 3);
        assert_eq!(
            RangeSampler::UNIFORM.sample_within_box(&mut rng, center, 0),
            center
        );
    }

    #[test]
    fn test_policy() {
        assert_eq!("uniform".parse::<Policy>(), Ok(Policy::Uniform));
        assert!("neon".parse::<Policy>().is_err());
        assert_eq!(Policy::default().sampler(), RangeSampler::default());
        assert_eq!(Policy::Pastel.to_string(), "pastel");
    }
}
