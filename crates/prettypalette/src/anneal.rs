//! Generation of distinct color sets by simulated annealing.
//!
//! The algorithm follows C.A. Glasbey et al., "Colour displays for
//! categorical images" (2007). It starts out with randomly sampled colors and
//! then repeatedly replaces one of the two colors closest to each other in
//! CIELAB. Replacement candidates are sampled anywhere in the sampler's range
//! early on and increasingly from the immediate neighborhood of the color
//! later on. Candidates that increase the minimum distance are always
//! accepted, others with a probability decreasing with temperature.

use std::collections::HashSet;

use log::{debug, trace};
use rand::Rng;

use crate::core::{find_closest_pair, Accumulator};
use crate::sampler::RgbSampler;
use crate::{Float, Lab, Rgb};

/// The number of refinement steps per iteration.
pub const STEPS_PER_ITERATION: usize = 2;

/// The parameters of simulated annealing.
///
/// The default schedule runs 100 iterations, starting with temperature 10 and
/// cooling by a factor of 0.9 per iteration. Each refinement step considers up
/// to 25,600 candidates and stops early after accepting a tenth of those. The
/// neighborhood of a color is the 5x5x5 box centered on it.
///
/// ```
/// # use prettypalette::Schedule;
/// let schedule = Schedule::default();
/// assert_eq!(schedule.iterations(), 100);
/// assert_eq!(schedule.acceptance_cap(), 2_560);
///
/// let quick = Schedule::default().with_iterations(20).with_candidates(1_000);
/// assert_eq!(quick.acceptance_cap(), 100);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    iterations: usize,
    initial_temperature: Float,
    cooling: Float,
    candidates: usize,
    acceptance_cap: usize,
    box_distance: u8,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            iterations: 100,
            initial_temperature: 10.0,
            cooling: 0.9,
            candidates: 25_600,
            acceptance_cap: 2_560,
            box_distance: 2,
        }
    }
}

impl Schedule {
    /// Update the number of iterations.
    #[must_use = "method returns updated schedule and does not mutate original value"]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Update the initial temperature and the cooling factor.
    ///
    /// At temperature zero, refinement only accepts candidates that strictly
    /// increase the distance to the closest color.
    #[must_use = "method returns updated schedule and does not mutate original value"]
    pub fn with_temperature(mut self, initial: Float, cooling: Float) -> Self {
        self.initial_temperature = initial;
        self.cooling = cooling;
        self
    }

    /// Update the number of candidates per refinement step. This method also
    /// resets the acceptance cap to a tenth of the candidates.
    #[must_use = "method returns updated schedule and does not mutate original value"]
    pub fn with_candidates(mut self, candidates: usize) -> Self {
        self.candidates = candidates;
        self.acceptance_cap = candidates / 10;
        self
    }

    /// Update the number of accepted candidates that ends a refinement step.
    #[must_use = "method returns updated schedule and does not mutate original value"]
    pub fn with_acceptance_cap(mut self, cap: usize) -> Self {
        self.acceptance_cap = cap;
        self
    }

    /// Update the distance from the center to the faces of the box used for
    /// local sampling.
    #[must_use = "method returns updated schedule and does not mutate original value"]
    pub fn with_box_distance(mut self, distance: u8) -> Self {
        self.box_distance = distance;
        self
    }

    /// Get the number of iterations.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Get the initial temperature.
    pub fn initial_temperature(&self) -> Float {
        self.initial_temperature
    }

    /// Get the cooling factor.
    pub fn cooling(&self) -> Float {
        self.cooling
    }

    /// Get the maximum number of candidates per refinement step.
    pub fn candidates(&self) -> usize {
        self.candidates
    }

    /// Get the number of accepted candidates that ends a refinement step.
    pub fn acceptance_cap(&self) -> usize {
        self.acceptance_cap
    }

    /// Get the box distance for local sampling.
    pub fn box_distance(&self) -> u8 {
        self.box_distance
    }
}

// ====================================================================================================================

/// The progress made by one iteration.
///
/// Distances are sums over all pairs of colors and hence grow quadratically
/// with the number of colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    /// The 0-based iteration.
    pub iteration: usize,
    /// The temperature during the iteration.
    pub temperature: Float,
    /// The total pairwise distance before the iteration.
    pub before: Float,
    /// The total pairwise distance after the iteration.
    pub after: Float,
    /// The smallest pairwise distance after the iteration.
    pub min_distance: Float,
}

// ====================================================================================================================

/// A sequence of colors together with their CIELAB coordinates.
///
/// A palette is the working state of color set generation. It stores each
/// color in RGB and CIELAB, keeping the two in lockstep, and answers distance
/// queries.
///
/// ```
/// # use prettypalette::{Palette, Rgb};
/// let palette: Palette = [
///     Rgb::new(0, 0, 0),
///     Rgb::new(255, 255, 255),
///     Rgb::new(10, 10, 10),
/// ]
/// .into_iter()
/// .collect();
///
/// let (index1, index2, distance) = palette.closest_pair().unwrap();
/// assert_eq!((index1, index2), (0, 2));
/// assert!(distance < 5.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Palette {
    rgbs: Vec<Rgb>,
    labs: Vec<Lab>,
}

impl Palette {
    /// Create a new empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty palette with room for the given number of colors.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rgbs: Vec::with_capacity(capacity),
            labs: Vec::with_capacity(capacity),
        }
    }

    /// Add the color to the end of this palette.
    pub fn push(&mut self, color: Rgb) {
        self.rgbs.push(color);
        self.labs.push(Lab::from(color));
    }

    /// Replace the color at the given index.
    ///
    /// # Panics
    ///
    /// This method panics if the index is out of bounds.
    pub fn set(&mut self, index: usize, color: Rgb) {
        self.replace(index, color, Lab::from(color));
    }

    /// Replace the color at the given index with a color whose CIELAB
    /// coordinates have already been computed.
    fn replace(&mut self, index: usize, color: Rgb, lab: Lab) {
        self.rgbs[index] = color;
        self.labs[index] = lab;
    }

    /// Get the number of colors.
    pub fn len(&self) -> usize {
        self.rgbs.len()
    }

    /// Determine whether this palette is empty.
    pub fn is_empty(&self) -> bool {
        self.rgbs.is_empty()
    }

    /// Get the colors.
    pub fn rgbs(&self) -> &[Rgb] {
        &self.rgbs
    }

    /// Get the colors' CIELAB coordinates.
    pub fn labs(&self) -> &[Lab] {
        &self.labs
    }

    /// Find the two colors closest to each other.
    ///
    /// This method returns the indices of the two colors and their distance.
    /// If several pairs are equally close, it returns the first pair in
    /// row-major order, i.e., the one with the smallest first index and, for
    /// that index, the smallest second index. It returns `None` for palettes
    /// with fewer than two colors.
    pub fn closest_pair(&self) -> Option<(usize, usize, Float)> {
        find_closest_pair(&self.labs, Lab::distance)
    }

    /// Get the smallest distance between two colors of this palette.
    pub fn min_distance(&self) -> Option<Float> {
        self.closest_pair().map(|(_, _, distance)| distance)
    }

    /// Get the smallest distance between the given color and all colors of
    /// this palette but the one at index `skip`.
    ///
    /// If there are no other colors, this method returns infinity.
    pub fn min_distance_to(&self, lab: &Lab, skip: usize) -> Float {
        self.labs
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != skip)
            .map(|(_, other)| lab.distance(other))
            .fold(Float::INFINITY, Float::min)
    }

    /// Get the sum of the distances between all pairs of colors.
    pub fn total_distance(&self) -> Float {
        let accum: Accumulator = self
            .labs
            .iter()
            .enumerate()
            .flat_map(|(index, lab1)| self.labs[index + 1..].iter().map(|lab2| lab1.distance(lab2)))
            .collect();
        accum.total()
    }

    /// Convert this palette into a set of colors, collapsing duplicates.
    pub fn into_set(self) -> HashSet<Rgb> {
        self.rgbs.into_iter().collect()
    }
}

impl FromIterator<Rgb> for Palette {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        let mut palette = Palette::new();
        palette.extend(iter);
        palette
    }
}

impl Extend<Rgb> for Palette {
    fn extend<I: IntoIterator<Item = Rgb>>(&mut self, iter: I) {
        for color in iter {
            self.push(color);
        }
    }
}

// ====================================================================================================================

/// A generator of visually distinct color sets.
///
/// The generator combines a sampler for drawing random colors with the
/// parameters of simulated annealing. It is immutable, with all state of a
/// generation run, including the random number generator, owned by that run.
/// Hence independent runs may execute on different threads.
///
/// ```
/// # use prettypalette::{RangeSampler, Schedule, SimulatedAnnealing};
/// # use rand::SeedableRng;
/// let generator = SimulatedAnnealing::with_schedule(
///     RangeSampler::PASTEL,
///     Schedule::default().with_iterations(10).with_candidates(500),
/// );
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let colors = generator.generate(5, &mut rng);
/// assert_eq!(colors.len(), 5);
/// assert!(colors.iter().all(|c| c.coordinates().iter().all(|c| 128 <= *c)));
/// ```
#[derive(Clone, Debug)]
pub struct SimulatedAnnealing<S> {
    sampler: S,
    schedule: Schedule,
}

impl<S: RgbSampler> SimulatedAnnealing<S> {
    /// Create a new generator with the default schedule.
    pub fn new(sampler: S) -> Self {
        Self::with_schedule(sampler, Schedule::default())
    }

    /// Create a new generator with the given schedule.
    pub fn with_schedule(sampler: S, schedule: Schedule) -> Self {
        Self { sampler, schedule }
    }

    /// Get the sampler.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Get the schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Generate a set of `n` visually distinct colors.
    ///
    /// This method samples `n` colors and then refines them with
    /// [`SimulatedAnnealing::refine`]. A single color is returned as sampled,
    /// since there is nothing to be distinct from. Zero colors result in the
    /// empty set.
    ///
    /// The result may have fewer than `n` colors if refinement ends up with
    /// duplicates. Given the size of the RGB cube, that is exceedingly
    /// unlikely for all but degenerate samplers.
    pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> HashSet<Rgb> {
        self.generate_observed(n, rng, |_| ())
    }

    /// Generate a set of `n` visually distinct colors while reporting
    /// progress after every iteration.
    pub fn generate_observed<R, F>(&self, n: usize, rng: &mut R, observer: F) -> HashSet<Rgb>
    where
        R: Rng + ?Sized,
        F: FnMut(&Progress),
    {
        let mut palette = Palette::with_capacity(n);
        for _ in 0..n {
            palette.push(self.sampler.sample_any(rng));
        }

        if 1 < n {
            self.refine(&mut palette, rng, observer);
        }

        palette.into_set()
    }

    /// Refine the palette by simulated annealing.
    ///
    /// Each iteration runs [`STEPS_PER_ITERATION`] refinement steps at the
    /// current temperature and then cools down. Each step replaces one of the
    /// two closest colors. After each iteration, this method invokes the
    /// observer and logs the change in total distance. Palettes with fewer
    /// than two colors are left alone.
    pub fn refine<R, F>(&self, palette: &mut Palette, rng: &mut R, mut observer: F)
    where
        R: Rng + ?Sized,
        F: FnMut(&Progress),
    {
        if palette.len() < 2 {
            return;
        }

        let mut temperature = self.schedule.initial_temperature;
        for iteration in 0..self.schedule.iterations {
            let before = palette.total_distance();

            for _ in 0..STEPS_PER_ITERATION {
                self.step(palette, rng, iteration, temperature);
            }

            let after = palette.total_distance();
            debug!("iteration {}: {} -> {}", iteration, before, after);

            observer(&Progress {
                iteration,
                temperature,
                before,
                after,
                min_distance: palette.min_distance().unwrap_or(Float::INFINITY),
            });

            temperature *= self.schedule.cooling;
        }
    }

    /// Perform one refinement step.
    ///
    /// The step picks one of the two closest colors at random and then
    /// considers replacement candidates. With a probability that decreases
    /// linearly over the iterations, a candidate comes from anywhere in the
    /// sampler's range, otherwise from the box around the color being
    /// replaced. Every accepted candidate becomes the tentative replacement
    /// and sets the distance to beat. Only the final replacement is written
    /// back to the palette.
    fn step<R: Rng + ?Sized>(
        &self,
        palette: &mut Palette,
        rng: &mut R,
        iteration: usize,
        temperature: Float,
    ) {
        let Some((index1, index2, mut distance)) = palette.closest_pair() else {
            return;
        };

        let index = if rng.random_bool(0.5) { index1 } else { index2 };
        let current = palette.rgbs[index];
        let mut replacement = (current, palette.labs[index]);

        let iterations = self.schedule.iterations;
        let p_anywhere = (iterations - iteration) as Float / iterations as Float;

        let mut accepted = 0;
        for _ in 0..self.schedule.candidates {
            if self.schedule.acceptance_cap <= accepted {
                break;
            }

            let candidate = if rng.random::<Float>() <= p_anywhere {
                self.sampler.sample_any(rng)
            } else {
                self.sampler
                    .sample_within_box(rng, current, self.schedule.box_distance)
            };
            let lab = Lab::from(candidate);
            let candidate_distance = palette.min_distance_to(&lab, index);

            // At zero temperature, a tie yields NaN, which never compares as
            // less or equal and hence rejects the candidate.
            let is_accepted = distance < candidate_distance || {
                let p_accept = ((candidate_distance - distance) / temperature).exp();
                rng.random::<Float>() <= p_accept
            };

            if is_accepted {
                replacement = (candidate, lab);
                distance = candidate_distance;
                accepted += 1;
            }
        }

        trace!(
            "replacing {} at {} with {} after accepting {} candidates",
            current,
            index,
            replacement.0,
            accepted
        );
        palette.replace(index, replacement.0, replacement.1);
    }
}
