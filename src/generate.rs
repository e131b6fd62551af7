//! Random generation of systems with a requested solution kind, plus
//! parameter sweeps over a single constant term.
//!
//! Candidates are built so the requested kind holds algebraically
//! (scaled rows for coincident lines, offset constants for parallel
//! ones) and every candidate is confirmed by the default classifier
//! before it is returned, so callers never receive a system whose
//! classification disagrees with the label they asked for.

use itertools_num::linspace;
use rand::distributions::Distribution;
use rand::thread_rng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use statrs::distribution::Normal;

use crate::classifier::LinearSystemClassifier;
use crate::linalg;
use crate::system::{Equation2, Equation3, SolutionKind, System2x2, System3x3};

/// Rejection-sampling cap shared by all generation loops.
const MAX_DRAW_ATTEMPTS: usize = 10_000;

/// Distribution the individual coefficients are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoefficientSampler {
    /// Uniform integers in `lo..=hi`, emitted as `f64`. Systems built
    /// from integer draws classify identically under the exact and
    /// adaptive policies.
    UniformInt { lo: i64, hi: i64 },
    /// Gaussian draws. Scaled rows built from continuous draws are only
    /// proportional up to rounding, so systems from this sampler should
    /// be classified with the default adaptive tolerance.
    Normal { mean: f64, std_dev: f64 },
}

impl Default for CoefficientSampler {
    fn default() -> Self {
        CoefficientSampler::UniformInt { lo: -5, hi: 5 }
    }
}

impl CoefficientSampler {
    /// Draws one coefficient.
    ///
    /// Panics if the sampler is misconfigured (`lo > hi`, or a
    /// non-positive standard deviation).
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        match self {
            CoefficientSampler::UniformInt { lo, hi } => {
                assert!(lo <= hi, "empty integer range {}..={}", lo, hi);
                rng.gen_range(*lo..=*hi) as f64
            }
            CoefficientSampler::Normal { mean, std_dev } => {
                let normal = Normal::new(*mean, *std_dev).unwrap();
                normal.sample(rng)
            }
        }
    }

    /// Draws until the value is nonzero; used for row multipliers.
    ///
    /// Panics if the sampler produces only zeros for
    /// `MAX_DRAW_ATTEMPTS` consecutive draws.
    pub fn sample_nonzero<R: Rng>(&self, rng: &mut R) -> f64 {
        for _ in 0..MAX_DRAW_ATTEMPTS {
            let value = self.sample(rng);
            if value != 0.0 {
                return value;
            }
        }
        panic!(
            "Sampler {:?} produced only zeros after {} draws",
            self, MAX_DRAW_ATTEMPTS
        );
    }
}

/// Generates a random 2x2 system that classifies as `kind`, using a
/// thread-local RNG.
///
/// See [`random_system_2x2_with_rng`] for the full contract.
pub fn random_system_2x2(kind: SolutionKind, sampler: &CoefficientSampler) -> System2x2 {
    random_system_2x2_with_rng(&mut thread_rng(), kind, sampler)
}

/// Generates a random 2x2 system that classifies as `kind`.
///
/// Unique systems are drawn freely and kept when their determinant is
/// significant; infinite systems scale one base equation by a nonzero
/// multiplier; no-solution systems additionally shift the scaled
/// constant by a small nonzero integer. Every candidate is checked with
/// the default classifier before being returned.
///
/// # Arguments
///
/// * `rng` - Source of randomness; pass a seeded RNG for reproducibility.
/// * `kind` - The solution kind the returned system must classify as.
/// * `sampler` - Distribution of the individual coefficients.
///
/// # Returns
///
/// * A system for which the default classifier reports `kind`. Panics if
///   the sampler cannot produce one within `MAX_DRAW_ATTEMPTS` tries
///   (for example a constant sampler asked for a unique solution).
pub fn random_system_2x2_with_rng<R: Rng>(
    rng: &mut R,
    kind: SolutionKind,
    sampler: &CoefficientSampler,
) -> System2x2 {
    let classifier = LinearSystemClassifier::default();
    for attempt in 1..=MAX_DRAW_ATTEMPTS {
        let candidate = propose_2x2(rng, kind, sampler);
        if classifier.classify_2x2(&candidate) == Ok(kind) {
            log::trace!("Generated 2x2 {} system in {} attempts", kind, attempt);
            return candidate;
        }
    }
    panic!(
        "Could not generate a 2x2 {} system from {:?} after {} attempts",
        kind, sampler, MAX_DRAW_ATTEMPTS
    );
}

/// Generates a random 3x3 system that classifies as `kind`, using a
/// thread-local RNG.
///
/// See [`random_system_3x3_with_rng`] for the full contract.
pub fn random_system_3x3(kind: SolutionKind, sampler: &CoefficientSampler) -> System3x3 {
    random_system_3x3_with_rng(&mut thread_rng(), kind, sampler)
}

/// Generates a random 3x3 system that classifies as `kind`.
///
/// Unique systems are drawn freely and kept at full rank; infinite
/// systems make the third plane a combination of the first two, which
/// yields rank-2 sheaves and occasionally rank-1 coincident stacks;
/// no-solution systems scale one base plane into parallel copies with
/// shifted constants. Every candidate is checked with the default
/// classifier before being returned.
///
/// Same argument and panic contract as [`random_system_2x2_with_rng`].
pub fn random_system_3x3_with_rng<R: Rng>(
    rng: &mut R,
    kind: SolutionKind,
    sampler: &CoefficientSampler,
) -> System3x3 {
    let classifier = LinearSystemClassifier::default();
    for attempt in 1..=MAX_DRAW_ATTEMPTS {
        let candidate = propose_3x3(rng, kind, sampler);
        if kind == SolutionKind::UniqueSolution
            && linalg::det3(&candidate.coefficient_matrix()) == 0.0
        {
            // Singular draw; skip the two rank computations and redraw.
            continue;
        }
        if classifier.classify_3x3(&candidate) == Ok(kind) {
            log::trace!("Generated 3x3 {} system in {} attempts", kind, attempt);
            return candidate;
        }
    }
    panic!(
        "Could not generate a 3x3 {} system from {:?} after {} attempts",
        kind, sampler, MAX_DRAW_ATTEMPTS
    );
}

fn propose_2x2<R: Rng>(
    rng: &mut R,
    kind: SolutionKind,
    sampler: &CoefficientSampler,
) -> System2x2 {
    match kind {
        SolutionKind::UniqueSolution => {
            System2x2::new(random_equation2(rng, sampler), random_equation2(rng, sampler))
        }
        SolutionKind::InfiniteSolutions => {
            let base = random_equation2(rng, sampler);
            let second = base.scaled(sampler.sample_nonzero(rng));
            System2x2::new(base, second)
        }
        SolutionKind::NoSolution => {
            let base = random_equation2(rng, sampler);
            let mut second = base.scaled(sampler.sample_nonzero(rng));
            second.c += constant_offset(rng);
            System2x2::new(base, second)
        }
    }
}

fn propose_3x3<R: Rng>(
    rng: &mut R,
    kind: SolutionKind,
    sampler: &CoefficientSampler,
) -> System3x3 {
    match kind {
        SolutionKind::UniqueSolution => System3x3::new(
            random_equation3(rng, sampler),
            random_equation3(rng, sampler),
            random_equation3(rng, sampler),
        ),
        SolutionKind::InfiniteSolutions => {
            let first = random_equation3(rng, sampler);
            let second = random_equation3(rng, sampler);
            let m1 = sampler.sample(rng);
            let m2 = sampler.sample_nonzero(rng);
            let third = Equation3::new(
                m1 * first.a + m2 * second.a,
                m1 * first.b + m2 * second.b,
                m1 * first.c + m2 * second.c,
                m1 * first.d + m2 * second.d,
            );
            System3x3::new(first, second, third)
        }
        SolutionKind::NoSolution => {
            let base = random_equation3(rng, sampler);
            let mut second = base.scaled(sampler.sample_nonzero(rng));
            second.d += constant_offset(rng);
            let mut third = base.scaled(sampler.sample_nonzero(rng));
            third.d += constant_offset(rng);
            System3x3::new(base, second, third)
        }
    }
}

fn random_equation2<R: Rng>(rng: &mut R, sampler: &CoefficientSampler) -> Equation2 {
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let eq = Equation2::new(
            sampler.sample(rng),
            sampler.sample(rng),
            sampler.sample(rng),
        );
        if !eq.has_zero_lhs() {
            return eq;
        }
    }
    panic!(
        "Sampler {:?} kept producing all-zero left-hand sides after {} draws",
        sampler, MAX_DRAW_ATTEMPTS
    );
}

fn random_equation3<R: Rng>(rng: &mut R, sampler: &CoefficientSampler) -> Equation3 {
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let eq = Equation3::new(
            sampler.sample(rng),
            sampler.sample(rng),
            sampler.sample(rng),
            sampler.sample(rng),
        );
        if !eq.has_zero_lhs() {
            return eq;
        }
    }
    panic!(
        "Sampler {:?} kept producing all-zero left-hand sides after {} draws",
        sampler, MAX_DRAW_ATTEMPTS
    );
}

/// Small nonzero integer shift that breaks a constant away from its
/// scaled value by far more than the adaptive tolerance.
fn constant_offset<R: Rng>(rng: &mut R) -> f64 {
    let magnitude = rng.gen_range(1..=4) as f64;
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

/// Copies of `base` with the constant of one equation swept over
/// `steps` evenly spaced values from `start` to `end`.
///
/// Sweeping the constant slides the chosen line parallel to itself, so
/// for a singular base system this walks the no-solution / infinite
/// boundary while a unique base stays unique throughout.
///
/// # Arguments
///
/// * `base` - System providing every coefficient except the swept constant.
/// * `equation` - Zero-based index of the equation to vary. Panics if
///   out of range.
/// * `start`, `end` - Endpoints of the sweep, both included.
/// * `steps` - Number of systems to produce.
pub fn sweep_constant_2x2(
    base: &System2x2,
    equation: usize,
    start: f64,
    end: f64,
    steps: usize,
) -> Vec<System2x2> {
    assert!(equation < 2, "2x2 systems have equations 0 and 1");
    linspace(start, end, steps)
        .map(|value| {
            let mut system = *base;
            system.equations[equation].c = value;
            system
        })
        .collect()
}

/// Copies of `base` with the constant of one equation swept over
/// `steps` evenly spaced values from `start` to `end`.
///
/// Same contract as [`sweep_constant_2x2`], varying the plane constant
/// `d` instead.
pub fn sweep_constant_3x3(
    base: &System3x3,
    equation: usize,
    start: f64,
    end: f64,
    steps: usize,
) -> Vec<System3x3> {
    assert!(equation < 3, "3x3 systems have equations 0, 1 and 2");
    linspace(start, end, steps)
        .map(|value| {
            let mut system = *base;
            system.equations[equation].d = value;
            system
        })
        .collect()
}
