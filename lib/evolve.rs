//! Amplitude evolution under repeated application of the Grover operator.
//!
//! [`Evolution`] is a finite, lazy iterator over the trajectory *v*<sub>0</sub>,
//! *v*<sub>1</sub>, ..., *v*<sub>steps</sub>, where *v*<sub>0</sub> is the
//! uniform superposition and *v*<sub>*t*+1</sub> = *G·v*<sub>*t*</sub>. The
//! trajectory always has exactly `steps + 1` elements and can be replayed
//! from the start with [`Evolution::reset`]; consumers that track deltas or
//! previous points do so on their own side.
//!
//! Each yielded [`Step`] carries the full amplitude vector together with two
//! scalar projections read out of it: the amplitude at the marked index and
//! the amplitude at its bitwise complement. The latter pairing mirrors the
//! two-series time plot the trajectory is typically rendered as.

use std::iter::FusedIterator;
use nalgebra as na;
use crate::{ config::GroverConfig, operator };

/// Return the uniform superposition over `size` basis states,
/// (1/√N, ..., 1/√N).
pub fn uniform(size: usize) -> na::DVector<f64> {
    na::DVector::from_element(size, 1.0 / (size as f64).sqrt())
}

/// Return the iteration count maximizing the marked amplitude,
/// ⌊π/4·√N⌋ (at least 1), for an `n`-qubit register.
pub fn optimal_steps(n: usize) -> usize {
    use std::f64::consts::FRAC_PI_4;
    let size = (1_usize << n) as f64;
    ((FRAC_PI_4 * size.sqrt()).floor() as usize).max(1)
}

/// A single point in the amplitude trajectory.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// Iteration number, starting at zero for the uniform superposition.
    pub t: usize,
    /// Amplitudes over all basis states.
    pub amplitudes: na::DVector<f64>,
    /// Amplitude at the marked index.
    pub winner: f64,
    /// Amplitude at the bitwise complement of the marked index.
    pub mirror: f64,
}

impl Step {
    fn project(t: usize, amplitudes: na::DVector<f64>, winner: usize) -> Self {
        let mirror_idx = amplitudes.len() - 1 - winner;
        let w = amplitudes[winner];
        let m = amplitudes[mirror_idx];
        Self { t, amplitudes, winner: w, mirror: m }
    }

    /// Return the probability weight of each basis state, i.e. the squared
    /// amplitudes.
    pub fn probabilities(&self) -> na::DVector<f64> {
        self.amplitudes.map(|a| a * a)
    }

    /// Return the Euclidean norm of the amplitude vector.
    ///
    /// Stays at 1 up to floating-point drift, since the Grover operator is
    /// orthogonal.
    pub fn norm(&self) -> f64 { self.amplitudes.norm() }
}

/// Driver for the amplitude trajectory of a single Grover run.
///
/// Yields `steps + 1` [`Step`]s, starting with the uniform superposition at
/// `t = 0`. The underlying operator is built once at construction and is
/// immutable thereafter.
#[derive(Clone, Debug)]
pub struct Evolution {
    g: na::DMatrix<f64>,
    v: na::DVector<f64>,
    t: usize,
    steps: usize,
    winner: usize,
}

impl Evolution {
    /// Create a new `Evolution` for the given configuration, building the
    /// Grover operator internally.
    pub fn new(cfg: &GroverConfig) -> Self {
        let g = operator::grover(cfg);
        let v = uniform(cfg.size());
        Self { g, v, t: 0, steps: cfg.steps(), winner: cfg.winner() }
    }

    /// Return a reference to the built Grover operator.
    pub fn operator(&self) -> &na::DMatrix<f64> { &self.g }

    /// Re-seed the state to the uniform superposition at `t = 0`.
    ///
    /// A reset `Evolution` replays the exact same trajectory.
    pub fn reset(&mut self) -> &mut Self {
        self.v = uniform(self.v.len());
        self.t = 0;
        self
    }

    /// Run the remaining iterations eagerly, collecting the trajectory.
    pub fn run(&mut self) -> Vec<Step> {
        let mut traj: Vec<Step> = Vec::with_capacity(self.len());
        traj.extend(self);
        traj
    }
}

impl Iterator for Evolution {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        if self.t > self.steps { return None; }
        let step = Step::project(self.t, self.v.clone(), self.winner);
        if self.t < self.steps { self.v = &self.g * &self.v; }
        self.t += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = (self.steps + 1).saturating_sub(self.t);
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for Evolution { }

impl FusedIterator for Evolution { }
