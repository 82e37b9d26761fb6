//! Dense matrix constructions for the Grover iteration operator.
//!
//! For *N* = 2<sup>*n*</sup> basis states and marked index *w*, the operator
//! is assembled from three reflections:
//!
//! - the oracle *F*, the identity with the (*w*, *w*) entry negated: a sign
//!   flip on the marked state;
//! - the order-*N* Hadamard matrix *H*, here unnormalized with entries ±1 so
//!   that *H*<sup>2</sup> = *N·I* and *H*[*i*, *j*] =
//!   (-1)<sup>popcount(*i* & *j*)</sup>;
//! - the diffusion *D* = -*I* with the (0, 0) entry set to +1, which *H*
//!   conjugates into the inversion about the mean.
//!
//! The combined Grover operator is *G* = (*H·D·H·F*) / *N*. Each factor is
//! orthogonal (after normalization), so *G* preserves the Euclidean norm of
//! any amplitude vector it is applied to, and rounding error does not amplify
//! across the product.
//!
//! Everything in this module is a pure function of the configuration: two
//! calls with equal arguments produce bit-identical matrices.

use nalgebra as na;
use once_cell::sync::Lazy;
use crate::config::GroverConfig;

/// The 2×2 Hadamard block, unnormalized (entries ±1).
pub static HADAMARD_2: Lazy<na::DMatrix<f64>> =
    Lazy::new(|| {
        let mut h = na::DMatrix::from_element(2, 2, 1.0);
        h[(1, 1)] = -1.0;
        h
    });

/// Build the oracle reflection *F*: identity except for a -1 at the marked
/// index.
pub fn oracle(cfg: &GroverConfig) -> na::DMatrix<f64> {
    let size = cfg.size();
    let w = cfg.winner();
    let mut F: na::DMatrix<f64> = na::DMatrix::identity(size, size);
    F[(w, w)] = -1.0;
    F
}

/// Build the order-2<sup>*n*</sup> Hadamard matrix as the `n`-fold Kronecker
/// power of [`HADAMARD_2`].
pub fn hadamard(n: usize) -> na::DMatrix<f64> {
    let mut H: na::DMatrix<f64> = na::DMatrix::from_element(1, 1, 1.0);
    for _ in 0..n {
        H = H.kronecker(Lazy::force(&HADAMARD_2));
    }
    H
}

/// Build the diffusion reflection *D*: -*I* except for a +1 at index zero.
pub fn diffusion(n: usize) -> na::DMatrix<f64> {
    let size = 1 << n;
    let mut D: na::DMatrix<f64> = -na::DMatrix::identity(size, size);
    D[(0, 0)] = 1.0;
    D
}

/// Build the Grover iteration operator *G* = (*H·D·H·F*) / *N*.
///
/// The result is orthogonal up to floating-point tolerance and is a pure,
/// deterministic function of the configuration.
pub fn grover(cfg: &GroverConfig) -> na::DMatrix<f64> {
    let F = oracle(cfg);
    let H = hadamard(cfg.n());
    let D = diffusion(cfg.n());
    (&H * &D * &H * &F) / cfg.size() as f64
}
