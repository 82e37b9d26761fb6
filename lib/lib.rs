#![allow(dead_code, non_snake_case, non_upper_case_globals)]

//! Dense state-vector simulation of the amplitude dynamics of Grover's search
//! operator.
//!
//! For a register of *n* qubits (*N* = 2<sup>*n*</sup> basis states) and a
//! single marked index *w*, the Grover iteration operator is assembled as the
//! product of the oracle reflection, the order-*N* Hadamard matrix, and the
//! diffusion reflection, normalized by *N*. Repeated application to the
//! uniform superposition periodically amplifies and de-amplifies the marked
//! amplitude; this crate exposes that trajectory as a finite, restartable
//! sequence of amplitude vectors for downstream plotting.
//!
//! All operators here are real orthogonal, so amplitudes stay in ℝ and norms
//! are preserved up to floating-point drift.

pub mod config;
pub mod operator;
pub mod evolve;
