//! Run configuration: register size, iteration count, and marked index.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Returned when the qubit count is zero.
    #[error("qubit count must be at least 1")]
    ZeroQubits,

    /// Returned when the qubit count would overflow the basis-state index.
    #[error("qubit count {0} exceeds the addressable basis-state range")]
    TooManyQubits(usize),

    /// Returned when the marked index lies outside the state space.
    #[error("marked index {winner} out of range for {size} basis states")]
    WinnerOutOfRange { winner: usize, size: usize },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Immutable parameters for a single Grover evolution.
///
/// Validated once at construction; every operator and state built from a
/// `GroverConfig` is therefore total.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroverConfig {
    n: usize,
    steps: usize,
    winner: usize,
}

impl GroverConfig {
    /// Create a new configuration for `n` qubits, `steps` Grover iterations,
    /// and marked basis-state index `winner`.
    ///
    /// `steps == 0` is allowed and yields a trajectory containing only the
    /// initial uniform superposition.
    pub fn new(n: usize, steps: usize, winner: usize) -> ConfigResult<Self> {
        if n == 0 { return Err(ConfigError::ZeroQubits); }
        let size: usize
            = 1_usize.checked_shl(n as u32)
            .ok_or(ConfigError::TooManyQubits(n))?;
        if winner >= size {
            return Err(ConfigError::WinnerOutOfRange { winner, size });
        }
        Ok(Self { n, steps, winner })
    }

    /// Return the number of qubits.
    pub fn n(&self) -> usize { self.n }

    /// Return the number of Grover iterations.
    pub fn steps(&self) -> usize { self.steps }

    /// Return the marked basis-state index.
    pub fn winner(&self) -> usize { self.winner }

    /// Return the number of basis states, 2<sup>*n*</sup>.
    pub fn size(&self) -> usize { 1 << self.n }

    /// Return the bitwise complement of the marked index within `n` bits,
    /// i.e. `size() - 1 - winner()`.
    pub fn mirror(&self) -> usize { self.size() - 1 - self.winner }

    /// Render basis-state index `k` as a zero-padded `n`-bit binary string.
    pub fn basis_label(&self, k: usize) -> String {
        format!("{:0>width$b}", k, width = self.n)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_valid_parameters() {
        let cfg = GroverConfig::new(4, 40, 0b1001).unwrap();
        assert_eq!(cfg.n(), 4);
        assert_eq!(cfg.steps(), 40);
        assert_eq!(cfg.winner(), 9);
        assert_eq!(cfg.size(), 16);
        assert_eq!(cfg.mirror(), 6);
    }

    #[test]
    fn rejects_zero_qubits() {
        assert_eq!(GroverConfig::new(0, 1, 0), Err(ConfigError::ZeroQubits));
    }

    #[test]
    fn rejects_oversized_register() {
        let n = usize::BITS as usize;
        assert_eq!(
            GroverConfig::new(n, 1, 0),
            Err(ConfigError::TooManyQubits(n)),
        );
    }

    #[test]
    fn rejects_out_of_range_winner() {
        assert_eq!(
            GroverConfig::new(2, 1, 4),
            Err(ConfigError::WinnerOutOfRange { winner: 4, size: 4 }),
        );
        assert!(GroverConfig::new(2, 1, 3).is_ok());
    }

    #[test]
    fn allows_zero_steps() {
        assert!(GroverConfig::new(2, 0, 1).is_ok());
    }

    #[test]
    fn basis_labels_are_zero_padded() {
        let cfg = GroverConfig::new(4, 1, 9).unwrap();
        assert_eq!(cfg.basis_label(9), "1001");
        assert_eq!(cfg.basis_label(0), "0000");
    }
}
