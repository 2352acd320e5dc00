use crate::error::{Result, SelectError};

/// Tuning knobs for the adaptive dispatcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectConfig {
    round_factor: usize,
    small_k_fraction: f64,
    round_cap: Option<usize>,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            round_factor: 4,
            small_k_fraction: 0.05,
            round_cap: None,
        }
    }
}

impl SelectConfig {
    /// Creates a configuration, rejecting a zero `round_factor` and a
    /// `small_k_fraction` outside `[0, 1]`.
    pub fn new(round_factor: usize, small_k_fraction: f64) -> Result<Self> {
        if round_factor == 0 {
            return Err(SelectError::invalid_config("round_factor must be at least 1"));
        }
        if !(0.0..=1.0).contains(&small_k_fraction) {
            return Err(SelectError::invalid_config(format!(
                "small_k_fraction must be within [0, 1], got {small_k_fraction}"
            )));
        }
        Ok(Self {
            round_factor,
            small_k_fraction,
            round_cap: None,
        })
    }

    /// Quickselect may run `round_factor * (⌊log2 n⌋ + 1)` partition rounds
    /// before the rest of the window is handed to heapselect.
    pub fn round_factor(&self) -> usize {
        self.round_factor
    }

    /// Targets with `k <= small_k_fraction * n` go straight to heapselect.
    pub fn small_k_fraction(&self) -> f64 {
        self.small_k_fraction
    }

    /// Fixes the quickselect round budget regardless of sequence length.
    pub fn with_round_cap(mut self, rounds: usize) -> Self {
        self.round_cap = Some(rounds);
        self
    }

    /// Partition rounds quickselect may spend on a sequence of length `n`.
    pub fn max_rounds(&self, n: usize) -> usize {
        match self.round_cap {
            Some(cap) => cap,
            None => {
                let bits = (usize::BITS - n.leading_zeros()) as usize;
                self.round_factor.saturating_mul(bits.max(1))
            }
        }
    }

    /// Whether `k` is small enough relative to `n` to go straight to heapselect.
    pub fn prefers_heap(&self, k: usize, n: usize) -> bool {
        (k as f64) <= self.small_k_fraction * n as f64
    }
}
