use std::convert::Infallible;
use std::error::Error as StdError;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{Result, SelectError};
use crate::select::comparator::{Comparator, NaturalOrder};
use crate::select::config::SelectConfig;
use crate::select::heapselect::heapselect_lanes;
use crate::select::keys::{Direct, Lanes, Projected};
use crate::select::quickselect::{quickselect_lanes, Progress};
use crate::select::sequence::Sequence;

/// Which selection strategy a call runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Randomized quickselect, O(n) expected.
    Quickselect,
    /// Bounded max-heap scan followed by a three-way partition, O(n log k).
    Heapselect,
    /// Heapselect for small k, otherwise quickselect with a round budget that
    /// escalates to heapselect when exhausted.
    Adaptive,
}

/// Places order statistics in place using a configurable strategy mix and an
/// owned source of pivot randomness.
///
/// After a successful call `seq[k]` holds the element that would sit at `k`
/// if the sequence were sorted, nothing before it is greater and nothing
/// after it is less. Only positions change.
///
/// # Examples
/// ```
/// use selectlib::Selector;
///
/// let mut values = vec![9, 3, 7, 1, 5, 8, 2];
/// let mut selector = Selector::with_seed(42);
/// selector.nth_element(&mut values, 3).unwrap();
/// assert_eq!(values[3], 5);
/// ```
#[derive(Debug, Clone)]
pub struct Selector<R = ChaCha20Rng> {
    config: SelectConfig,
    rng: R,
}

impl Selector<ChaCha20Rng> {
    /// Creates a selector with the default configuration, seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(SelectConfig::default(), ChaCha20Rng::from_entropy())
    }

    /// Creates a selector with the default configuration and reproducible pivots.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SelectConfig::default(), ChaCha20Rng::seed_from_u64(seed))
    }
}

impl Default for Selector<ChaCha20Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Selector<R> {
    /// Creates a selector drawing pivots from `rng`.
    pub fn with_rng(config: SelectConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Replaces the tuning configuration.
    pub fn with_config(mut self, config: SelectConfig) -> Self {
        self.config = config;
        self
    }

    /// The active tuning configuration.
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Randomized quickselect under the natural ordering.
    ///
    /// Partition rounds are capped by the configured budget; a window left
    /// unresolved when it runs out is finished with heapselect.
    pub fn quickselect<S>(&mut self, seq: &mut S, k: usize) -> Result<()>
    where
        S: Sequence + ?Sized,
        S::Item: PartialOrd,
    {
        self.select_by(Strategy::Quickselect, seq, k, NaturalOrder)
    }

    /// Heapselect under the natural ordering.
    pub fn heapselect<S>(&mut self, seq: &mut S, k: usize) -> Result<()>
    where
        S: Sequence + ?Sized,
        S::Item: PartialOrd,
    {
        self.select_by(Strategy::Heapselect, seq, k, NaturalOrder)
    }

    /// Adaptive selection under the natural ordering.
    pub fn nth_element<S>(&mut self, seq: &mut S, k: usize) -> Result<()>
    where
        S: Sequence + ?Sized,
        S::Item: PartialOrd,
    {
        self.select_by(Strategy::Adaptive, seq, k, NaturalOrder)
    }

    /// Randomized quickselect ordering by a projected key.
    pub fn quickselect_by_key<S, K, F>(&mut self, seq: &mut S, k: usize, key: F) -> Result<()>
    where
        S: Sequence + ?Sized,
        K: PartialOrd,
        F: FnMut(&S::Item) -> K,
    {
        self.select_by_key(Strategy::Quickselect, seq, k, key)
    }

    /// Heapselect ordering by a projected key.
    pub fn heapselect_by_key<S, K, F>(&mut self, seq: &mut S, k: usize, key: F) -> Result<()>
    where
        S: Sequence + ?Sized,
        K: PartialOrd,
        F: FnMut(&S::Item) -> K,
    {
        self.select_by_key(Strategy::Heapselect, seq, k, key)
    }

    /// Adaptive selection ordering by a projected key.
    pub fn nth_element_by_key<S, K, F>(&mut self, seq: &mut S, k: usize, key: F) -> Result<()>
    where
        S: Sequence + ?Sized,
        K: PartialOrd,
        F: FnMut(&S::Item) -> K,
    {
        self.select_by_key(Strategy::Adaptive, seq, k, key)
    }

    /// Orders elements by `key`, computed once per element before any swap.
    pub fn select_by_key<S, K, F>(
        &mut self,
        strategy: Strategy,
        seq: &mut S,
        k: usize,
        mut key: F,
    ) -> Result<()>
    where
        S: Sequence + ?Sized,
        K: PartialOrd,
        F: FnMut(&S::Item) -> K,
    {
        self.try_select_by_key(strategy, seq, k, |item| Ok::<K, Infallible>(key(item)))
    }

    /// Orders elements by a key projection that may fail.
    ///
    /// A failing projection is reported as [`SelectError::Projection`] with
    /// the offending index; the sequence is left untouched.
    pub fn try_select_by_key<S, K, E, F>(
        &mut self,
        strategy: Strategy,
        seq: &mut S,
        k: usize,
        key: F,
    ) -> Result<()>
    where
        S: Sequence + ?Sized,
        K: PartialOrd,
        E: Into<Box<dyn StdError + Send + Sync>>,
        F: FnMut(&S::Item) -> std::result::Result<K, E>,
    {
        check_index(k, seq.len())?;
        let mut lanes = Projected::project(seq, key)?;
        self.dispatch(strategy, &mut lanes, k, &mut NaturalOrder)
    }

    /// Orders elements by `keys`, which must be index-aligned with `seq`.
    pub fn select_with_keys<S, K>(
        &mut self,
        strategy: Strategy,
        seq: &mut S,
        keys: Vec<K>,
        k: usize,
    ) -> Result<()>
    where
        S: Sequence + ?Sized,
        K: PartialOrd,
    {
        let mut lanes = Projected::with_keys(seq, keys)?;
        check_index(k, lanes.len())?;
        self.dispatch(strategy, &mut lanes, k, &mut NaturalOrder)
    }

    /// Orders elements with a custom comparator.
    pub fn select_by<S, C>(
        &mut self,
        strategy: Strategy,
        seq: &mut S,
        k: usize,
        mut cmp: C,
    ) -> Result<()>
    where
        S: Sequence + ?Sized,
        C: Comparator<S::Item>,
    {
        check_index(k, seq.len())?;
        let mut lanes = Direct::new(seq);
        self.dispatch(strategy, &mut lanes, k, &mut cmp)
    }

    fn dispatch<L, C>(
        &mut self,
        strategy: Strategy,
        lanes: &mut L,
        k: usize,
        cmp: &mut C,
    ) -> Result<()>
    where
        L: Lanes + ?Sized,
        C: Comparator<L::Key> + ?Sized,
    {
        let n = lanes.len();
        match strategy {
            Strategy::Quickselect => self.bounded_quickselect(lanes, k, cmp),
            Strategy::Heapselect => heapselect_lanes(lanes, cmp, 0, n - 1, k),
            Strategy::Adaptive => {
                if self.config.prefers_heap(k, n) {
                    debug!("nth_element: k={k} of n={n} is small, using heapselect");
                    return heapselect_lanes(lanes, cmp, 0, n - 1, k);
                }
                self.bounded_quickselect(lanes, k, cmp)
            }
        }
    }

    /// Quickselect under the configured round budget, finishing whatever
    /// window is left with heapselect once the budget runs out.
    fn bounded_quickselect<L, C>(&mut self, lanes: &mut L, k: usize, cmp: &mut C) -> Result<()>
    where
        L: Lanes + ?Sized,
        C: Comparator<L::Key> + ?Sized,
    {
        let n = lanes.len();
        let budget = self.config.max_rounds(n);
        debug!("quickselect: k={k} of n={n}, {budget} rounds");
        match quickselect_lanes(lanes, cmp, &mut self.rng, k, Some(budget))? {
            Progress::Placed => Ok(()),
            Progress::Exhausted { left, right } => {
                debug!("quickselect: round budget exhausted, heapselect on window [{left}, {right}]");
                heapselect_lanes(lanes, cmp, left, right, k)
            }
        }
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(SelectError::IndexOutOfRange { index, len })
    }
}
