use ndarray::{Array2, Axis};
use std::collections::HashMap;
use tracing::trace;

/// Occurrence counts of fixed-width embedded states.
///
/// Every key stored in a table has exactly `width` components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    width: usize,
    counts: HashMap<Vec<i32>, usize>,
}

impl FrequencyTable {
    /// Empty table for states of `width` components.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            counts: HashMap::new(),
        }
    }

    /// Tally every row of a 2D embedding (samples x components).
    pub fn from_rows(data: &Array2<i32>) -> Self {
        let mut table = Self::new(data.ncols());
        for row in data.axis_iter(Axis(0)) {
            table.add(row.to_vec(), 1);
        }
        table
    }

    /// Add `count` observations of `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state.len()` differs from the table width.
    pub fn add(&mut self, state: Vec<i32>, count: usize) {
        assert_eq!(
            state.len(),
            self.width,
            "State width must match the frequency table width"
        );
        *self.counts.entry(state).or_insert(0) += count;
    }

    /// Sum out components: each entry's count is credited to the sub-state
    /// `state[range]`.
    ///
    /// # Panics
    ///
    /// Panics if `range` reaches past the table width.
    pub fn marginalize(&self, range: std::ops::Range<usize>) -> Self {
        assert!(range.end <= self.width, "Marginal range exceeds table width");
        let mut out = Self::new(range.len());
        for (state, &count) in &self.counts {
            out.add(state[range.clone()].to_vec(), count);
        }
        out
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of distinct states observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of observations.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Count for a single state (0 if never observed).
    pub fn get(&self, state: &[i32]) -> usize {
        self.counts.get(state).copied().unwrap_or(0)
    }

    /// Iterate over the count values, in no particular order.
    pub fn values(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts.values().copied()
    }

    /// Count values in ascending order.
    ///
    /// Floating-point sums over a table go through this so that they do not
    /// depend on hash iteration order.
    pub fn sorted_counts(&self) -> Vec<usize> {
        let mut counts: Vec<usize> = self.counts.values().copied().collect();
        counts.sort_unstable();
        counts
    }

    /// Iterate over `(state, count)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&[i32], usize)> + '_ {
        self.counts.iter().map(|(k, &v)| (k.as_slice(), v))
    }
}

/// The four contingency tables a transfer entropy estimate is built from.
///
/// Naming follows the variable groups of the embedding:
/// 1 = destination future, 2 = destination history, 3 = source history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeTables {
    /// Full joint state `(y_t, y_past, x_past)`.
    pub n123: FrequencyTable,
    /// `(y_t, y_past)`.
    pub n12: FrequencyTable,
    /// `(y_past, x_past)`.
    pub n23: FrequencyTable,
    /// `(y_past)`.
    pub n2: FrequencyTable,
}

impl TeTables {
    /// Count the joint table from an embedding and derive the three marginals from it.
    ///
    /// `embedding` must have `1 + dest_hist_len + src_hist_len` columns, source history last.
    ///
    /// # Panics
    ///
    /// Panics if `src_hist_len` leaves no destination future column.
    pub fn from_embedding(embedding: &Array2<i32>, src_hist_len: usize) -> Self {
        let width = embedding.ncols();
        assert!(
            src_hist_len < width,
            "Embedding must contain the destination future column"
        );
        let n123 = FrequencyTable::from_rows(embedding);
        let n12 = n123.marginalize(0..width - src_hist_len);
        let n23 = n123.marginalize(1..width);
        let n2 = n123.marginalize(1..width - src_hist_len);
        trace!(
            n123 = n123.len(),
            n12 = n12.len(),
            n23 = n23.len(),
            n2 = n2.len(),
            "counted contingency tables"
        );
        Self { n123, n12, n23, n2 }
    }

    /// Number of embedded samples (identical for all four tables).
    pub fn n_samples(&self) -> usize {
        self.n123.total()
    }

    /// Largest single count across all tables.
    pub fn max_count(&self) -> usize {
        [&self.n123, &self.n12, &self.n23, &self.n2]
            .into_iter()
            .flat_map(|t| t.values())
            .max()
            .unwrap_or(0)
    }
}
