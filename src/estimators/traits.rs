// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::estimators::approaches::discrete::discrete_utils::FrequencyTable;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

/// Log-factorial back end shared by all entropy sums of one estimate.
pub trait LogFactorial {
    /// Evaluate `ln(n!)` (or its approximation) for a non-negative count.
    fn lfact(&self, n: usize) -> f64;

    /// Sum `lfact` over every count of a frequency table, smallest counts first.
    fn table_sum(&self, table: &FrequencyTable) -> f64 {
        table.sorted_counts().into_iter().map(|n| self.lfact(n)).sum()
    }
}

/// Marker trait for Transfer Entropy estimator instances.
pub trait TransferEntropyEstimator: GlobalValue {
    /// Number of embedded samples the estimate is based on.
    fn n_samples(&self) -> usize;
}
