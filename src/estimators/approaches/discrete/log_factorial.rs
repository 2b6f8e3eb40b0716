// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use statrs::function::gamma::ln_gamma;

use crate::estimators::traits::LogFactorial;

/// Counts up to this value are pre-evaluated by `ExactLogFactorial`.
const MAX_CACHED: usize = 4096;

/// `ln(n!)` via the log-gamma function, `ln Γ(n + 1)`.
#[inline]
pub fn log_factorial(n: usize) -> f64 {
    ln_gamma(n as f64 + 1.0)
}

/// Log of the binomial coefficient `C(n, k)`.
///
/// Requires `k <= n`.
#[inline]
pub fn log_choose(n: usize, k: usize) -> f64 {
    debug_assert!(k <= n, "log_choose requires k <= n");
    log_factorial(n) - log_factorial(k) - log_factorial(n - k)
}

/// Exact log-factorial with a lookup table for small counts.
///
/// Cached entries are produced by `log_factorial` itself, so lookups and direct
/// evaluation return identical values.
#[derive(Debug, Clone)]
pub struct ExactLogFactorial {
    cache: Vec<f64>,
}

impl ExactLogFactorial {
    /// Pre-evaluate `ln(n!)` for `n in 0..=max_n` (capped at an internal limit).
    pub fn with_capacity(max_n: usize) -> Self {
        let upper = max_n.min(MAX_CACHED);
        let cache = (0..=upper).map(log_factorial).collect();
        Self { cache }
    }
}

impl Default for ExactLogFactorial {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl LogFactorial for ExactLogFactorial {
    #[inline]
    fn lfact(&self, n: usize) -> f64 {
        match self.cache.get(n) {
            Some(&v) => v,
            None => log_factorial(n),
        }
    }
}

/// Truncated Stirling approximation `ln(n!) ≈ n ln n`.
///
/// `n = 0` evaluates to `0` (the `0 · ln 0` limit) instead of NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct StirlingLogFactorial;

impl LogFactorial for StirlingLogFactorial {
    #[inline]
    fn lfact(&self, n: usize) -> f64 {
        if n == 0 {
            return 0.0;
        }
        let n_f = n as f64;
        n_f * n_f.ln()
    }
}
