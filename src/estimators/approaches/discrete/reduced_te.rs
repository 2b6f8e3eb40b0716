// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::hash::Hash;

use ndarray::Array1;
use tracing::debug;

use crate::error::{Result, TeError};
use crate::estimators::approaches::discrete::discrete_utils::TeTables;
use crate::estimators::approaches::discrete::log_factorial::{
    ExactLogFactorial, StirlingLogFactorial, log_choose,
};
use crate::estimators::options::{CorrectionMode, TeOptions};
use crate::estimators::traits::{GlobalValue, LogFactorial, TransferEntropyEstimator};
use crate::estimators::utils::te_slicing::{encode_alphabet, te_embedding};

/// Values below this magnitude normalise to exactly zero.
pub const NORM_ZERO_TOL: f64 = 1e-10;

/// Log-factorial sums over the four contingency tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropySums {
    pub n123: f64,
    pub n12: f64,
    pub n23: f64,
    pub n2: f64,
}

impl EntropySums {
    pub fn compute<L: LogFactorial>(lf: &L, tables: &TeTables) -> Self {
        Self {
            n123: lf.table_sum(&tables.n123),
            n12: lf.table_sum(&tables.n12),
            n23: lf.table_sum(&tables.n23),
            n2: lf.table_sum(&tables.n2),
        }
    }

    /// Unreduced transfer entropy (log multinomial form of the plug-in estimate).
    pub fn raw_te(&self) -> f64 {
        self.n123 + self.n2 - self.n12 - self.n23
    }

    /// Conditional-entropy-like term used as normalisation scale.
    pub fn conditional_entropy(&self) -> f64 {
        self.n2 - self.n12
    }
}

/// Intermediate quantities of one estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeBreakdown {
    /// Plug-in value before correction.
    pub raw: f64,
    /// Additive finite-size correction (0 when uncorrected).
    pub correction: f64,
    /// `raw + correction`.
    pub corrected: f64,
    /// Normalisation denominator, if normalisation divided by one.
    pub upper_bound: Option<f64>,
    /// Final reported value.
    pub value: f64,
}

/// Finite-size corrected transfer entropy for discrete series.
///
/// The estimate is evaluated once on construction. With default options the
/// result is the reduced (bias-corrected) TE mapped into `[-1, 1]`:
///
/// ```text
/// TE_raw = Σ ln n123! + Σ ln n2! − Σ ln n12! − Σ ln n23!
/// Δ      = Σ_{n2} ln C(n + C − 1, C − 1) − Σ_{n23} ln C(n + C − 1, C − 1)
/// ```
///
/// where `C` is the number of distinct symbols across both series.
#[derive(Debug, Clone)]
pub struct ReducedTransferEntropy {
    tables: TeTables,
    alphabet_size: usize,
    src_hist_len: usize,
    dest_hist_len: usize,
    options: TeOptions,
    sums: EntropySums,
    breakdown: TeBreakdown,
}

impl ReducedTransferEntropy {
    /// Estimate TE(source -> destination) with source lag `src_hist_len` (k)
    /// and destination lag `dest_hist_len` (l).
    pub fn new<T>(
        source: &Array1<T>,
        destination: &Array1<T>,
        src_hist_len: usize,
        dest_hist_len: usize,
        options: TeOptions,
    ) -> Result<Self>
    where
        T: Eq + Hash + Clone,
    {
        if source.len() != destination.len() {
            return Err(TeError::LengthMismatch {
                source_len: source.len(),
                destination_len: destination.len(),
            });
        }
        let encoded = encode_alphabet(source, destination);
        let embedding = te_embedding(
            &encoded.source,
            &encoded.destination,
            src_hist_len,
            dest_hist_len,
        )?;
        let tables = TeTables::from_embedding(&embedding, src_hist_len);
        Self::from_tables(
            tables,
            encoded.alphabet_size,
            src_hist_len,
            dest_hist_len,
            options,
        )
    }

    /// Evaluate the estimate from precounted tables.
    ///
    /// Table widths must match the lags: `n123` has `1 + l + k` components,
    /// `n12` has `1 + l`, `n23` has `l + k` and `n2` has `l`.
    pub fn from_tables(
        tables: TeTables,
        alphabet_size: usize,
        src_hist_len: usize,
        dest_hist_len: usize,
        options: TeOptions,
    ) -> Result<Self> {
        check_table_widths(&tables, src_hist_len, dest_hist_len)?;
        let sums = if options.stirling {
            EntropySums::compute(&StirlingLogFactorial, &tables)
        } else {
            let lf = ExactLogFactorial::with_capacity(tables.max_count());
            EntropySums::compute(&lf, &tables)
        };
        let raw = sums.raw_te();
        if !raw.is_finite() {
            return Err(TeError::NonFinite {
                stage: "entropy sums",
            });
        }

        let mode = options.correction_mode();
        let correction = match mode {
            CorrectionMode::None => 0.0,
            CorrectionMode::Reduced => reduced_correction(&tables, alphabet_size),
            CorrectionMode::Constant => {
                constant_correction(alphabet_size, src_hist_len, dest_hist_len)
            }
        };
        if !correction.is_finite() {
            return Err(TeError::NonFinite {
                stage: "finite-size correction",
            });
        }
        let corrected = raw + correction;

        let (value, upper_bound) = if options.norm {
            normalise(corrected, correction, &sums, mode)?
        } else {
            (corrected, None)
        };

        debug!(
            n_samples = tables.n_samples(),
            alphabet_size,
            src_hist_len,
            dest_hist_len,
            ?mode,
            raw,
            correction,
            value,
            "transfer entropy estimated"
        );

        Ok(Self {
            tables,
            alphabet_size,
            src_hist_len,
            dest_hist_len,
            options,
            sums,
            breakdown: TeBreakdown {
                raw,
                correction,
                corrected,
                upper_bound,
                value,
            },
        })
    }

    pub fn raw_value(&self) -> f64 {
        self.breakdown.raw
    }

    pub fn correction(&self) -> f64 {
        self.breakdown.correction
    }

    /// `raw + correction`, before any normalisation.
    pub fn corrected_value(&self) -> f64 {
        self.breakdown.corrected
    }

    pub fn breakdown(&self) -> TeBreakdown {
        self.breakdown
    }

    pub fn entropy_sums(&self) -> EntropySums {
        self.sums
    }

    pub fn tables(&self) -> &TeTables {
        &self.tables
    }

    /// Number of distinct symbols across source and destination.
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    pub fn options(&self) -> TeOptions {
        self.options
    }

    /// `(src_hist_len, dest_hist_len)`.
    pub fn lags(&self) -> (usize, usize) {
        (self.src_hist_len, self.dest_hist_len)
    }
}

fn check_table_widths(tables: &TeTables, src_hist_len: usize, dest_hist_len: usize) -> Result<()> {
    let expected = [
        ("n123", &tables.n123, 1 + dest_hist_len + src_hist_len),
        ("n12", &tables.n12, 1 + dest_hist_len),
        ("n23", &tables.n23, dest_hist_len + src_hist_len),
        ("n2", &tables.n2, dest_hist_len),
    ];
    for (table, freq, width) in expected {
        if freq.width() != width {
            return Err(TeError::InconsistentTables {
                table,
                expected: width,
                found: freq.width(),
            });
        }
    }
    Ok(())
}

/// Dirichlet counting correction: `Σ_{n2} ln C(n+C-1, C-1) − Σ_{n23} ln C(n+C-1, C-1)`.
///
/// Always uses exact log-factorials.
pub fn reduced_correction(tables: &TeTables, alphabet_size: usize) -> f64 {
    let c_minus_1 = alphabet_size.saturating_sub(1);
    let term = |n: usize| log_choose(n + c_minus_1, c_minus_1);
    let over_n2: f64 = tables.n2.sorted_counts().into_iter().map(term).sum();
    let over_n23: f64 = tables.n23.sorted_counts().into_iter().map(term).sum();
    over_n2 - over_n23
}

/// Ensemble-average correction `-(C^l)(C^k - 1)(C - 1) / 2`.
///
/// Lags beyond `i32::MAX` saturate, so huge lags overflow to infinity instead of wrapping.
pub fn constant_correction(alphabet_size: usize, src_hist_len: usize, dest_hist_len: usize) -> f64 {
    let c = alphabet_size as f64;
    let exponent = |lag: usize| i32::try_from(lag).unwrap_or(i32::MAX);
    -c.powi(exponent(dest_hist_len)) * (c.powi(exponent(src_hist_len)) - 1.0) * (c - 1.0) / 2.0
}

/// Map a (possibly corrected) value into a bounded range.
///
/// Corrected estimates divide by `CE + Δ` when positive and by `-Δ` otherwise,
/// bounding them in `[-1, 1]`; uncorrected estimates divide by `CE`.
fn normalise(
    corrected: f64,
    correction: f64,
    sums: &EntropySums,
    mode: CorrectionMode,
) -> Result<(f64, Option<f64>)> {
    if corrected.abs() < NORM_ZERO_TOL {
        return Ok((0.0, None));
    }
    let ce = sums.conditional_entropy();
    let upper_bound = if mode.is_corrected() {
        if corrected > 0.0 {
            ce + correction
        } else {
            -correction
        }
    } else {
        ce
    };
    let value = corrected / upper_bound;
    if upper_bound == 0.0 || !value.is_finite() {
        return Err(TeError::DegenerateNormalization {
            value: corrected,
            upper_bound,
        });
    }
    Ok((value, Some(upper_bound)))
}

impl GlobalValue for ReducedTransferEntropy {
    fn global_value(&self) -> f64 {
        self.breakdown.value
    }
}

impl TransferEntropyEstimator for ReducedTransferEntropy {
    fn n_samples(&self) -> usize {
        self.tables.n_samples()
    }
}
