// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

/// Options controlling bias correction, normalisation and the log-factorial back end.
///
/// Defaults: finite-size corrected (`reduced`) and normalised, exact log-factorials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeOptions {
    /// Apply the combinatorial finite-size correction. Takes precedence over
    /// `constant_correction`.
    pub reduced: bool,
    /// Rescale the result into `[-1, 1]` (corrected) or `[0, 1]` (uncorrected).
    pub norm: bool,
    /// Use `n ln n` instead of exact `ln(n!)`.
    pub stirling: bool,
    /// Apply the closed-form ensemble-average correction (only if `reduced` is off).
    pub constant_correction: bool,
}

impl Default for TeOptions {
    fn default() -> Self {
        Self {
            reduced: true,
            norm: true,
            stirling: false,
            constant_correction: false,
        }
    }
}

impl TeOptions {
    /// Plain plug-in estimate: no correction, no normalisation.
    pub fn plain() -> Self {
        Self {
            reduced: false,
            norm: false,
            stirling: false,
            constant_correction: false,
        }
    }

    pub fn with_reduced(mut self, reduced: bool) -> Self {
        self.reduced = reduced;
        self
    }

    pub fn with_norm(mut self, norm: bool) -> Self {
        self.norm = norm;
        self
    }

    pub fn with_stirling(mut self, stirling: bool) -> Self {
        self.stirling = stirling;
        self
    }

    pub fn with_constant_correction(mut self, constant_correction: bool) -> Self {
        self.constant_correction = constant_correction;
        self
    }

    /// The correction actually applied; `reduced` wins over `constant_correction`.
    pub fn correction_mode(&self) -> CorrectionMode {
        if self.reduced {
            CorrectionMode::Reduced
        } else if self.constant_correction {
            CorrectionMode::Constant
        } else {
            CorrectionMode::None
        }
    }
}

/// Finite-size correction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionMode {
    /// Uncorrected plug-in estimate.
    None,
    /// Log-binomial (Dirichlet counting) correction from the observed tables.
    Reduced,
    /// Count-independent ensemble-average correction.
    Constant,
}

impl CorrectionMode {
    pub fn is_corrected(self) -> bool {
        !matches!(self, CorrectionMode::None)
    }
}
