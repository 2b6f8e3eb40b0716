// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # reduced-te
//!
//! Finite-size corrected transfer entropy for discrete (or pre-binned) time series.
//!
//! ## Quick Start
//!
//! ```rust
//! use reduced_te::estimators::transfer_entropy::{TransferEntropy, transfer_entropy};
//! use reduced_te::estimators::{GlobalValue, TeOptions};
//! use ndarray::array;
//!
//! let x = array![0, 1, 1, 0, 1, 0, 0, 1, 1, 0];
//! let y = array![1, 0, 1, 1, 0, 1, 0, 0, 1, 1];
//!
//! // Reduced and normalised (defaults)
//! let te = TransferEntropy::new_discrete_reduced(&x, &y, 1, 1).unwrap().global_value();
//! assert!((-1.0..=1.0).contains(&te));
//!
//! // Plain plug-in estimate
//! let raw = transfer_entropy(&x, &y, 1, 1, &TeOptions::plain()).unwrap();
//! assert!(raw >= -1e-12);
//! ```
//!
//! ## Pipeline
//!
//! 1. **Embedding**: symbols are coded onto a shared alphabet and delay-embedded
//!    into `(y_t, y_{t-1..t-l}, x_{t-1..t-k})` rows.
//! 2. **Contingency tables**: the joint table `n123` is tallied; `n12`, `n23` and
//!    `n2` are marginalised from it.
//! 3. **Log-factorial sums**: exact `ln Γ(n+1)` or the `n ln n` Stirling form.
//! 4. **Correction and normalisation**: the Dirichlet counting correction
//!    (`reduced`) or a closed-form ensemble correction, then optional rescaling.
//!
//! All values are in nats. The computation is pure and single-threaded; stage
//! summaries are emitted as `tracing` events at `debug`/`trace` level.

pub mod error;
pub mod estimators;

pub use error::{Result, TeError};
pub use estimators::transfer_entropy::{TransferEntropy, transfer_entropy};
pub use estimators::{GlobalValue, TeOptions};
