// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: contingency tables, the log-factorial engine
// and the reduced transfer entropy estimator built on top of them.

pub mod discrete_utils;
pub mod log_factorial;
pub mod reduced_te;

pub use discrete_utils::{FrequencyTable, TeTables};
pub use reduced_te::{ReducedTransferEntropy, TeBreakdown};
