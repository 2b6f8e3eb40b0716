pub mod discrete;

// Re-exports so tests and users can import
// reduced_te::estimators::approaches::* ergonomically.
pub use discrete::ReducedTransferEntropy;
pub use discrete::log_factorial::{ExactLogFactorial, StirlingLogFactorial};
