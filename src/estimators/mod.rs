pub mod approaches;
pub mod options;
pub mod traits;
pub mod transfer_entropy;
pub mod utils;

pub use options::{CorrectionMode, TeOptions};
pub use traits::{GlobalValue, LogFactorial, TransferEntropyEstimator};
