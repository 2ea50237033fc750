//! Evaluation of a decision tree:
//! training error, external (holdout) validation, and leave-one-out.

/// Defines the result of an evaluation.
pub mod error_report;
/// Scores a classifier against its own training records.
pub mod training_error;
/// Scores a classifier against an independent labeled set.
pub mod holdout;
/// Defines leave-one-out cross validation.
pub mod leave_one_out;


pub use error_report::ErrorReport;
pub use training_error::training_error;
pub use holdout::holdout_error;
pub use leave_one_out::LeaveOneOut;
