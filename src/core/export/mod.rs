//! Upload pipeline
//!
//! - [`batch`] - Fail-fast validation of a record batch
//! - [`writer`] - CSV serialization
//! - [`naming`] - Remote file names and paths
//! - [`coordinator`] - The pipeline itself
//! - [`summary`] - Receipts for completed uploads

pub mod batch;
pub mod coordinator;
pub mod naming;
pub mod summary;
pub mod writer;

pub use batch::validate_batch;
pub use coordinator::{ExportCoordinator, ExportSettings};
pub use summary::UploadReceipt;
pub use writer::to_csv;
