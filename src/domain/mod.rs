//! Domain models and types for the exporter.
//!
//! This module contains the record kinds OCEO accepts, their validation
//! contract, and the values derived from them.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Records** ([`Crew`], [`CrewCredential`], [`CrewSeatime`], [`Vessel`],
//!   [`VesselSchedule`], [`VesselSchedulePosition`], [`CrewSchedule`],
//!   [`CrewSchedulePosition`])
//! - **The per-kind descriptor** ([`Record`], [`RecordKind`])
//! - **Error types** ([`OceoError`], [`ValidationError`], [`TransportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Validation
//!
//! Required fields are checked in a fixed order per kind and the first empty
//! field is reported:
//!
//! ```rust
//! use oceo_sftp::domain::{Crew, Record, ValidationError};
//!
//! let crew = Crew::new("ctx-1", "C-100", "", "Lovelace");
//! match crew.validate() {
//!     Err(ValidationError::FieldMissing { field, .. }) => assert_eq!(field, "first_name"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod crew;
pub mod endorsements;
pub mod errors;
pub mod kind;
pub mod record;
pub mod result;
pub mod schedule;
pub mod seatime;
pub mod vessel;

// Re-export commonly used types for convenience
pub use crew::{Crew, CrewCredential};
pub use errors::{OceoError, TransportError, ValidationError};
pub use kind::RecordKind;
pub use record::{validate, Record};
pub use result::Result;
pub use schedule::{CrewSchedule, CrewSchedulePosition, VesselSchedule, VesselSchedulePosition};
pub use seatime::CrewSeatime;
pub use vessel::Vessel;
