//! Vessel and crew schedule records
//!
//! Service start/end on schedules are caller-formatted ISO-8601 strings and
//! are required. Position start/end are optional timestamps.

use super::endorsements;
use super::kind::RecordKind;
use super::record::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vessel's service period
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselSchedule {
    #[serde(rename(serialize = "Context ID"))]
    pub context_id: String,

    #[serde(rename(serialize = "External ID"))]
    pub external_id: String,

    #[serde(rename(serialize = "Vessel External ID"))]
    pub vessel_external_id: String,

    #[serde(rename(serialize = "Vessel Name"))]
    pub vessel_name: String,

    #[serde(rename(serialize = "Vessel IMO Number"))]
    pub vessel_imo_number: Option<String>,

    #[serde(rename(serialize = "Vessel MMSI Number"))]
    pub vessel_mmsi_number: Option<String>,

    /// Client the vessel is serving during the period
    #[serde(rename(serialize = "Client"))]
    pub client: Option<String>,

    #[serde(rename(serialize = "Description"))]
    pub description: Option<String>,

    #[serde(rename(serialize = "Service Start At"))]
    pub service_start_at: String,

    #[serde(rename(serialize = "Service End At"))]
    pub service_end_at: String,
}

impl Record for VesselSchedule {
    const KIND: RecordKind = RecordKind::VesselSchedule;

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("context_id", self.context_id.as_str()),
            ("external_id", self.external_id.as_str()),
            ("vessel_name", self.vessel_name.as_str()),
            ("vessel_external_id", self.vessel_external_id.as_str()),
            ("service_start_at", self.service_start_at.as_str()),
            ("service_end_at", self.service_end_at.as_str()),
        ]
    }
}

/// A position that has to be filled on a vessel schedule
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselSchedulePosition {
    #[serde(rename(serialize = "Context ID"))]
    pub context_id: String,

    #[serde(rename(serialize = "External ID"))]
    pub external_id: String,

    #[serde(rename(serialize = "Vessel External ID"))]
    pub vessel_external_id: String,

    #[serde(rename(serialize = "Position"))]
    pub position: String,

    /// Credential the position requires
    #[serde(rename(serialize = "Credential Title"))]
    pub credential_title: String,

    #[serde(
        rename(serialize = "Endorsements"),
        serialize_with = "endorsements::serialize",
        deserialize_with = "endorsements::deserialize"
    )]
    pub endorsements: Vec<String>,

    #[serde(rename(serialize = "Service Start At"))]
    pub service_start_at: Option<DateTime<Utc>>,

    #[serde(rename(serialize = "Service End At"))]
    pub service_end_at: Option<DateTime<Utc>>,
}

impl Record for VesselSchedulePosition {
    const KIND: RecordKind = RecordKind::VesselSchedulePosition;

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("context_id", self.context_id.as_str()),
            ("vessel_external_id", self.vessel_external_id.as_str()),
            ("position", self.position.as_str()),
            ("credential_title", self.credential_title.as_str()),
        ]
    }
}

/// A crew member's service period aboard a vessel
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewSchedule {
    #[serde(rename(serialize = "Context ID"))]
    pub context_id: String,

    #[serde(rename(serialize = "External ID"))]
    pub external_id: String,

    #[serde(rename(serialize = "Crew External ID"))]
    pub crew_external_id: String,

    #[serde(rename(serialize = "Vessel External ID"))]
    pub vessel_external_id: String,

    #[serde(rename(serialize = "Vessel Name"))]
    pub vessel_name: String,

    #[serde(rename(serialize = "Vessel IMO Number"))]
    pub vessel_imo_number: Option<String>,

    #[serde(rename(serialize = "Vessel MMSI Number"))]
    pub vessel_mmsi_number: Option<String>,

    #[serde(rename(serialize = "Service Start At"))]
    pub service_start_at: String,

    #[serde(rename(serialize = "Service End At"))]
    pub service_end_at: String,
}

impl Record for CrewSchedule {
    const KIND: RecordKind = RecordKind::CrewSchedule;

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("context_id", self.context_id.as_str()),
            ("external_id", self.external_id.as_str()),
            ("crew_external_id", self.crew_external_id.as_str()),
            ("vessel_external_id", self.vessel_external_id.as_str()),
            ("vessel_name", self.vessel_name.as_str()),
            ("service_start_at", self.service_start_at.as_str()),
            ("service_end_at", self.service_end_at.as_str()),
        ]
    }
}

/// The position a crew member holds on a crew schedule
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewSchedulePosition {
    #[serde(rename(serialize = "Context ID"))]
    pub context_id: String,

    #[serde(rename(serialize = "External ID"))]
    pub external_id: String,

    #[serde(rename(serialize = "Crew External ID"))]
    pub crew_external_id: String,

    #[serde(rename(serialize = "Vessel External ID"))]
    pub vessel_external_id: String,

    #[serde(rename(serialize = "Position"))]
    pub position: String,

    #[serde(rename(serialize = "Credential Title"))]
    pub credential_title: String,

    #[serde(
        rename(serialize = "Endorsements"),
        serialize_with = "endorsements::serialize",
        deserialize_with = "endorsements::deserialize"
    )]
    pub endorsements: Vec<String>,

    #[serde(rename(serialize = "Service Start At"))]
    pub service_start_at: Option<DateTime<Utc>>,

    #[serde(rename(serialize = "Service End At"))]
    pub service_end_at: Option<DateTime<Utc>>,
}

impl Record for CrewSchedulePosition {
    const KIND: RecordKind = RecordKind::CrewSchedulePosition;

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("context_id", self.context_id.as_str()),
            ("external_id", self.external_id.as_str()),
            ("vessel_external_id", self.vessel_external_id.as_str()),
            ("crew_external_id", self.crew_external_id.as_str()),
            ("position", self.position.as_str()),
            ("credential_title", self.credential_title.as_str()),
        ]
    }
}
