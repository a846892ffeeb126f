//! Vessel records

use super::kind::RecordKind;
use super::record::Record;
use serde::{Deserialize, Serialize};

/// A vessel operated by the organization
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vessel {
    #[serde(rename(serialize = "Context ID"))]
    pub context_id: String,

    #[serde(rename(serialize = "External ID"))]
    pub external_id: String,

    #[serde(rename(serialize = "Vessel External ID"))]
    pub vessel_external_id: String,

    #[serde(rename(serialize = "Name"))]
    pub name: String,

    #[serde(rename(serialize = "MMSI Number"))]
    pub mmsi_number: Option<String>,

    #[serde(rename(serialize = "IMO Number"))]
    pub imo_number: Option<String>,

    /// Any other identifier the organization tracks the vessel by
    #[serde(rename(serialize = "Additional Identifier"))]
    pub additional_identifier: Option<String>,
}

impl Vessel {
    /// Creates a vessel record with its required fields set
    pub fn new(
        context_id: impl Into<String>,
        external_id: impl Into<String>,
        vessel_external_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            context_id: context_id.into(),
            external_id: external_id.into(),
            vessel_external_id: vessel_external_id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Record for Vessel {
    const KIND: RecordKind = RecordKind::Vessel;

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("context_id", self.context_id.as_str()),
            ("external_id", self.external_id.as_str()),
            ("vessel_external_id", self.vessel_external_id.as_str()),
            ("name", self.name.as_str()),
        ]
    }
}
