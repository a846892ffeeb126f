//! Record kind descriptor
//!
//! Every record set uploaded to OCEO belongs to exactly one kind. The kind
//! decides the tag used in the remote file name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of records the exporter can upload
///
/// # Examples
///
/// ```
/// use oceo_sftp::domain::RecordKind;
/// use std::str::FromStr;
///
/// let kind = RecordKind::from_str("credentials").unwrap();
/// assert_eq!(kind, RecordKind::CrewCredential);
/// assert_eq!(kind.tag(), "credentials");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Crew members
    Crew,
    /// Credentials held by crew members
    CrewCredential,
    /// Sea-time logged by crew members
    CrewSeatime,
    /// Vessels
    Vessel,
    /// Vessel service schedules
    VesselSchedule,
    /// Positions required on a vessel schedule
    VesselSchedulePosition,
    /// Crew service schedules
    CrewSchedule,
    /// Positions held by crew on a schedule
    CrewSchedulePosition,
}

impl RecordKind {
    /// All record kinds, in upload order
    pub const ALL: [RecordKind; 8] = [
        RecordKind::Crew,
        RecordKind::CrewCredential,
        RecordKind::CrewSeatime,
        RecordKind::Vessel,
        RecordKind::VesselSchedule,
        RecordKind::VesselSchedulePosition,
        RecordKind::CrewSchedule,
        RecordKind::CrewSchedulePosition,
    ];

    /// Tag used in the remote file name (`{org}_{tag}_{unix}.csv`)
    pub fn tag(&self) -> &'static str {
        match self {
            RecordKind::Crew => "crew",
            RecordKind::CrewCredential => "credentials",
            RecordKind::CrewSeatime => "seatime",
            RecordKind::Vessel => "vessels",
            RecordKind::VesselSchedule => "vesselschedules",
            RecordKind::VesselSchedulePosition => "vesselschedulepositions",
            RecordKind::CrewSchedule => "crewschedules",
            RecordKind::CrewSchedulePosition => "crewschedulepositions",
        }
    }

    /// Human readable name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Crew => "Crew",
            RecordKind::CrewCredential => "CrewCredential",
            RecordKind::CrewSeatime => "CrewSeatime",
            RecordKind::Vessel => "Vessel",
            RecordKind::VesselSchedule => "VesselSchedule",
            RecordKind::VesselSchedulePosition => "VesselSchedulePosition",
            RecordKind::CrewSchedule => "CrewSchedule",
            RecordKind::CrewSchedulePosition => "CrewSchedulePosition",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    /// Accepts the file tag (`credentials`) or the snake_case kind name
    /// (`crew_credential`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        RecordKind::ALL
            .iter()
            .copied()
            .find(|kind| {
                kind.tag() == normalized
                    || kind.name().to_lowercase() == normalized.replace('_', "")
            })
            .ok_or_else(|| {
                let tags: Vec<&str> = RecordKind::ALL.iter().map(|k| k.tag()).collect();
                format!(
                    "Unknown record kind '{s}'. Must be one of: {}",
                    tags.join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(RecordKind::Crew, "crew")]
    #[test_case(RecordKind::CrewCredential, "credentials")]
    #[test_case(RecordKind::CrewSeatime, "seatime")]
    #[test_case(RecordKind::Vessel, "vessels")]
    #[test_case(RecordKind::VesselSchedule, "vesselschedules")]
    #[test_case(RecordKind::VesselSchedulePosition, "vesselschedulepositions")]
    #[test_case(RecordKind::CrewSchedule, "crewschedules")]
    #[test_case(RecordKind::CrewSchedulePosition, "crewschedulepositions")]
    fn test_tag(kind: RecordKind, tag: &str) {
        assert_eq!(kind.tag(), tag);
        assert_eq!(RecordKind::from_str(tag).unwrap(), kind);
    }

    #[test]
    fn test_from_str_kind_name() {
        assert_eq!(
            RecordKind::from_str("crew_schedule_position").unwrap(),
            RecordKind::CrewSchedulePosition
        );
        assert_eq!(
            RecordKind::from_str("VesselSchedule").unwrap(),
            RecordKind::VesselSchedule
        );
        assert_eq!(
            RecordKind::from_str("crew-seatime").unwrap(),
            RecordKind::CrewSeatime
        );
    }

    #[test]
    fn test_from_str_unknown() {
        let err = RecordKind::from_str("boats").unwrap_err();
        assert!(err.contains("Unknown record kind 'boats'"));
        assert!(err.contains("vesselschedules"));
    }

    #[test]
    fn test_display() {
        assert_eq!(RecordKind::CrewCredential.to_string(), "CrewCredential");
    }
}
