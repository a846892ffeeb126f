//! Crew and crew credential records

use super::endorsements;
use super::kind::RecordKind;
use super::record::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A crew member
///
/// Serializes to one row of the `crew` CSV file.
///
/// # Examples
///
/// ```
/// use oceo_sftp::domain::{Crew, Record};
///
/// let mut crew = Crew::new("ctx-1", "C-100", "Ada", "Lovelace");
/// crew.city = Some("Seattle".to_string());
/// crew.state = Some("WA".to_string());
///
/// assert!(crew.validate().is_ok());
/// assert_eq!(crew.location(), "Seattle, WA");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Crew {
    /// Organization context the record belongs to
    #[serde(rename(serialize = "Context ID"))]
    pub context_id: String,

    /// Caller-assigned crew identifier
    #[serde(rename(serialize = "External ID"))]
    pub external_id: String,

    #[serde(rename(serialize = "First Name"))]
    pub first_name: String,

    #[serde(rename(serialize = "Last Name"))]
    pub last_name: String,

    #[serde(rename(serialize = "Middle Name"))]
    pub middle_name: Option<String>,

    #[serde(rename(serialize = "Job Title"))]
    pub job_title: Option<String>,

    #[serde(rename(serialize = "City"))]
    pub city: Option<String>,

    #[serde(rename(serialize = "State"))]
    pub state: Option<String>,

    #[serde(rename(serialize = "Country"))]
    pub country: Option<String>,

    #[serde(rename(serialize = "Email"))]
    pub email: Option<String>,

    #[serde(rename(serialize = "Phone"))]
    pub phone: Option<String>,
}

impl Crew {
    /// Creates a crew record with its required fields set
    pub fn new(
        context_id: impl Into<String>,
        external_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            context_id: context_id.into(),
            external_id: external_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    /// Returns the crew member's location
    ///
    /// Non-empty city and state are joined with `", "`. A present country is
    /// appended as `", {country}"` regardless of what precedes it, so a record
    /// with only a country yields `", {country}"`.
    pub fn location(&self) -> String {
        let mut location = [self.city.as_deref(), self.state.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        if let Some(country) = &self.country {
            location.push_str(", ");
            location.push_str(country);
        }

        location
    }

    /// Location of an optional record; empty for `None`
    pub fn location_of(crew: Option<&Crew>) -> String {
        crew.map(Crew::location).unwrap_or_default()
    }
}

impl Record for Crew {
    const KIND: RecordKind = RecordKind::Crew;

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("context_id", self.context_id.as_str()),
            ("external_id", self.external_id.as_str()),
            ("first_name", self.first_name.as_str()),
            ("last_name", self.last_name.as_str()),
        ]
    }
}

/// A credential (license, certificate) held by a crew member
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewCredential {
    #[serde(rename(serialize = "Context ID"))]
    pub context_id: String,

    /// External ID of the crew member holding the credential
    #[serde(rename(serialize = "Crew External ID"))]
    pub crew_external_id: String,

    /// Credential or document number
    #[serde(rename(serialize = "Number"))]
    pub number: Option<String>,

    #[serde(rename(serialize = "Title"))]
    pub title: String,

    #[serde(rename(serialize = "Type"))]
    pub credential_type: Option<String>,

    /// Endorsements, written as one `*|*` separated cell
    #[serde(
        rename(serialize = "Endorsements"),
        serialize_with = "endorsements::serialize",
        deserialize_with = "endorsements::deserialize"
    )]
    pub endorsements: Vec<String>,

    #[serde(rename(serialize = "Issued At"))]
    pub issued_at: Option<DateTime<Utc>>,

    #[serde(rename(serialize = "Expires At"))]
    pub expires_at: Option<DateTime<Utc>>,
}

impl CrewCredential {
    /// Creates a credential record with its required fields set
    pub fn new(
        context_id: impl Into<String>,
        crew_external_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            context_id: context_id.into(),
            crew_external_id: crew_external_id.into(),
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Record for CrewCredential {
    const KIND: RecordKind = RecordKind::CrewCredential;

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("context_id", self.context_id.as_str()),
            ("crew_external_id", self.crew_external_id.as_str()),
            ("title", self.title.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn crew_with(city: Option<&str>, state: Option<&str>, country: Option<&str>) -> Crew {
        Crew {
            city: city.map(str::to_string),
            state: state.map(str::to_string),
            country: country.map(str::to_string),
            ..Crew::new("ctx", "C-1", "Ada", "Lovelace")
        }
    }

    #[test]
    fn test_crew_valid() {
        assert!(Crew::new("ctx", "C-1", "Ada", "Lovelace").validate().is_ok());
    }

    #[test]
    fn test_crew_missing_fields_reported_in_order() {
        let crew = Crew::default();
        assert_eq!(crew.validate().unwrap_err().field(), Some("context_id"));

        let crew = Crew::new("ctx", "C-1", "", "");
        assert_eq!(
            crew.validate().unwrap_err(),
            ValidationError::FieldMissing {
                kind: RecordKind::Crew,
                field: "first_name"
            }
        );

        let crew = Crew::new("ctx", "C-1", "Ada", "");
        assert_eq!(crew.validate().unwrap_err().field(), Some("last_name"));
    }

    #[test]
    fn test_optional_fields_do_not_affect_validation() {
        let crew = Crew {
            email: Some(String::new()),
            ..Crew::new("ctx", "C-1", "Ada", "Lovelace")
        };
        assert!(crew.validate().is_ok());
    }

    #[test]
    fn test_location_city_only() {
        assert_eq!(crew_with(Some("Seattle"), None, None).location(), "Seattle");
    }

    #[test]
    fn test_location_city_state() {
        assert_eq!(
            crew_with(Some("Seattle"), Some("WA"), None).location(),
            "Seattle, WA"
        );
    }

    #[test]
    fn test_location_city_state_country() {
        assert_eq!(
            crew_with(Some("Seattle"), Some("WA"), Some("USA")).location(),
            "Seattle, WA, USA"
        );
    }

    #[test]
    fn test_location_skips_empty_segments() {
        assert_eq!(crew_with(Some(""), Some("WA"), None).location(), "WA");
        assert_eq!(crew_with(None, None, None).location(), "");
    }

    #[test]
    fn test_location_country_is_concatenated() {
        assert_eq!(crew_with(None, None, Some("USA")).location(), ", USA");
        assert_eq!(crew_with(Some("Oslo"), None, Some("Norway")).location(), "Oslo, Norway");
    }

    #[test]
    fn test_location_of_none() {
        assert_eq!(Crew::location_of(None), "");
        let crew = crew_with(Some("Seattle"), None, None);
        assert_eq!(Crew::location_of(Some(&crew)), "Seattle");
    }

    #[test]
    fn test_credential_validation() {
        assert!(CrewCredential::new("ctx", "C-1", "Master 500GT")
            .validate()
            .is_ok());

        let err = CrewCredential::new("ctx", "", "Master 500GT")
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), Some("crew_external_id"));

        let err = CrewCredential::new("ctx", "C-1", "").validate().unwrap_err();
        assert_eq!(err.field(), Some("title"));
    }

    #[test]
    fn test_crew_deserialize_snake_case() {
        let crew: Crew = serde_json::from_str(
            r#"{"context_id": "ctx", "external_id": "C-1", "first_name": "Ada", "last_name": "Lovelace", "city": "Seattle"}"#,
        )
        .unwrap();
        assert_eq!(crew.first_name, "Ada");
        assert_eq!(crew.city.as_deref(), Some("Seattle"));
        assert!(crew.phone.is_none());
    }

    #[test]
    fn test_credential_deserialize_missing_required_field_is_empty() {
        let credential: CrewCredential =
            serde_json::from_str(r#"{"context_id": "ctx", "title": "AB"}"#).unwrap();
        assert!(credential.crew_external_id.is_empty());
        assert!(credential.validate().is_err());
    }
}
