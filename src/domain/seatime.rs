//! Crew sea-time records and days-worked calculation

use super::errors::ValidationError;
use super::kind::RecordKind;
use super::record::{check_required, Record};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::io;

const SECONDS_PER_DAY: i64 = 86_400;

/// Shift length, in hours, credited one-for-one
const STANDARD_SHIFT_HOURS: u32 = 8;

/// Shift length, in hours, credited at [`EXTENDED_SHIFT_MULTIPLIER`]
const EXTENDED_SHIFT_HOURS: u32 = 12;

const EXTENDED_SHIFT_MULTIPLIER: f64 = 1.5;

/// Sea-time a crew member spent aboard a vessel
///
/// Either a crewed-on/crewed-off pair or a positive `days` count is required.
/// The CSV row carries an extra `Days Worked` column computed by
/// [`CrewSeatime::days_worked_at`] against the upload instant.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CrewSeatime {
    pub context_id: String,
    pub crew_external_id: String,
    pub crewed_on_at: Option<DateTime<Utc>>,
    pub crewed_off_at: Option<DateTime<Utc>>,
    /// Explicit day count, used instead of the crewed-on/off dates
    pub days: Option<f64>,
    pub position: Option<String>,
    /// Shift length in hours (8 or 12)
    pub shift_hours: Option<u32>,
    pub vessel_name: String,
    pub vessel_external_id: Option<String>,
    pub vessel_imo_number: Option<String>,
    pub vessel_mmsi_number: Option<String>,
    pub vessel_type: Option<String>,
    pub vessel_gross_tonnage: Option<f64>,
    pub vessel_horsepower: Option<f64>,
    pub vessel_route: Option<String>,
    pub day_rate: Option<f64>,
    pub currency: Option<String>,
}

impl CrewSeatime {
    /// Creates a seatime record with its required identifying fields set
    ///
    /// Dates or a day count still have to be supplied before it validates.
    pub fn new(
        context_id: impl Into<String>,
        crew_external_id: impl Into<String>,
        vessel_name: impl Into<String>,
    ) -> Self {
        Self {
            context_id: context_id.into(),
            crew_external_id: crew_external_id.into(),
            vessel_name: vessel_name.into(),
            ..Self::default()
        }
    }

    /// Days credited for this record, measured against the current time
    pub fn days_worked(&self) -> f64 {
        self.days_worked_at(Utc::now())
    }

    /// Days credited for this record, with `now` standing in for a missing
    /// crewed-off date
    ///
    /// - With a day count: the count, times 1.0 for an 8 hour shift or 1.5 for
    ///   a 12 hour shift. Any other shift length credits 0 days.
    /// - With a crewed-on date: whole days from crewed-on to crewed-off (or
    ///   `now`), counting both ends. An 8 hour shift credits 1.0, every other
    ///   shift length 1.5.
    /// - Otherwise 0.
    ///
    /// Without a shift length the base value is returned unchanged.
    pub fn days_worked_at(&self, now: DateTime<Utc>) -> f64 {
        if let Some(days) = self.days {
            return match self.shift_hours {
                None | Some(STANDARD_SHIFT_HOURS) => days,
                Some(EXTENDED_SHIFT_HOURS) => days * EXTENDED_SHIFT_MULTIPLIER,
                Some(_) => 0.0,
            };
        }

        if let Some(crewed_on) = self.crewed_on_at {
            let crewed_off = self.crewed_off_at.unwrap_or(now);
            let inclusive = crewed_off - crewed_on + Duration::days(1);
            let whole_days = inclusive.num_seconds().div_euclid(SECONDS_PER_DAY) as f64;

            // Unknown shift lengths fall through to the extended multiplier here,
            // unlike the day-count branch above.
            return match self.shift_hours {
                None | Some(STANDARD_SHIFT_HOURS) => whole_days,
                Some(_) => whole_days * EXTENDED_SHIFT_MULTIPLIER,
            };
        }

        0.0
    }

    fn has_duration(&self) -> bool {
        let has_dates = self.crewed_on_at.is_some() && self.crewed_off_at.is_some();
        let has_days = self.days.is_some_and(|days| days > 0.0);
        has_dates || has_days
    }
}

impl Record for CrewSeatime {
    const KIND: RecordKind = RecordKind::CrewSeatime;

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("context_id", self.context_id.as_str()),
            ("crew_external_id", self.crew_external_id.as_str()),
            ("vessel_name", self.vessel_name.as_str()),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_required(Self::KIND, &self.required_fields())?;
        if !self.has_duration() {
            return Err(ValidationError::SeatimeDuration { kind: Self::KIND });
        }
        Ok(())
    }

    fn write_row<W: io::Write>(
        &self,
        writer: &mut csv::Writer<W>,
        as_of: DateTime<Utc>,
    ) -> csv::Result<()> {
        writer.serialize(self.row_at(as_of))
    }
}

/// CSV row for a seatime record, including the derived day count
#[derive(Serialize)]
struct SeatimeRow<'a> {
    #[serde(rename = "Context ID")]
    context_id: &'a str,
    #[serde(rename = "Crew External ID")]
    crew_external_id: &'a str,
    #[serde(rename = "Crewed On At")]
    crewed_on_at: Option<DateTime<Utc>>,
    #[serde(rename = "Crewed Off At")]
    crewed_off_at: Option<DateTime<Utc>>,
    #[serde(rename = "Days")]
    days: Option<f64>,
    #[serde(rename = "Days Worked")]
    days_worked: f64,
    #[serde(rename = "Position")]
    position: Option<&'a str>,
    #[serde(rename = "Shift Hours")]
    shift_hours: Option<u32>,
    #[serde(rename = "Vessel Name")]
    vessel_name: &'a str,
    #[serde(rename = "Vessel External ID")]
    vessel_external_id: Option<&'a str>,
    #[serde(rename = "Vessel IMO Number")]
    vessel_imo_number: Option<&'a str>,
    #[serde(rename = "Vessel MMSI Number")]
    vessel_mmsi_number: Option<&'a str>,
    #[serde(rename = "Vessel Type")]
    vessel_type: Option<&'a str>,
    #[serde(rename = "Vessel Gross Tonnage")]
    vessel_gross_tonnage: Option<f64>,
    #[serde(rename = "Vessel Horsepower")]
    vessel_horsepower: Option<f64>,
    #[serde(rename = "Vessel Route")]
    vessel_route: Option<&'a str>,
    #[serde(rename = "Day Rate")]
    day_rate: Option<f64>,
    #[serde(rename = "Currency")]
    currency: Option<&'a str>,
}

impl CrewSeatime {
    fn row_at(&self, now: DateTime<Utc>) -> SeatimeRow<'_> {
        SeatimeRow {
            context_id: &self.context_id,
            crew_external_id: &self.crew_external_id,
            crewed_on_at: self.crewed_on_at,
            crewed_off_at: self.crewed_off_at,
            days: self.days,
            days_worked: self.days_worked_at(now),
            position: self.position.as_deref(),
            shift_hours: self.shift_hours,
            vessel_name: &self.vessel_name,
            vessel_external_id: self.vessel_external_id.as_deref(),
            vessel_imo_number: self.vessel_imo_number.as_deref(),
            vessel_mmsi_number: self.vessel_mmsi_number.as_deref(),
            vessel_type: self.vessel_type.as_deref(),
            vessel_gross_tonnage: self.vessel_gross_tonnage,
            vessel_horsepower: self.vessel_horsepower,
            vessel_route: self.vessel_route.as_deref(),
            day_rate: self.day_rate,
            currency: self.currency.as_deref(),
        }
    }
}

impl Serialize for CrewSeatime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.row_at(Utc::now()).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()
    }

    fn with_days(days: f64, shift_hours: Option<u32>) -> CrewSeatime {
        CrewSeatime {
            days: Some(days),
            shift_hours,
            ..CrewSeatime::new("ctx", "C-1", "Northern Star")
        }
    }

    fn with_dates(
        on: DateTime<Utc>,
        off: Option<DateTime<Utc>>,
        shift_hours: Option<u32>,
    ) -> CrewSeatime {
        CrewSeatime {
            crewed_on_at: Some(on),
            crewed_off_at: off,
            shift_hours,
            ..CrewSeatime::new("ctx", "C-1", "Northern Star")
        }
    }

    #[test_case(Some(8), 10.0 ; "eight hour shift")]
    #[test_case(Some(12), 15.0 ; "twelve hour shift")]
    #[test_case(Some(99), 0.0 ; "unknown shift")]
    #[test_case(None, 10.0 ; "no shift")]
    fn test_days_worked_from_day_count(shift: Option<u32>, expected: f64) {
        assert_eq!(with_days(10.0, shift).days_worked_at(day(1)), expected);
    }

    #[test]
    fn test_days_worked_inclusive_date_range() {
        let seatime = with_dates(day(1), Some(day(5)), Some(8));
        assert_eq!(seatime.days_worked_at(day(20)), 5.0);
    }

    #[test]
    fn test_days_worked_date_range_twelve_hour_shift() {
        let seatime = with_dates(day(1), Some(day(5)), Some(12));
        assert_eq!(seatime.days_worked_at(day(20)), 7.5);
    }

    #[test]
    fn test_days_worked_date_range_unknown_shift_uses_extended_multiplier() {
        let seatime = with_dates(day(1), Some(day(5)), Some(99));
        assert_eq!(seatime.days_worked_at(day(20)), 7.5);
    }

    #[test]
    fn test_days_worked_floors_partial_days() {
        let off = Utc.with_ymd_and_hms(2024, 3, 3, 18, 0, 0).unwrap();
        let seatime = with_dates(day(1), Some(off), None);
        assert_eq!(seatime.days_worked_at(day(20)), 3.0);
    }

    #[test]
    fn test_days_worked_open_ended_uses_now() {
        let seatime = with_dates(day(1), None, Some(8));
        assert_eq!(seatime.days_worked_at(day(10)), 10.0);
    }

    #[test]
    fn test_days_worked_same_day() {
        let seatime = with_dates(day(1), Some(day(1)), None);
        assert_eq!(seatime.days_worked_at(day(20)), 1.0);
    }

    #[test]
    fn test_days_worked_day_count_takes_precedence() {
        let mut seatime = with_dates(day(1), Some(day(5)), Some(8));
        seatime.days = Some(2.0);
        assert_eq!(seatime.days_worked_at(day(20)), 2.0);
    }

    #[test]
    fn test_days_worked_nothing_set() {
        let seatime = CrewSeatime::new("ctx", "C-1", "Northern Star");
        assert_eq!(seatime.days_worked_at(day(20)), 0.0);
    }

    #[test]
    fn test_validate_with_dates() {
        assert!(with_dates(day(1), Some(day(5)), None).validate().is_ok());
    }

    #[test]
    fn test_validate_with_day_count() {
        assert!(with_days(3.0, None).validate().is_ok());
    }

    #[test]
    fn test_validate_requires_duration() {
        let err = with_dates(day(1), None, None).validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::SeatimeDuration {
                kind: RecordKind::CrewSeatime
            }
        );

        let err = with_days(0.0, None).validate().unwrap_err();
        assert!(matches!(err, ValidationError::SeatimeDuration { .. }));
    }

    #[test]
    fn test_validate_required_fields_before_duration() {
        let mut seatime = CrewSeatime::new("ctx", "C-1", "");
        let err = seatime.validate().unwrap_err();
        assert_eq!(err.field(), Some("vessel_name"));

        seatime.vessel_name = "Northern Star".to_string();
        seatime.crew_external_id = String::new();
        let err = seatime.validate().unwrap_err();
        assert_eq!(err.field(), Some("crew_external_id"));
    }

    #[test]
    fn test_serialize_includes_days_worked() {
        let seatime = with_days(10.0, Some(12));
        let json = serde_json::to_value(&seatime).unwrap();
        assert_eq!(json["Days Worked"], 15.0);
        assert_eq!(json["Vessel Name"], "Northern Star");
        assert!(json["Position"].is_null());
    }

    #[test]
    fn test_write_row_uses_upload_instant() {
        let seatime = with_dates(day(1), None, Some(8));
        let mut writer = csv::Writer::from_writer(Vec::new());
        seatime.write_row(&mut writer, day(10)).unwrap();
        let csv = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let headers = reader.headers().unwrap().clone();
        let row = reader.records().next().unwrap().unwrap();
        let column = headers.iter().position(|h| h == "Days Worked").unwrap();
        assert_eq!(row[column].parse::<f64>().unwrap(), 10.0);
    }
}
