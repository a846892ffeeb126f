//! Endorsement list encoding
//!
//! CSV has one value per column, so endorsement lists travel as a single
//! string joined with [`SEPARATOR`]. Endorsement text is not escaped: an
//! endorsement that itself contains `*|*` will not survive a round trip.

use serde::{Deserialize, Deserializer, Serializer};

/// Separator placed between endorsements inside one CSV cell
pub const SEPARATOR: &str = "*|*";

/// Joins endorsements into a single cell value
///
/// # Examples
///
/// ```
/// use oceo_sftp::domain::endorsements;
///
/// assert_eq!(endorsements::encode(&["STCW", "GMDSS"]), "STCW*|*GMDSS");
/// assert_eq!(endorsements::encode::<&str>(&[]), "");
/// ```
pub fn encode<S: AsRef<str>>(endorsements: &[S]) -> String {
    endorsements
        .iter()
        .map(|endorsement| endorsement.as_ref())
        .collect::<Vec<&str>>()
        .join(SEPARATOR)
}

/// Splits a cell value back into endorsements
///
/// An empty cell decodes to an empty list.
pub fn decode(encoded: &str) -> Vec<String> {
    if encoded.is_empty() {
        return Vec::new();
    }
    encoded.split(SEPARATOR).map(str::to_string).collect()
}

/// `serialize_with` helper writing a list as one encoded cell
pub fn serialize<S>(endorsements: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&encode(endorsements))
}

/// `deserialize_with` helper accepting either a list or an encoded string
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        List(Vec<String>),
        Encoded(String),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::List(list) => list,
        Repr::Encoded(encoded) => decode(&encoded),
    })
}
