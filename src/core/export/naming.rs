//! Remote file naming
//!
//! Every upload writes `{org}_{tag}_{unix_seconds}.csv` into the configured
//! remote directory. Two uploads of the same kind within one second produce
//! the same name and the second overwrites the first.

use crate::domain::RecordKind;

/// Builds the file name for an upload
///
/// # Examples
///
/// ```
/// use oceo_sftp::core::export::naming::file_name;
/// use oceo_sftp::domain::RecordKind;
///
/// assert_eq!(
///     file_name("acme", RecordKind::Crew, 1_700_000_000),
///     "acme_crew_1700000000.csv"
/// );
/// ```
pub fn file_name(org_name: &str, kind: RecordKind, unix_seconds: i64) -> String {
    format!("{}_{}_{}.csv", org_name, kind.tag(), unix_seconds)
}

/// Joins the remote directory and file name
pub fn remote_path(remote_dir: &str, file_name: &str) -> String {
    let dir = remote_dir.trim_end_matches('/');
    if dir.is_empty() {
        format!("/{file_name}")
    } else {
        format!("{dir}/{file_name}")
    }
}
