//! Reading list endpoints.
//!
//! The directory answers `404` with a message such as "No employees found"
//! instead of an empty array when a collection has no records.

use tracing::debug;

use crate::domain::ports::DirectoryApiError;

/// Map a list call's `404` to an empty collection. Other failures pass
/// through unchanged.
pub(crate) fn empty_when_not_found<T>(
    listed: Result<Vec<T>, DirectoryApiError>,
    collection: &'static str,
) -> Result<Vec<T>, DirectoryApiError> {
    match listed {
        Err(err) if err.is_not_found() => {
            debug!(collection, message = %err.user_message(), "collection is empty");
            Ok(Vec::new())
        }
        other => other,
    }
}
