//! Page source inspection.

use tracing::debug;

use crate::config::ExpectedContacts;
use crate::error::VerifyError;

/// Checks that every expected contact appears in `source`.
///
/// Returns the number of contacts verified, or
/// [`VerifyError::MissingContact`] for the first one that is absent.
pub fn check_page_source(source: &str, expected: &ExpectedContacts) -> Result<usize, VerifyError> {
    check_names(source, expected.names())
}

/// Checks `names` in order against `source` using an exact,
/// case-sensitive substring match. Names after the first missing one
/// are not evaluated.
pub fn check_names<I, S>(source: &str, names: I) -> Result<usize, VerifyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut verified = 0;
    for name in names {
        let name = name.as_ref();
        if !source.contains(name) {
            return Err(VerifyError::MissingContact {
                name: name.to_string(),
            });
        }
        debug!("Found {}", name);
        verified += 1;
    }
    Ok(verified)
}
