//! Input limits shared by the contract and its clients.
//!
//! The byte-level checks operate on raw UTF-8 so callers on either side of
//! the wire can apply them without converting between string types.

/// Minimum display-name length in bytes.
pub const MIN_NAME_LEN: usize = 2;
/// Maximum display-name length in bytes.
pub const MAX_NAME_LEN: usize = 64;

/// Inclusive age bounds for registration.
pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;

/// Minimum report-body length in bytes.
pub const MIN_REPORT_LEN: usize = 2;
/// Maximum report-body length in bytes.
pub const MAX_REPORT_LEN: usize = 1024;

/// A display name must be within the length bounds and consist of printable
/// ASCII (space through tilde).
pub fn name_is_valid(name: &[u8]) -> bool {
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name.len()) {
        return false;
    }
    name.iter().all(|&b| (32..=126).contains(&b))
}

pub fn age_is_valid(age: u32) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}

/// Report bodies are free-form text; only the length is bounded.
pub fn report_body_is_valid(body: &[u8]) -> bool {
    (MIN_REPORT_LEN..=MAX_REPORT_LEN).contains(&body.len())
}
