//! Authoritative input validation at the contract boundary.
//!
//! Clients are expected to pre-validate with the same limits from the
//! `common` crate; everything is checked again here because the contract is
//! the only layer that can be trusted to enforce them.

use common::{timestamp, validation as limits};
use soroban_sdk::String;

use crate::errors::ContractError;

/// Longest wire form we accept for a grouped timestamp:
/// `u64::MAX` is 20 digits plus 6 separators.
const MAX_TIMESTAMP_LEN: usize = 26;

/// Copy a Soroban string into `buf` and hand back the filled prefix.
/// Returns `None` when the string does not fit.
fn as_bytes<'a>(value: &String, buf: &'a mut [u8]) -> Option<&'a [u8]> {
    let len = value.len() as usize;
    if len > buf.len() {
        return None;
    }
    value.copy_into_slice(&mut buf[..len]);
    Some(&buf[..len])
}

pub fn validate_name(name: &String) -> Result<(), ContractError> {
    let mut buf = [0u8; limits::MAX_NAME_LEN];
    match as_bytes(name, &mut buf) {
        Some(bytes) if limits::name_is_valid(bytes) => Ok(()),
        _ => Err(ContractError::InvalidName),
    }
}

pub fn validate_age(age: u32) -> Result<(), ContractError> {
    if limits::age_is_valid(age) {
        Ok(())
    } else {
        Err(ContractError::InvalidAge)
    }
}

pub fn validate_report_body(body: &String) -> Result<(), ContractError> {
    let mut buf = [0u8; limits::MAX_REPORT_LEN];
    match as_bytes(body, &mut buf) {
        Some(bytes) if limits::report_body_is_valid(bytes) => Ok(()),
        _ => Err(ContractError::InvalidReport),
    }
}

/// The timestamp must decode as a comma-grouped decimal so readers can
/// recover the integer value losslessly.
pub fn validate_reported_at(reported_at: &String) -> Result<(), ContractError> {
    let mut buf = [0u8; MAX_TIMESTAMP_LEN];
    let bytes = match as_bytes(reported_at, &mut buf) {
        Some(bytes) => bytes,
        None => return Err(ContractError::InvalidTimestamp),
    };
    let text = core::str::from_utf8(bytes).map_err(|_| ContractError::InvalidTimestamp)?;
    if timestamp::is_grouped(text) {
        Ok(())
    } else {
        Err(ContractError::InvalidTimestamp)
    }
}
