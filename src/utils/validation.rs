use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use validator::Validate;

use crate::errors::SchemaError;

/// UNI code: 2-3 lowercase letters followed by 1-4 digits (e.g. "abc1234").
pub static UNI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}[0-9]{1,4}$").expect("valid regex"));

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), SchemaError> {
    payload.validate().map_err(|err| {
        debug!("payload rejected: {}", err);
        SchemaError::Validation(err)
    })
}
