use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{LmsError, Result};

const MAX_NAME_LEN: usize = 100;

static ROOM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ._/-]*$").expect("Invalid room regex"));

/// 名称校验：去除首尾空白后非空、不超过 100 字符、不含控制字符
pub fn validate_name(field: &str, value: &str) -> Result<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LmsError::validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(LmsError::validation(format!(
            "{field} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    if value.chars().any(char::is_control) {
        return Err(LmsError::validation(format!(
            "{field} must not contain control characters"
        )));
    }
    Ok(())
}

/// 教室校验：如 "WEB L104"、"MEB 3147"
pub fn validate_room(room: &str) -> Result<()> {
    validate_name("Room", room)?;
    if !ROOM_RE.is_match(room.trim()) {
        return Err(LmsError::validation(
            "Room must contain only letters, digits, spaces, '.', '_', '/' or '-'",
        ));
    }
    Ok(())
}
