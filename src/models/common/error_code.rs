use serde::{Deserialize, Serialize};

use crate::errors::LmsError;

/// 业务错误码
///
/// 0 表示成功；1xxx 通用错误；2xxx 排课；3xxx 成绩册；5xxx 服务端错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    ValidationFailed = 1001,
    NotFound = 1004,

    InvalidTimeRange = 2001,
    OfferingConflict = 2002,

    DuplicateResource = 3009,

    InternalServerError = 5000,
}

impl From<&LmsError> for ErrorCode {
    fn from(err: &LmsError) -> Self {
        match err {
            LmsError::InvalidRange(_) => ErrorCode::InvalidTimeRange,
            LmsError::OfferingConflict(_) => ErrorCode::OfferingConflict,
            LmsError::Validation(_)
            | LmsError::UnknownGradeLetter(_)
            | LmsError::DateParse(_) => ErrorCode::ValidationFailed,
            LmsError::NotFound(_) => ErrorCode::NotFound,
            LmsError::Duplicate(_) => ErrorCode::DuplicateResource,
            LmsError::DivisionUndefined(_)
            | LmsError::StorageOperation(_)
            | LmsError::StoragePluginNotFound(_)
            | LmsError::Serialization(_)
            | LmsError::Configuration(_) => ErrorCode::InternalServerError,
        }
    }
}
