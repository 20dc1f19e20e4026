pub mod gradebook;
pub mod offerings;
pub mod students;

pub use gradebook::GradebookService;
pub use offerings::OfferingService;
pub use students::StudentService;

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use tracing::error;

use crate::errors::LmsError;
use crate::models::{ApiResponse, ErrorCode};

/// 错误响应辅助函数：业务错误映射为 HTTP 状态码与错误码
pub(crate) fn error_response(err: &LmsError) -> HttpResponse {
    let status = match err {
        LmsError::InvalidRange(_)
        | LmsError::Validation(_)
        | LmsError::UnknownGradeLetter(_)
        | LmsError::DateParse(_) => StatusCode::BAD_REQUEST,
        LmsError::NotFound(_) => StatusCode::NOT_FOUND,
        LmsError::Duplicate(_) | LmsError::OfferingConflict(_) => StatusCode::CONFLICT,
        _ => {
            error!("{}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    HttpResponse::build(status).json(ApiResponse::error_empty(
        ErrorCode::from(err),
        err.format_simple(),
    ))
}
