use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::OfferingService;
use crate::engine::time::SemesterKey;
use crate::models::ApiResponse;
use crate::models::offerings::responses::OfferingListResponse;
use crate::services::error_response;

pub async fn list_offerings(
    service: &OfferingService,
    request: &HttpRequest,
    semester: SemesterKey,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_offerings(semester).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            OfferingListResponse { semester, items },
            "Query successful",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
