use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::OfferingService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn get_offering(
    service: &OfferingService,
    request: &HttpRequest,
    offering_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_offering(offering_id).await {
        Ok(Some(offering)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(offering, "Query successful")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Offering not found",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
