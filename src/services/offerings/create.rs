use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{info, warn};

use super::OfferingService;
use crate::engine::schedule::{ConflictResult, check_offering_conflict};
use crate::errors::{LmsError, Result};
use crate::models::offerings::entities::Offering;
use crate::models::offerings::requests::CreateOfferingRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;
use crate::storage::Storage;

/// 排课结果
#[derive(Debug)]
pub enum ScheduleOutcome {
    Created(Offering),
    Rejected(ConflictResult),
}

impl OfferingService {
    /// 检查冲突并写入开课
    ///
    /// 读取同学期开课、冲突检查、写入在同一把写锁内完成，
    /// 两个并发请求不会同时通过检查。
    pub async fn schedule(
        &self,
        storage: &Arc<dyn Storage>,
        req: CreateOfferingRequest,
    ) -> Result<ScheduleOutcome> {
        let candidate = req.into_new_offering()?;
        // 非法时间段无需等待写锁
        candidate.time_range()?;

        let _guard = self.write_gate.lock().await;

        let existing = storage.list_offerings(candidate.semester).await?;
        let conflict = check_offering_conflict(&candidate, &existing)?;
        if conflict.has_conflict() {
            warn!(
                "Offering of course {} in {} rejected: {}",
                candidate.course_id,
                candidate.semester,
                conflict.reasons().join(", ")
            );
            return Ok(ScheduleOutcome::Rejected(conflict));
        }

        let offering = storage.create_offering(candidate).await?;
        info!(
            "Offering {} created: course {} in {} at {} {}-{}",
            offering.id,
            offering.course_id,
            offering.semester,
            offering.room,
            offering.start_time,
            offering.end_time
        );
        Ok(ScheduleOutcome::Created(offering))
    }
}

pub async fn create_offering(
    service: &OfferingService,
    request: &HttpRequest,
    req: CreateOfferingRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match service.schedule(&storage, req).await {
        Ok(ScheduleOutcome::Created(offering)) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(offering, "Offering created successfully"))),
        Ok(ScheduleOutcome::Rejected(conflict)) => {
            let err = LmsError::offering_conflict(conflict.reasons().join(", "));
            Ok(HttpResponse::Conflict().json(ApiResponse::error(
                ErrorCode::from(&err),
                conflict,
                err.format_simple(),
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
