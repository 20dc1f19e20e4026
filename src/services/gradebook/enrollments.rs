use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::recompute::ClassSnapshot;
use super::{GradebookService, require_class};
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::gradebook::entities::Enrollment;
use crate::models::gradebook::requests::EnrollRequest;
use crate::models::gradebook::responses::EnrollmentListResponse;
use crate::services::error_response;
use crate::storage::Storage;

impl GradebookService {
    /// 选课，初始成绩按学生当前情况计算（没有可计分分类时为 "--"）
    pub async fn enroll_student(
        &self,
        storage: &Arc<dyn Storage>,
        class_id: i64,
        req: EnrollRequest,
    ) -> Result<Enrollment> {
        let _guard = self.write_gate.lock().await;

        require_class(storage, class_id).await?;
        let snapshot = ClassSnapshot::load(storage, class_id).await?;
        let grade = snapshot.percentage_for(req.student_id).grade();

        let enrollment = storage
            .create_enrollment(req.student_id, class_id, grade)
            .await?;
        info!(
            "Student {} enrolled in class {} with grade {}",
            enrollment.student_id, class_id, enrollment.grade
        );
        Ok(enrollment)
    }

    /// 班级花名册，成绩为最近一次重算后保存的值
    pub async fn class_roster(
        &self,
        storage: &Arc<dyn Storage>,
        class_id: i64,
    ) -> Result<EnrollmentListResponse> {
        require_class(storage, class_id).await?;
        let items = storage.list_enrollments_by_class(class_id).await?;
        Ok(EnrollmentListResponse { class_id, items })
    }
}

pub async fn enroll(
    service: &GradebookService,
    request: &HttpRequest,
    class_id: i64,
    req: EnrollRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match service.enroll_student(&storage, class_id, req).await {
        Ok(enrollment) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(enrollment, "Enrolled successfully"))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn list_enrollments(
    service: &GradebookService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match service.class_roster(&storage, class_id).await {
        Ok(roster) => Ok(HttpResponse::Ok().json(ApiResponse::success(roster, "Query successful"))),
        Err(e) => Ok(error_response(&e)),
    }
}
