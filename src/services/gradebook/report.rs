use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::recompute::ClassSnapshot;
use super::{GradebookService, require_class};
use crate::errors::{LmsError, Result};
use crate::models::ApiResponse;
use crate::models::gradebook::responses::ClassGradeResponse;
use crate::services::error_response;
use crate::storage::Storage;

impl GradebookService {
    /// 按当前成绩册实时计算，不写回
    pub async fn class_grade(
        &self,
        storage: &Arc<dyn Storage>,
        class_id: i64,
        student_id: i64,
    ) -> Result<ClassGradeResponse> {
        require_class(storage, class_id).await?;
        if storage.get_enrollment(student_id, class_id).await?.is_none() {
            return Err(LmsError::not_found(format!(
                "Student {student_id} is not enrolled in class {class_id}"
            )));
        }

        let snapshot = ClassSnapshot::load(storage, class_id).await?;
        let result = snapshot.percentage_for(student_id);
        Ok(ClassGradeResponse {
            class_id,
            student_id,
            percentage: result.percentage,
            has_any_graded_category: result.has_any_graded_category,
            grade: result.grade(),
            skipped_categories: result.skipped_categories,
        })
    }
}

pub async fn get_class_grade(
    service: &GradebookService,
    request: &HttpRequest,
    class_id: i64,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match service.class_grade(&storage, class_id, student_id).await {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(report, "Query successful"))),
        Err(e) => Ok(error_response(&e)),
    }
}
