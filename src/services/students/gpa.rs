use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::debug;

use super::StudentService;
use crate::engine::{compute_gpa, counted_classes};
use crate::engine::letter::EnrollmentGrade;
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::students::responses::GpaResponse;
use crate::services::error_response;
use crate::storage::Storage;

impl StudentService {
    /// 汇总学生所有选课记录上保存的成绩
    ///
    /// 没有选课记录的学生 GPA 为 0.0，不视为错误。
    pub async fn compute_student_gpa(
        &self,
        storage: &Arc<dyn Storage>,
        student_id: i64,
    ) -> Result<GpaResponse> {
        let grades: Vec<EnrollmentGrade> = storage
            .list_enrollments_by_student(student_id)
            .await?
            .into_iter()
            .map(|e| e.grade)
            .collect();

        let gpa = compute_gpa(&grades);
        let counted = counted_classes(&grades);
        debug!(
            "Student {}: GPA {:.3} over {} of {} class(es)",
            student_id,
            gpa,
            counted,
            grades.len()
        );

        Ok(GpaResponse {
            student_id,
            gpa,
            counted_classes: counted,
        })
    }
}

pub async fn get_gpa(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match service.compute_student_gpa(&storage, student_id).await {
        Ok(gpa) => Ok(HttpResponse::Ok().json(ApiResponse::success(gpa, "Query successful"))),
        Err(e) => Ok(error_response(&e)),
    }
}
