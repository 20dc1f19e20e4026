use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::warn;

use super::StudentService;
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::students::responses::{StudentClassItem, StudentClassListResponse};
use crate::services::error_response;
use crate::storage::Storage;

impl StudentService {
    /// 学生所选班级及已保存的成绩，按班级 ID 排序
    pub async fn student_classes(
        &self,
        storage: &Arc<dyn Storage>,
        student_id: i64,
    ) -> Result<StudentClassListResponse> {
        let enrollments = storage.list_enrollments_by_student(student_id).await?;

        let mut items = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            match storage.get_offering(enrollment.class_id).await? {
                Some(class) => items.push(StudentClassItem {
                    class,
                    grade: enrollment.grade,
                }),
                None => warn!(
                    "Student {} enrolled in missing class {}",
                    student_id, enrollment.class_id
                ),
            }
        }
        items.sort_by_key(|item| item.class.id);

        Ok(StudentClassListResponse { student_id, items })
    }
}

pub async fn list_classes(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match service.student_classes(&storage, student_id).await {
        Ok(classes) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(classes, "Query successful")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
