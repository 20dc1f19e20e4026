use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::recompute::recompute_class_grades;
use super::{GradebookService, require_category};
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::gradebook::entities::Assignment;
use crate::models::gradebook::requests::CreateAssignmentRequest;
use crate::models::gradebook::responses::AssignmentListResponse;
use crate::services::error_response;
use crate::storage::Storage;
use crate::utils::validate_name;

impl GradebookService {
    /// 新作业增加了满分合计，班级内所有学生的成绩都要重算
    pub async fn add_assignment(
        &self,
        storage: &Arc<dyn Storage>,
        category_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        validate_name("Assignment name", &req.name)?;

        let _guard = self.write_gate.lock().await;

        let category = require_category(storage, category_id).await?;
        let assignment = storage.create_assignment(category_id, req).await?;
        info!(
            "Assignment '{}' ({} points) created in category {}",
            assignment.name, assignment.max_points, category_id
        );

        recompute_class_grades(storage, category.class_id).await?;
        Ok(assignment)
    }
}

pub async fn create_assignment(
    service: &GradebookService,
    request: &HttpRequest,
    category_id: i64,
    req: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match service.add_assignment(&storage, category_id, req).await {
        Ok(assignment) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(assignment, "Assignment created successfully"))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn list_assignments(
    service: &GradebookService,
    request: &HttpRequest,
    category_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result = match require_category(&storage, category_id).await {
        Ok(_) => storage.list_assignments(category_id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssignmentListResponse { category_id, items },
            "Query successful",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
