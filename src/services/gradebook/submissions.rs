use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{info, warn};

use super::recompute::ClassSnapshot;
use super::{GradebookService, require_assignment, require_category};
use crate::errors::{LmsError, Result};
use crate::models::ApiResponse;
use crate::models::gradebook::entities::Submission;
use crate::models::gradebook::requests::{GradeSubmissionRequest, SubmitRequest};
use crate::models::gradebook::responses::{GradedSubmissionResponse, SubmissionListResponse};
use crate::services::error_response;
use crate::storage::Storage;

impl GradebookService {
    /// 提交作业；重复提交覆盖内容，分数保留
    pub async fn submit_assignment(
        &self,
        storage: &Arc<dyn Storage>,
        assignment_id: i64,
        req: SubmitRequest,
    ) -> Result<Submission> {
        require_assignment(storage, assignment_id).await?;
        let submission = storage.upsert_submission(assignment_id, req).await?;
        info!(
            "Student {} submitted assignment {}",
            submission.student_id, assignment_id
        );
        Ok(submission)
    }

    /// 评分，随后重算该学生在班级中的成绩
    ///
    /// 学生未选课时只保存分数，`enrollment` 为 `None`。
    pub async fn score_submission(
        &self,
        storage: &Arc<dyn Storage>,
        assignment_id: i64,
        student_id: i64,
        score: u32,
    ) -> Result<GradedSubmissionResponse> {
        let _guard = self.write_gate.lock().await;

        let assignment = require_assignment(storage, assignment_id).await?;
        if score > assignment.max_points {
            return Err(LmsError::validation(format!(
                "Score {score} exceeds max points {} of assignment {assignment_id}",
                assignment.max_points
            )));
        }
        let category = require_category(storage, assignment.category_id).await?;

        let class_id = category.class_id;
        let enrolled = storage.get_enrollment(student_id, class_id).await?.is_some();

        // 先在快照上算出新成绩，再一次性写回分数和成绩
        let mut snapshot = ClassSnapshot::load(storage, class_id).await?;
        if !snapshot.apply_score(assignment_id, student_id, score) {
            return Err(no_submission(assignment_id, student_id));
        }
        let class_grade = if enrolled {
            Some((class_id, snapshot.percentage_for(student_id).grade()))
        } else {
            warn!(
                "Student {} is not enrolled in class {}, saving score without grade update",
                student_id, class_id
            );
            None
        };

        let graded = storage
            .record_score(assignment_id, student_id, score, class_grade)
            .await?
            .ok_or_else(|| no_submission(assignment_id, student_id))?;

        info!(
            "Assignment {} scored {}/{} for student {}",
            assignment_id, score, assignment.max_points, student_id
        );
        Ok(graded)
    }
}

fn no_submission(assignment_id: i64, student_id: i64) -> LmsError {
    LmsError::not_found(format!(
        "Student {student_id} has no submission for assignment {assignment_id}"
    ))
}

pub async fn submit(
    service: &GradebookService,
    request: &HttpRequest,
    assignment_id: i64,
    req: SubmitRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match service.submit_assignment(&storage, assignment_id, req).await {
        Ok(submission) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(submission, "Submitted successfully"))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn list_submissions(
    service: &GradebookService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result = match require_assignment(&storage, assignment_id).await {
        Ok(_) => storage.list_submissions(assignment_id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubmissionListResponse {
                assignment_id,
                items,
            },
            "Query successful",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn grade_submission(
    service: &GradebookService,
    request: &HttpRequest,
    assignment_id: i64,
    student_id: i64,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match service
        .score_submission(&storage, assignment_id, student_id, req.score)
        .await
    {
        Ok(graded) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(graded, "Graded successfully")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
