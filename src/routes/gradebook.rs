use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::gradebook::requests::{
    CreateAssignmentRequest, CreateCategoryRequest, EnrollRequest, GradeSubmissionRequest,
    SubmitRequest,
};
use crate::services::GradebookService;

// 懒加载的全局 GRADEBOOK_SERVICE 实例
static GRADEBOOK_SERVICE: Lazy<GradebookService> = Lazy::new(GradebookService::new_lazy);

// HTTP处理程序
pub async fn create_category(
    req: HttpRequest,
    class_id: web::Path<i64>,
    category_data: web::Json<CreateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    GRADEBOOK_SERVICE
        .create_category(&req, class_id.into_inner(), category_data.into_inner())
        .await
}

pub async fn list_categories(
    req: HttpRequest,
    class_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    GRADEBOOK_SERVICE
        .list_categories(&req, class_id.into_inner())
        .await
}

pub async fn create_assignment(
    req: HttpRequest,
    category_id: web::Path<i64>,
    assignment_data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    GRADEBOOK_SERVICE
        .create_assignment(&req, category_id.into_inner(), assignment_data.into_inner())
        .await
}

pub async fn list_assignments(
    req: HttpRequest,
    category_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    GRADEBOOK_SERVICE
        .list_assignments(&req, category_id.into_inner())
        .await
}

pub async fn enroll(
    req: HttpRequest,
    class_id: web::Path<i64>,
    enroll_data: web::Json<EnrollRequest>,
) -> ActixResult<HttpResponse> {
    GRADEBOOK_SERVICE
        .enroll(&req, class_id.into_inner(), enroll_data.into_inner())
        .await
}

pub async fn list_enrollments(
    req: HttpRequest,
    class_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    GRADEBOOK_SERVICE
        .list_enrollments(&req, class_id.into_inner())
        .await
}

pub async fn submit(
    req: HttpRequest,
    assignment_id: web::Path<i64>,
    submission_data: web::Json<SubmitRequest>,
) -> ActixResult<HttpResponse> {
    GRADEBOOK_SERVICE
        .submit(&req, assignment_id.into_inner(), submission_data.into_inner())
        .await
}

pub async fn list_submissions(
    req: HttpRequest,
    assignment_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    GRADEBOOK_SERVICE
        .list_submissions(&req, assignment_id.into_inner())
        .await
}

pub async fn grade_submission(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
    grade_data: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    let (assignment_id, student_id) = path.into_inner();
    GRADEBOOK_SERVICE
        .grade_submission(&req, assignment_id, student_id, grade_data.into_inner())
        .await
}

pub async fn get_class_grade(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (class_id, student_id) = path.into_inner();
    GRADEBOOK_SERVICE
        .get_class_grade(&req, class_id, student_id)
        .await
}

// 配置路由
pub fn configure_gradebook_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}")
            .service(
                web::resource("/categories")
                    .route(web::get().to(list_categories))
                    .route(web::post().to(create_category)),
            )
            .service(
                web::resource("/enrollments")
                    .route(web::get().to(list_enrollments))
                    .route(web::post().to(enroll)),
            )
            .service(
                web::resource("/students/{student_id}/grade").route(web::get().to(get_class_grade)),
            ),
    )
    .service(
        web::scope("/api/v1/categories/{category_id}").service(
            web::resource("/assignments")
                .route(web::get().to(list_assignments))
                // 新作业会触发全班成绩重算
                .route(web::post().to(create_assignment)),
        ),
    )
    .service(
        web::scope("/api/v1/assignments/{assignment_id}")
            .service(
                web::resource("/submissions")
                    .route(web::get().to(list_submissions))
                    .route(web::post().to(submit)),
            )
            .service(
                web::resource("/submissions/{student_id}/score")
                    .route(web::put().to(grade_submission)),
            ),
    );
}
