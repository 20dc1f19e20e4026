use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::StudentService;

// 懒加载的全局 STUDENT_SERVICE 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn get_gpa(req: HttpRequest, student_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_gpa(&req, student_id.into_inner()).await
}

pub async fn list_classes(
    req: HttpRequest,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .list_classes(&req, student_id.into_inner())
        .await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .service(web::resource("/{student_id}/gpa").route(web::get().to(get_gpa)))
            .service(
                web::resource("/{student_id}/enrollments").route(web::get().to(list_classes)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::letter::{EnrollmentGrade, LetterGrade};
    use crate::engine::time::{Season, SemesterKey};
    use crate::models::offerings::entities::NewOffering;
    use crate::storage::Storage;
    use crate::storage::memory_storage::MemoryStorage;
    use actix_web::{App, test};
    use chrono::NaiveTime;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_get_gpa_route() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage
            .create_enrollment(42, 1, LetterGrade::A.into())
            .await
            .unwrap();
        storage
            .create_enrollment(42, 2, LetterGrade::B.into())
            .await
            .unwrap();
        storage
            .create_enrollment(42, 3, EnrollmentGrade::NoGrade)
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_student_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/students/42/gpa")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["gpa"], 3.5);
        assert_eq!(body["data"]["counted_classes"], 2);
    }

    #[actix_web::test]
    async fn test_list_student_classes_route() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let class = storage
            .create_offering(NewOffering {
                course_id: 3500,
                semester: SemesterKey::new(Season::Spring, 2025),
                room: "WEB L104".to_string(),
                start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                instructor_id: 7,
            })
            .await
            .unwrap();
        storage
            .create_enrollment(42, class.id, LetterGrade::CPlus.into())
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_student_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/students/42/enrollments")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["class"]["course_id"], 3500);
        assert_eq!(items[0]["class"]["semester"]["season"], "Spring");
        assert_eq!(items[0]["grade"], "C+");
    }
}
