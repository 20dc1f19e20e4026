pub mod assignments;
pub mod categories;
pub mod enrollments;
pub mod recompute;
pub mod report;
pub mod submissions;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::errors::{LmsError, Result};
use crate::models::gradebook::entities::{Assignment, Category};
use crate::models::gradebook::requests::{
    CreateAssignmentRequest, CreateCategoryRequest, EnrollRequest, GradeSubmissionRequest,
    SubmitRequest,
};
use crate::models::offerings::entities::Offering;
use crate::storage::Storage;

pub struct GradebookService {
    storage: Option<Arc<dyn Storage>>,
    // 串行化会触发成绩重算的写操作
    write_gate: Mutex<()>,
}

impl GradebookService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            write_gate: Mutex::new(()),
        }
    }

    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage: Some(storage),
            write_gate: Mutex::new(()),
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 创建作业分类
    pub async fn create_category(
        &self,
        request: &HttpRequest,
        class_id: i64,
        req: CreateCategoryRequest,
    ) -> ActixResult<HttpResponse> {
        categories::create_category(self, request, class_id, req).await
    }

    /// 列出班级的作业分类
    pub async fn list_categories(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        categories::list_categories(self, request, class_id).await
    }

    /// 创建作业
    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        category_id: i64,
        req: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        assignments::create_assignment(self, request, category_id, req).await
    }

    /// 列出分类下的作业
    pub async fn list_assignments(
        &self,
        request: &HttpRequest,
        category_id: i64,
    ) -> ActixResult<HttpResponse> {
        assignments::list_assignments(self, request, category_id).await
    }

    /// 选课
    pub async fn enroll(
        &self,
        request: &HttpRequest,
        class_id: i64,
        req: EnrollRequest,
    ) -> ActixResult<HttpResponse> {
        enrollments::enroll(self, request, class_id, req).await
    }

    /// 列出班级选课学生及成绩
    pub async fn list_enrollments(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        enrollments::list_enrollments(self, request, class_id).await
    }

    /// 提交作业
    pub async fn submit(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        req: SubmitRequest,
    ) -> ActixResult<HttpResponse> {
        submissions::submit(self, request, assignment_id, req).await
    }

    /// 列出作业的提交
    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        submissions::list_submissions(self, request, assignment_id).await
    }

    /// 评分并重算班级成绩
    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        student_id: i64,
        req: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        submissions::grade_submission(self, request, assignment_id, student_id, req).await
    }

    /// 获取学生在班级中的实时成绩
    pub async fn get_class_grade(
        &self,
        request: &HttpRequest,
        class_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        report::get_class_grade(self, request, class_id, student_id).await
    }
}

pub(crate) async fn require_class(storage: &Arc<dyn Storage>, class_id: i64) -> Result<Offering> {
    storage
        .get_offering(class_id)
        .await?
        .ok_or_else(|| LmsError::not_found(format!("Class {class_id} not found")))
}

pub(crate) async fn require_category(
    storage: &Arc<dyn Storage>,
    category_id: i64,
) -> Result<Category> {
    storage
        .get_category(category_id)
        .await?
        .ok_or_else(|| LmsError::not_found(format!("Category {category_id} not found")))
}

pub(crate) async fn require_assignment(
    storage: &Arc<dyn Storage>,
    assignment_id: i64,
) -> Result<Assignment> {
    storage
        .get_assignment(assignment_id)
        .await?
        .ok_or_else(|| LmsError::not_found(format!("Assignment {assignment_id} not found")))
}
