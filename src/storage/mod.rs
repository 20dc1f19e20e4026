//! 数据存储层
//!
//! 计算核心只通过这里的仓储 trait 读取快照、写回结果。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::engine::letter::EnrollmentGrade;
use crate::engine::time::SemesterKey;
use crate::errors::{LmsError, Result};
use crate::models::gradebook::{
    entities::{Assignment, Category, Enrollment, Submission},
    requests::{CreateAssignmentRequest, CreateCategoryRequest, SubmitRequest},
    responses::GradedSubmissionResponse,
};
use crate::models::offerings::entities::{NewOffering, Offering};

pub mod memory_storage;

#[async_trait::async_trait]
pub trait OfferingRepository: Send + Sync {
    // 列出某学期的全部开课（任意教室、任意教师）
    async fn list_offerings(&self, semester: SemesterKey) -> Result<Vec<Offering>>;
    // 通过ID获取开课
    async fn get_offering(&self, id: i64) -> Result<Option<Offering>>;
    // 创建开课，不做冲突检查
    async fn create_offering(&self, offering: NewOffering) -> Result<Offering>;
}

#[async_trait::async_trait]
pub trait GradeRepository: Send + Sync {
    /// 作业分类
    // 创建分类，同班级内重名返回 Duplicate
    async fn create_category(&self, class_id: i64, req: CreateCategoryRequest)
    -> Result<Category>;
    async fn get_category(&self, category_id: i64) -> Result<Option<Category>>;
    async fn list_categories(&self, class_id: i64) -> Result<Vec<Category>>;

    /// 作业
    // 创建作业，同分类内重名返回 Duplicate
    async fn create_assignment(
        &self,
        category_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    async fn get_assignment(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    async fn list_assignments(&self, category_id: i64) -> Result<Vec<Assignment>>;

    /// 提交
    // 提交或重新提交，保留已有分数
    async fn upsert_submission(&self, assignment_id: i64, req: SubmitRequest)
    -> Result<Submission>;
    // 保存分数，并在同一次写入中保存该学生的班级成绩（未选课则跳过）；
    // 提交不存在时不做任何修改并返回 None
    async fn record_score(
        &self,
        assignment_id: i64,
        student_id: i64,
        score: u32,
        class_grade: Option<(i64, EnrollmentGrade)>,
    ) -> Result<Option<GradedSubmissionResponse>>;
    async fn list_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>>;

    /// 选课
    // 选课，重复选课返回 Duplicate
    async fn create_enrollment(
        &self,
        student_id: i64,
        class_id: i64,
        grade: EnrollmentGrade,
    ) -> Result<Enrollment>;
    async fn get_enrollment(&self, student_id: i64, class_id: i64) -> Result<Option<Enrollment>>;
    async fn list_enrollments_by_class(&self, class_id: i64) -> Result<Vec<Enrollment>>;
    async fn list_enrollments_by_student(&self, student_id: i64) -> Result<Vec<Enrollment>>;
    // 保存成绩，选课记录不存在时返回 false
    async fn save_grade(&self, student_id: i64, class_id: i64, grade: EnrollmentGrade)
    -> Result<bool>;
}

pub trait Storage: OfferingRepository + GradeRepository {}

impl<T: OfferingRepository + GradeRepository> Storage for T {}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let backend = AppConfig::get().storage.backend.as_str();
    match backend {
        "memory" => Ok(Arc::new(memory_storage::MemoryStorage::new())),
        other => Err(LmsError::storage_plugin_not_found(format!(
            "Unknown storage backend '{other}' (supported: memory)"
        ))),
    }
}
