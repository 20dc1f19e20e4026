//! 内存存储实现
//!
//! 所有表放在同一把 `RwLock` 下，单次写操作天然串行。
//! 适用于开发和测试；进程退出后数据丢失。

mod gradebook;
mod offerings;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::engine::letter::EnrollmentGrade;
use crate::engine::time::SemesterKey;
use crate::errors::{LmsError, Result};
use crate::models::gradebook::{
    entities::{Assignment, Category, Enrollment, Submission},
    requests::{CreateAssignmentRequest, CreateCategoryRequest, SubmitRequest},
    responses::GradedSubmissionResponse,
};
use crate::models::offerings::entities::{NewOffering, Offering};
use crate::storage::{GradeRepository, OfferingRepository};

#[derive(Default)]
pub(crate) struct Tables {
    pub(crate) offerings: BTreeMap<i64, Offering>,
    pub(crate) categories: BTreeMap<i64, Category>,
    pub(crate) assignments: BTreeMap<i64, Assignment>,
    // (assignment_id, student_id)
    pub(crate) submissions: BTreeMap<(i64, i64), Submission>,
    // (class_id, student_id)
    pub(crate) enrollments: BTreeMap<(i64, i64), Enrollment>,
    last_offering_id: i64,
    last_category_id: i64,
    last_assignment_id: i64,
}

impl Tables {
    pub(crate) fn next_offering_id(&mut self) -> Result<i64> {
        Self::next_id(&mut self.last_offering_id, "offering")
    }

    pub(crate) fn next_category_id(&mut self) -> Result<i64> {
        Self::next_id(&mut self.last_category_id, "category")
    }

    pub(crate) fn next_assignment_id(&mut self) -> Result<i64> {
        Self::next_id(&mut self.last_assignment_id, "assignment")
    }

    fn next_id(last: &mut i64, table: &str) -> Result<i64> {
        *last = last
            .checked_add(1)
            .ok_or_else(|| LmsError::storage_operation(format!("{table} id space exhausted")))?;
        Ok(*last)
    }
}

/// 内存存储
#[derive(Clone, Default)]
pub struct MemoryStorage {
    pub(crate) tables: Arc<RwLock<Tables>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        debug!("Memory storage initialized");
        Self::default()
    }
}

#[async_trait]
impl OfferingRepository for MemoryStorage {
    async fn list_offerings(&self, semester: SemesterKey) -> Result<Vec<Offering>> {
        self.list_offerings_impl(semester).await
    }

    async fn get_offering(&self, id: i64) -> Result<Option<Offering>> {
        self.get_offering_impl(id).await
    }

    async fn create_offering(&self, offering: NewOffering) -> Result<Offering> {
        self.create_offering_impl(offering).await
    }
}

#[async_trait]
impl GradeRepository for MemoryStorage {
    async fn create_category(
        &self,
        class_id: i64,
        req: CreateCategoryRequest,
    ) -> Result<Category> {
        self.create_category_impl(class_id, req).await
    }

    async fn get_category(&self, category_id: i64) -> Result<Option<Category>> {
        self.get_category_impl(category_id).await
    }

    async fn list_categories(&self, class_id: i64) -> Result<Vec<Category>> {
        self.list_categories_impl(class_id).await
    }

    async fn create_assignment(
        &self,
        category_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(category_id, req).await
    }

    async fn get_assignment(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_impl(assignment_id).await
    }

    async fn list_assignments(&self, category_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_impl(category_id).await
    }

    async fn upsert_submission(
        &self,
        assignment_id: i64,
        req: SubmitRequest,
    ) -> Result<Submission> {
        self.upsert_submission_impl(assignment_id, req).await
    }

    async fn record_score(
        &self,
        assignment_id: i64,
        student_id: i64,
        score: u32,
        class_grade: Option<(i64, EnrollmentGrade)>,
    ) -> Result<Option<GradedSubmissionResponse>> {
        self.record_score_impl(assignment_id, student_id, score, class_grade)
            .await
    }

    async fn list_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_impl(assignment_id).await
    }

    async fn create_enrollment(
        &self,
        student_id: i64,
        class_id: i64,
        grade: EnrollmentGrade,
    ) -> Result<Enrollment> {
        self.create_enrollment_impl(student_id, class_id, grade)
            .await
    }

    async fn get_enrollment(&self, student_id: i64, class_id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(student_id, class_id).await
    }

    async fn list_enrollments_by_class(&self, class_id: i64) -> Result<Vec<Enrollment>> {
        self.list_enrollments_by_class_impl(class_id).await
    }

    async fn list_enrollments_by_student(&self, student_id: i64) -> Result<Vec<Enrollment>> {
        self.list_enrollments_by_student_impl(student_id).await
    }

    async fn save_grade(
        &self,
        student_id: i64,
        class_id: i64,
        grade: EnrollmentGrade,
    ) -> Result<bool> {
        self.save_grade_impl(student_id, class_id, grade).await
    }
}
