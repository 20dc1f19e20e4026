use serde::Serialize;

use super::entities::{Assignment, Category, Enrollment, Submission};
use crate::engine::letter::EnrollmentGrade;

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub class_id: i64,
    pub items: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct AssignmentListResponse {
    pub category_id: i64,
    pub items: Vec<Assignment>,
}

#[derive(Debug, Serialize)]
pub struct SubmissionListResponse {
    pub assignment_id: i64,
    pub items: Vec<Submission>,
}

/// 评分结果：更新后的提交与重新计算的班级成绩
#[derive(Debug, Serialize)]
pub struct GradedSubmissionResponse {
    pub submission: Submission,
    pub enrollment: Option<Enrollment>,
}

/// 学生在某班级的实时成绩
#[derive(Debug, Serialize)]
pub struct ClassGradeResponse {
    pub class_id: i64,
    pub student_id: i64,
    pub percentage: f64,
    pub has_any_graded_category: bool,
    pub grade: EnrollmentGrade,
    // 有作业但满分合计为 0 而被跳过的分类
    pub skipped_categories: Vec<i64>,
}

/// 班级花名册：选课学生及其已保存的成绩
#[derive(Debug, Serialize)]
pub struct EnrollmentListResponse {
    pub class_id: i64,
    pub items: Vec<Enrollment>,
}
