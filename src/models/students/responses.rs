use serde::Serialize;

use crate::engine::letter::EnrollmentGrade;
use crate::models::offerings::entities::Offering;

// GPA 响应
#[derive(Debug, Serialize)]
pub struct GpaResponse {
    pub student_id: i64,
    pub gpa: f64,
    // 计入 GPA 的班级数（不含 "--"）
    pub counted_classes: usize,
}

// 学生所选班级及成绩
#[derive(Debug, Serialize)]
pub struct StudentClassItem {
    pub class: Offering,
    pub grade: EnrollmentGrade,
}

#[derive(Debug, Serialize)]
pub struct StudentClassListResponse {
    pub student_id: i64,
    pub items: Vec<StudentClassItem>,
}
