use serde::{Deserialize, Serialize};

use crate::engine::letter::EnrollmentGrade;

/// 作业分类（如 "Homework"，权重 30）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    // 所属班级（开课）ID
    pub class_id: i64,
    pub name: String,
    // 权重，约定班级内合计 100，但不强制
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    // 满分
    pub max_points: u32,
    pub contents: Option<String>,
    pub due: Option<chrono::DateTime<chrono::Utc>>,
}

/// 学生提交，每个 (作业, 学生) 至多一条
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub assignment_id: i64,
    pub student_id: i64,
    // None 表示尚未评分
    pub score: Option<u32>,
    pub contents: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub student_id: i64,
    pub class_id: i64,
    pub grade: EnrollmentGrade,
}
