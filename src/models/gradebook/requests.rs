use serde::Deserialize;

// 创建作业分类请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub weight: u32,
}

// 创建作业请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub name: String,
    pub max_points: u32,
    pub contents: Option<String>,
    pub due: Option<chrono::DateTime<chrono::Utc>>,
}

// 选课请求
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollRequest {
    pub student_id: i64,
}

// 提交作业请求（重复提交会覆盖内容，保留已有分数）
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequest {
    pub student_id: i64,
    pub contents: Option<String>,
}

// 评分请求
#[derive(Debug, Clone, Deserialize)]
pub struct GradeSubmissionRequest {
    pub score: u32,
}
