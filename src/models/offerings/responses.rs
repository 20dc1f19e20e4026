use serde::Serialize;

use super::entities::Offering;
use crate::engine::time::SemesterKey;

// 学期开课列表响应
#[derive(Debug, Serialize)]
pub struct OfferingListResponse {
    pub semester: SemesterKey,
    pub items: Vec<Offering>,
}
