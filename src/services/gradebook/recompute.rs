//! 成绩快照与重算
//!
//! 先从存储读取完整快照，计算完成后一次性写回，不存在部分更新。

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::engine::grading::{ClassPercentage, compute_class_percentage};
use crate::engine::letter::EnrollmentGrade;
use crate::errors::{LmsError, Result};
use crate::models::gradebook::entities::{Assignment, Category, Submission};
use crate::storage::Storage;

/// 一个班级的成绩册快照
#[derive(Debug, Default)]
pub struct ClassSnapshot {
    pub class_id: i64,
    pub categories: Vec<Category>,
    pub assignments_by_category: HashMap<i64, Vec<Assignment>>,
    pub submissions_by_assignment: HashMap<i64, Vec<Submission>>,
}

impl ClassSnapshot {
    pub async fn load(storage: &Arc<dyn Storage>, class_id: i64) -> Result<Self> {
        let categories = storage.list_categories(class_id).await?;
        let mut assignments_by_category = HashMap::new();
        let mut submissions_by_assignment = HashMap::new();

        for category in &categories {
            let assignments = storage.list_assignments(category.id).await?;
            for assignment in &assignments {
                let submissions = storage.list_submissions(assignment.id).await?;
                submissions_by_assignment.insert(assignment.id, submissions);
            }
            assignments_by_category.insert(category.id, assignments);
        }

        Ok(Self {
            class_id,
            categories,
            assignments_by_category,
            submissions_by_assignment,
        })
    }

    /// 在快照中写入一次评分，提交不存在时返回 false
    pub fn apply_score(&mut self, assignment_id: i64, student_id: i64, score: u32) -> bool {
        self.submissions_by_assignment
            .get_mut(&assignment_id)
            .and_then(|subs| subs.iter_mut().find(|s| s.student_id == student_id))
            .map(|submission| submission.score = Some(score))
            .is_some()
    }

    pub fn percentage_for(&self, student_id: i64) -> ClassPercentage {
        let result = compute_class_percentage(
            &self.categories,
            &self.assignments_by_category,
            &self.submissions_by_assignment,
            student_id,
        );
        if !result.skipped_categories.is_empty() {
            let skipped = LmsError::division_undefined(format!(
                "class {}: categories {:?} have 0 possible points",
                self.class_id, result.skipped_categories
            ));
            debug!("Skipped in grade aggregation: {}", skipped);
        }
        result
    }
}

/// 重算班级内所有选课学生的成绩，返回更新的人数
pub async fn recompute_class_grades(storage: &Arc<dyn Storage>, class_id: i64) -> Result<usize> {
    let snapshot = ClassSnapshot::load(storage, class_id).await?;
    let enrollments = storage.list_enrollments_by_class(class_id).await?;

    // 全部算完再写回
    let grades: Vec<(i64, EnrollmentGrade)> = enrollments
        .iter()
        .map(|e| (e.student_id, snapshot.percentage_for(e.student_id).grade()))
        .collect();

    for (student_id, grade) in &grades {
        storage
            .save_grade(*student_id, class_id, grade.clone())
            .await?;
    }

    info!("Recomputed {} grade(s) for class {}", grades.len(), class_id);
    Ok(grades.len())
}
