//! 成绩册存储操作：分类、作业、提交、选课

use tracing::debug;

use super::MemoryStorage;
use crate::engine::letter::EnrollmentGrade;
use crate::errors::{LmsError, Result};
use crate::models::gradebook::{
    entities::{Assignment, Category, Enrollment, Submission},
    requests::{CreateAssignmentRequest, CreateCategoryRequest, SubmitRequest},
    responses::GradedSubmissionResponse,
};

impl MemoryStorage {
    /// 创建分类
    pub async fn create_category_impl(
        &self,
        class_id: i64,
        req: CreateCategoryRequest,
    ) -> Result<Category> {
        let mut tables = self.tables.write().await;
        let name = req.name.trim().to_string();

        if tables
            .categories
            .values()
            .any(|c| c.class_id == class_id && c.name == name)
        {
            return Err(LmsError::duplicate(format!(
                "Category '{name}' already exists in class {class_id}"
            )));
        }

        let id = tables.next_category_id()?;
        let category = Category {
            id,
            class_id,
            name,
            weight: req.weight,
        };
        tables.categories.insert(id, category.clone());
        Ok(category)
    }

    pub async fn get_category_impl(&self, category_id: i64) -> Result<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&category_id).cloned())
    }

    pub async fn list_categories_impl(&self, class_id: i64) -> Result<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .values()
            .filter(|c| c.class_id == class_id)
            .cloned()
            .collect())
    }

    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        category_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let mut tables = self.tables.write().await;
        let name = req.name.trim().to_string();

        if !tables.categories.contains_key(&category_id) {
            return Err(LmsError::not_found(format!(
                "Category {category_id} not found"
            )));
        }
        if tables
            .assignments
            .values()
            .any(|a| a.category_id == category_id && a.name == name)
        {
            return Err(LmsError::duplicate(format!(
                "Assignment '{name}' already exists in category {category_id}"
            )));
        }

        let id = tables.next_assignment_id()?;
        let assignment = Assignment {
            id,
            category_id,
            name,
            max_points: req.max_points,
            contents: req.contents,
            due: req.due,
        };
        tables.assignments.insert(id, assignment.clone());
        Ok(assignment)
    }

    pub async fn get_assignment_impl(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        let tables = self.tables.read().await;
        Ok(tables.assignments.get(&assignment_id).cloned())
    }

    pub async fn list_assignments_impl(&self, category_id: i64) -> Result<Vec<Assignment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .assignments
            .values()
            .filter(|a| a.category_id == category_id)
            .cloned()
            .collect())
    }

    /// 提交或重新提交
    pub async fn upsert_submission_impl(
        &self,
        assignment_id: i64,
        req: SubmitRequest,
    ) -> Result<Submission> {
        let mut tables = self.tables.write().await;
        if !tables.assignments.contains_key(&assignment_id) {
            return Err(LmsError::not_found(format!(
                "Assignment {assignment_id} not found"
            )));
        }

        let now = chrono::Utc::now();
        let submission = tables
            .submissions
            .entry((assignment_id, req.student_id))
            .and_modify(|s| {
                s.contents = req.contents.clone();
                s.submitted_at = now;
            })
            .or_insert_with(|| Submission {
                assignment_id,
                student_id: req.student_id,
                score: None,
                contents: req.contents.clone(),
                submitted_at: now,
            })
            .clone();
        Ok(submission)
    }

    /// 在同一把写锁内保存分数和该学生的班级成绩
    ///
    /// 提交不存在时不做任何修改。
    pub async fn record_score_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
        score: u32,
        class_grade: Option<(i64, EnrollmentGrade)>,
    ) -> Result<Option<GradedSubmissionResponse>> {
        let mut tables = self.tables.write().await;
        let Some(submission) = tables.submissions.get_mut(&(assignment_id, student_id)) else {
            return Ok(None);
        };
        submission.score = Some(score);
        let submission = submission.clone();

        let enrollment = match class_grade {
            Some((class_id, grade)) => tables
                .enrollments
                .get_mut(&(class_id, student_id))
                .map(|enrollment| {
                    debug!(
                        "Grade for student {} in class {}: {} -> {}",
                        student_id, class_id, enrollment.grade, grade
                    );
                    enrollment.grade = grade;
                    enrollment.clone()
                }),
            None => None,
        };

        Ok(Some(GradedSubmissionResponse {
            submission,
            enrollment,
        }))
    }

    pub async fn list_submissions_impl(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        let tables = self.tables.read().await;
        Ok(tables
            .submissions
            .range((assignment_id, i64::MIN)..=(assignment_id, i64::MAX))
            .map(|(_, s)| s.clone())
            .collect())
    }

    /// 选课
    pub async fn create_enrollment_impl(
        &self,
        student_id: i64,
        class_id: i64,
        grade: EnrollmentGrade,
    ) -> Result<Enrollment> {
        let mut tables = self.tables.write().await;
        if tables.enrollments.contains_key(&(class_id, student_id)) {
            return Err(LmsError::duplicate(format!(
                "Student {student_id} is already enrolled in class {class_id}"
            )));
        }

        let enrollment = Enrollment {
            student_id,
            class_id,
            grade,
        };
        tables
            .enrollments
            .insert((class_id, student_id), enrollment.clone());
        Ok(enrollment)
    }

    pub async fn get_enrollment_impl(
        &self,
        student_id: i64,
        class_id: i64,
    ) -> Result<Option<Enrollment>> {
        let tables = self.tables.read().await;
        Ok(tables.enrollments.get(&(class_id, student_id)).cloned())
    }

    pub async fn list_enrollments_by_class_impl(&self, class_id: i64) -> Result<Vec<Enrollment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .enrollments
            .range((class_id, i64::MIN)..=(class_id, i64::MAX))
            .map(|(_, e)| e.clone())
            .collect())
    }

    pub async fn list_enrollments_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Enrollment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .enrollments
            .values()
            .filter(|e| e.student_id == student_id)
            .cloned()
            .collect())
    }

    /// 保存重新计算的成绩
    pub async fn save_grade_impl(
        &self,
        student_id: i64,
        class_id: i64,
        grade: EnrollmentGrade,
    ) -> Result<bool> {
        let mut tables = self.tables.write().await;
        match tables.enrollments.get_mut(&(class_id, student_id)) {
            Some(enrollment) => {
                debug!(
                    "Grade for student {} in class {}: {} -> {}",
                    student_id, class_id, enrollment.grade, grade
                );
                enrollment.grade = grade;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::letter::LetterGrade;

    async fn storage_with_assignment() -> (MemoryStorage, Assignment) {
        let storage = MemoryStorage::new();
        let category = storage
            .create_category_impl(
                1,
                CreateCategoryRequest {
                    name: "Homework".to_string(),
                    weight: 40,
                },
            )
            .await
            .unwrap();
        let assignment = storage
            .create_assignment_impl(
                category.id,
                CreateAssignmentRequest {
                    name: "HW1".to_string(),
                    max_points: 10,
                    contents: None,
                    due: None,
                },
            )
            .await
            .unwrap();
        (storage, assignment)
    }

    #[tokio::test]
    async fn test_duplicate_category_name_in_class() {
        let (storage, _) = storage_with_assignment().await;
        let err = storage
            .create_category_impl(
                1,
                CreateCategoryRequest {
                    name: " Homework ".to_string(),
                    weight: 10,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E007");

        // 其他班级可以重名
        assert!(
            storage
                .create_category_impl(
                    2,
                    CreateCategoryRequest {
                        name: "Homework".to_string(),
                        weight: 10,
                    },
                )
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_assignment_requires_category() {
        let storage = MemoryStorage::new();
        let err = storage
            .create_assignment_impl(
                42,
                CreateAssignmentRequest {
                    name: "HW1".to_string(),
                    max_points: 10,
                    contents: None,
                    due: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E006");
    }

    #[tokio::test]
    async fn test_resubmission_keeps_score() {
        let (storage, assignment) = storage_with_assignment().await;
        storage
            .upsert_submission_impl(
                assignment.id,
                SubmitRequest {
                    student_id: 5,
                    contents: Some("draft".to_string()),
                },
            )
            .await
            .unwrap();
        storage
            .record_score_impl(assignment.id, 5, 8, None)
            .await
            .unwrap();
        let resubmitted = storage
            .upsert_submission_impl(
                assignment.id,
                SubmitRequest {
                    student_id: 5,
                    contents: Some("final".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(resubmitted.score, Some(8));
        assert_eq!(resubmitted.contents.as_deref(), Some("final"));
        assert_eq!(
            storage
                .list_submissions_impl(assignment.id)
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_score_without_submission_changes_nothing() {
        let (storage, assignment) = storage_with_assignment().await;
        storage
            .create_enrollment_impl(5, 1, EnrollmentGrade::NoGrade)
            .await
            .unwrap();

        let result = storage
            .record_score_impl(assignment.id, 5, 8, Some((1, LetterGrade::A.into())))
            .await
            .unwrap();
        assert!(result.is_none());

        let enrollment = storage.get_enrollment_impl(5, 1).await.unwrap().unwrap();
        assert_eq!(enrollment.grade, EnrollmentGrade::NoGrade);
    }

    #[tokio::test]
    async fn test_score_and_grade_saved_together() {
        let (storage, assignment) = storage_with_assignment().await;
        storage
            .create_enrollment_impl(5, 1, EnrollmentGrade::NoGrade)
            .await
            .unwrap();
        storage
            .upsert_submission_impl(
                assignment.id,
                SubmitRequest {
                    student_id: 5,
                    contents: None,
                },
            )
            .await
            .unwrap();

        let graded = storage
            .record_score_impl(assignment.id, 5, 9, Some((1, LetterGrade::AMinus.into())))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(graded.submission.score, Some(9));
        assert_eq!(
            graded.enrollment.map(|e| e.grade),
            Some(EnrollmentGrade::Letter(LetterGrade::AMinus))
        );
        assert_eq!(
            storage.get_enrollment_impl(5, 1).await.unwrap().unwrap().grade,
            EnrollmentGrade::Letter(LetterGrade::AMinus)
        );
    }

    #[tokio::test]
    async fn test_enrollment_lifecycle() {
        let storage = MemoryStorage::new();
        storage
            .create_enrollment_impl(5, 1, EnrollmentGrade::NoGrade)
            .await
            .unwrap();
        storage
            .create_enrollment_impl(5, 2, EnrollmentGrade::NoGrade)
            .await
            .unwrap();
        storage
            .create_enrollment_impl(6, 1, EnrollmentGrade::NoGrade)
            .await
            .unwrap();

        let err = storage
            .create_enrollment_impl(5, 1, EnrollmentGrade::NoGrade)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E007");

        assert!(
            storage
                .save_grade_impl(5, 1, LetterGrade::BPlus.into())
                .await
                .unwrap()
        );
        assert!(
            !storage
                .save_grade_impl(7, 1, LetterGrade::A.into())
                .await
                .unwrap()
        );

        let enrollment = storage.get_enrollment_impl(5, 1).await.unwrap().unwrap();
        assert_eq!(enrollment.grade, EnrollmentGrade::Letter(LetterGrade::BPlus));
        assert_eq!(
            storage
                .list_enrollments_by_class_impl(1)
                .await
                .unwrap()
                .len(),
            2
        );
        assert_eq!(
            storage
                .list_enrollments_by_student_impl(5)
                .await
                .unwrap()
                .len(),
            2
        );
    }
}
