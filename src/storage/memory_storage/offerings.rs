//! 开课存储操作

use tracing::debug;

use super::MemoryStorage;
use crate::engine::time::SemesterKey;
use crate::errors::Result;
use crate::models::offerings::entities::{NewOffering, Offering};

impl MemoryStorage {
    /// 列出学期内的开课，按 ID 排序
    pub async fn list_offerings_impl(&self, semester: SemesterKey) -> Result<Vec<Offering>> {
        let tables = self.tables.read().await;
        Ok(tables
            .offerings
            .values()
            .filter(|o| o.semester == semester)
            .cloned()
            .collect())
    }

    pub async fn get_offering_impl(&self, id: i64) -> Result<Option<Offering>> {
        let tables = self.tables.read().await;
        Ok(tables.offerings.get(&id).cloned())
    }

    pub async fn create_offering_impl(&self, offering: NewOffering) -> Result<Offering> {
        let mut tables = self.tables.write().await;
        let id = tables.next_offering_id()?;
        let offering = offering.into_offering(id);
        tables.offerings.insert(id, offering.clone());
        debug!("Offering {} stored for {}", id, offering.semester);
        Ok(offering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::time::Season;
    use chrono::NaiveTime;

    fn new_offering(course_id: i64, semester: SemesterKey) -> NewOffering {
        NewOffering {
            course_id,
            semester,
            room: "WEB L104".to_string(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            instructor_id: 7,
        }
    }

    #[tokio::test]
    async fn test_offerings_are_partitioned_by_semester() {
        let storage = MemoryStorage::new();
        let fall = SemesterKey::new(Season::Fall, 2024);
        let spring = SemesterKey::new(Season::Spring, 2025);

        let first = storage
            .create_offering_impl(new_offering(5530, fall))
            .await
            .unwrap();
        storage
            .create_offering_impl(new_offering(5530, spring))
            .await
            .unwrap();
        let third = storage
            .create_offering_impl(new_offering(3500, fall))
            .await
            .unwrap();

        let listed = storage.list_offerings_impl(fall).await.unwrap();
        let ids: Vec<i64> = listed.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![first.id, third.id]);
        assert_eq!(
            storage.get_offering_impl(first.id).await.unwrap(),
            Some(first)
        );
        assert_eq!(storage.get_offering_impl(99).await.unwrap(), None);
    }
}
