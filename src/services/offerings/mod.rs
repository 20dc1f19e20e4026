pub mod create;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::engine::time::SemesterKey;
use crate::models::offerings::requests::CreateOfferingRequest;
use crate::storage::Storage;

pub use create::ScheduleOutcome;

pub struct OfferingService {
    storage: Option<Arc<dyn Storage>>,
    // 串行化 "冲突检查 + 写入"
    write_gate: Mutex<()>,
}

impl OfferingService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            write_gate: Mutex::new(()),
        }
    }

    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage: Some(storage),
            write_gate: Mutex::new(()),
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 创建开课
    pub async fn create_offering(
        &self,
        request: &HttpRequest,
        req: CreateOfferingRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_offering(self, request, req).await
    }

    /// 列出学期开课
    pub async fn list_offerings(
        &self,
        request: &HttpRequest,
        semester: SemesterKey,
    ) -> ActixResult<HttpResponse> {
        list::list_offerings(self, request, semester).await
    }

    /// 获取开课详情
    pub async fn get_offering(
        &self,
        request: &HttpRequest,
        offering_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_offering(self, request, offering_id).await
    }
}
