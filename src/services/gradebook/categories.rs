use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::{GradebookService, require_class};
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::gradebook::entities::Category;
use crate::models::gradebook::requests::CreateCategoryRequest;
use crate::models::gradebook::responses::CategoryListResponse;
use crate::services::error_response;
use crate::storage::Storage;
use crate::utils::validate_name;

impl GradebookService {
    /// 新分类没有作业，不影响已有成绩
    pub async fn add_category(
        &self,
        storage: &Arc<dyn Storage>,
        class_id: i64,
        req: CreateCategoryRequest,
    ) -> Result<Category> {
        validate_name("Category name", &req.name)?;
        require_class(storage, class_id).await?;

        let category = storage.create_category(class_id, req).await?;
        info!(
            "Category '{}' (weight {}) created in class {}",
            category.name, category.weight, class_id
        );
        Ok(category)
    }
}

pub async fn create_category(
    service: &GradebookService,
    request: &HttpRequest,
    class_id: i64,
    req: CreateCategoryRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match service.add_category(&storage, class_id, req).await {
        Ok(category) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(category, "Category created successfully"))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn list_categories(
    service: &GradebookService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result = match require_class(&storage, class_id).await {
        Ok(_) => storage.list_categories(class_id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CategoryListResponse { class_id, items },
            "Query successful",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
