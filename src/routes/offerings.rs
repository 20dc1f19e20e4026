use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::offerings::requests::{CreateOfferingRequest, SemesterQuery};
use crate::services::OfferingService;

// 懒加载的全局 OFFERING_SERVICE 实例
static OFFERING_SERVICE: Lazy<OfferingService> = Lazy::new(OfferingService::new_lazy);

// HTTP处理程序
pub async fn create_offering(
    req: HttpRequest,
    offering_data: web::Json<CreateOfferingRequest>,
) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE
        .create_offering(&req, offering_data.into_inner())
        .await
}

pub async fn list_offerings(
    req: HttpRequest,
    query: web::Query<SemesterQuery>,
) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE
        .list_offerings(&req, query.into_inner().into())
        .await
}

pub async fn get_offering(
    req: HttpRequest,
    offering_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE
        .get_offering(&req, offering_id.into_inner())
        .await
}

// 配置路由
pub fn configure_offering_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/offerings")
            .service(
                web::resource("")
                    .route(web::get().to(list_offerings))
                    // 冲突时返回 409 与冲突详情
                    .route(web::post().to(create_offering)),
            )
            .service(web::resource("/{offering_id}").route(web::get().to(get_offering))),
    );
}
