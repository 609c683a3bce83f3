use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::charts::requests::ChartParams;
use crate::services::ChartService;
use crate::utils::SafeClassIdI64;

// 懒加载的全局 CHART_SERVICE 实例
static CHART_SERVICE: Lazy<ChartService> = Lazy::new(ChartService::new_lazy);

pub async fn class_chart(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    params: web::Query<ChartParams>,
) -> ActixResult<HttpResponse> {
    CHART_SERVICE
        .class_chart(&req, class_id.0, params.into_inner())
        .await
}

pub async fn class_ranking(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    CHART_SERVICE.class_ranking(&req, class_id.0).await
}

// 配置路由
// 注意：这些嵌套作用域必须在 /api/v1/classes 之前注册，否则会被其吞掉
pub fn configure_charts_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/chart")
            .service(web::resource("").route(web::get().to(class_chart))),
    )
    .service(
        web::scope("/api/v1/classes/{class_id}/ranking")
            .service(web::resource("").route(web::get().to(class_ranking))),
    );
}
