use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::{
    AssignmentListParams, CreateAssignmentRequest, CreateTestParams, SubmitAssignmentRequest,
};
use crate::services::AssignmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ASSIGNMENT_SERVICE 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// HTTP处理程序
pub async fn create_assignment(
    req: HttpRequest,
    data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, data.into_inner())
        .await
}

pub async fn list_assignments(
    req: HttpRequest,
    params: web::Query<AssignmentListParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, params.into_inner())
        .await
}

pub async fn get_assignment(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_assignment(&req, id.0).await
}

pub async fn delete_assignment(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.delete_assignment(&req, id.0).await
}

pub async fn notify_assignment(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.notify_assignment(&req, id.0).await
}

pub async fn notify_overdue(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.notify_overdue(&req).await
}

pub async fn submit_assignment(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .submit_assignment(&req, id.0, data.into_inner())
        .await
}

pub async fn create_test_assignment(
    req: HttpRequest,
    params: web::Query<CreateTestParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_test_assignment(&req, params.into_inner())
        .await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .service(
                web::resource("")
                    .route(web::get().to(list_assignments))
                    .route(web::post().to(create_assignment)),
            )
            // 外部调度器触发的逾期扫描，用 x-api-key 保护
            .service(web::resource("/notify-overdue").route(web::post().to(notify_overdue)))
            // 调试接口，仅开发环境可用
            .service(web::resource("/create-test").route(web::get().to(create_test_assignment)))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_assignment))
                    .route(web::delete().to(delete_assignment)),
            )
            .service(web::resource("/{id}/notify").route(web::post().to(notify_assignment)))
            .service(web::resource("/{id}/submit").route(web::post().to(submit_assignment))),
    );
}
