use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::wall::requests::{
    CreateWallCommentRequest, CreateWallPostRequest, MuteStudentRequest,
};
use crate::services::WallService;
use crate::utils::{SafeClassIdI64, SafeIDI64};

// 懒加载的全局 WALL_SERVICE 实例
static WALL_SERVICE: Lazy<WallService> = Lazy::new(WallService::new_lazy);

pub async fn create_post(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    data: web::Json<CreateWallPostRequest>,
) -> ActixResult<HttpResponse> {
    WALL_SERVICE
        .create_post(&req, class_id.0, data.into_inner())
        .await
}

pub async fn list_posts(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    WALL_SERVICE.list_posts(&req, class_id.0).await
}

pub async fn delete_post(req: HttpRequest, post_id: SafeIDI64) -> ActixResult<HttpResponse> {
    WALL_SERVICE.delete_post(&req, post_id.0).await
}

pub async fn create_comment(
    req: HttpRequest,
    post_id: SafeIDI64,
    data: web::Json<CreateWallCommentRequest>,
) -> ActixResult<HttpResponse> {
    WALL_SERVICE
        .create_comment(&req, post_id.0, data.into_inner())
        .await
}

pub async fn list_comments(req: HttpRequest, post_id: SafeIDI64) -> ActixResult<HttpResponse> {
    WALL_SERVICE.list_comments(&req, post_id.0).await
}

pub async fn mute_student(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    data: web::Json<MuteStudentRequest>,
) -> ActixResult<HttpResponse> {
    WALL_SERVICE
        .mute_student(&req, class_id.0, data.into_inner())
        .await
}

pub async fn unmute_student(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    data: web::Json<MuteStudentRequest>,
) -> ActixResult<HttpResponse> {
    WALL_SERVICE
        .unmute_student(&req, class_id.0, data.into_inner())
        .await
}

// 配置路由
// 注意：班级嵌套的作用域必须在 /api/v1/classes 之前注册，否则会被其吞掉
pub fn configure_wall_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/wall").service(
            web::resource("")
                .route(web::post().to(create_post))
                .route(web::get().to(list_posts)),
        ),
    )
    .service(
        web::scope("/api/v1/classes/{class_id}/mute").service(
            web::resource("")
                .route(web::post().to(mute_student))
                .route(web::delete().to(unmute_student)),
        ),
    )
    .service(
        web::scope("/api/v1/wall")
            .service(web::resource("/{id}").route(web::delete().to(delete_post)))
            .service(
                web::resource("/{id}/comments")
                    .route(web::post().to(create_comment))
                    .route(web::get().to(list_comments)),
            ),
    );
}
