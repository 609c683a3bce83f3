use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::invitations::requests::{
    CreateInvitationRequest, InvitationListParams, RedeemInvitationRequest,
    SetInvitationActiveRequest,
};
use crate::services::InvitationService;
use crate::utils::SafeIDI64;

// 懒加载的全局 INVITATION_SERVICE 实例
static INVITATION_SERVICE: Lazy<InvitationService> = Lazy::new(InvitationService::new_lazy);

pub async fn create_invitation(
    req: HttpRequest,
    data: web::Json<CreateInvitationRequest>,
) -> ActixResult<HttpResponse> {
    INVITATION_SERVICE
        .create_invitation(&req, data.into_inner())
        .await
}

pub async fn redeem_invitation(
    req: HttpRequest,
    data: web::Json<RedeemInvitationRequest>,
) -> ActixResult<HttpResponse> {
    INVITATION_SERVICE
        .redeem_invitation(&req, data.into_inner())
        .await
}

pub async fn set_invitation_active(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<SetInvitationActiveRequest>,
) -> ActixResult<HttpResponse> {
    INVITATION_SERVICE
        .set_invitation_active(&req, id.0, data.into_inner())
        .await
}

pub async fn list_invitations(
    req: HttpRequest,
    params: web::Query<InvitationListParams>,
) -> ActixResult<HttpResponse> {
    INVITATION_SERVICE
        .list_invitations(&req, params.into_inner())
        .await
}

// 配置路由
pub fn configure_invitations_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/invitations")
            .service(
                web::resource("")
                    .route(web::get().to(list_invitations))
                    .route(web::post().to(create_invitation)),
            )
            .service(web::resource("/redeem").route(web::post().to(redeem_invitation)))
            .service(web::resource("/{id}/active").route(web::put().to(set_invitation_active))),
    );
}
