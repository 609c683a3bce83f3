use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::InvitationService;
use crate::models::invitations::requests::SetInvitationActiveRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn set_invitation_active(
    service: &InvitationService,
    request: &HttpRequest,
    id: i64,
    data: SetInvitationActiveRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.set_invitation_active(id, data.is_active).await {
        Ok(Some(invitation)) => {
            info!(
                "Invitation {} set to {}",
                id,
                if invitation.is_active {
                    "active"
                } else {
                    "inactive"
                }
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(invitation, "Invitation updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::InvitationCodeNotFound,
            "Invitation not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Invitation update failed: {e}"),
            )),
        ),
    }
}
