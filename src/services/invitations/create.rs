use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::InvitationService;
use crate::models::invitations::requests::CreateInvitationRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_invitation(
    service: &InvitationService,
    request: &HttpRequest,
    data: CreateInvitationRequest,
) -> ActixResult<HttpResponse> {
    if let Some(max_uses) = data.max_uses
        && max_uses <= 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "max_uses must be positive",
        )));
    }

    let storage = service.get_storage(request);

    // 目标班级必须存在
    match storage.get_class_by_id(data.class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            error!("Failed to get class by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get class information: {e}"),
                )),
            );
        }
    }

    match storage.create_invitation(data).await {
        Ok(invitation) => {
            info!(
                "Invitation {} created for class {}",
                invitation.invitation_code, invitation.class_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                invitation,
                "Invitation created successfully",
            )))
        }
        Err(e) => {
            error!("Invitation creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Invitation creation failed: {e}"),
                )),
            )
        }
    }
}
