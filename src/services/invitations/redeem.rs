use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;
use tracing::{error, info};

use super::InvitationService;
use crate::models::invitations::entities::RedeemError;
use crate::models::invitations::requests::RedeemInvitationRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_invite_code;

/// 学生用邀请码加入班级
///
/// 校验按固定顺序短路，每种失败有独立错误码；真正的写入在存储层
/// 的事务里完成，事务内会对名额做二次校验。
pub async fn redeem_invitation(
    service: &InvitationService,
    request: &HttpRequest,
    data: RedeemInvitationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let now = Utc::now();
    let code = data.invitation_code.trim().to_uppercase();

    if !validate_invite_code(&code) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Invitation code format is invalid",
        )));
    }

    let invitation = match storage.get_invitation_by_code(&code).await {
        Ok(Some(invitation)) => invitation,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::InvitationCodeNotFound,
                "Invitation code not found",
            )));
        }
        Err(e) => {
            error!("Failed to get invitation by code: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get invitation: {e}"),
                )),
            );
        }
    };

    if let Err(reason) = invitation.check_redeemable(now) {
        return Ok(match reason {
            RedeemError::CodeInactive => HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::InvitationCodeInactive,
                "Invitation code has been deactivated",
            )),
            RedeemError::CodeExpired => HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::InvitationCodeExpired,
                "Invitation code has expired",
            )),
            RedeemError::CodeExhausted => HttpResponse::Conflict().json(
                ApiResponse::error_empty(
                    ErrorCode::InvitationCodeExhausted,
                    "Invitation code has no uses left",
                ),
            ),
            // 存在性与重复加入在下方单独处理
            RedeemError::CodeNotFound | RedeemError::AlreadyEnrolled => HttpResponse::Conflict()
                .json(ApiResponse::error_empty(
                    ErrorCode::Conflict,
                    "Invitation cannot be redeemed",
                )),
        });
    }

    let student = match storage.get_student_by_id(data.student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to get student {}: {}", data.student_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get student: {e}"),
                )),
            );
        }
    };

    if student.class_id == Some(invitation.class_id) {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::AlreadyEnrolled,
            "Student is already enrolled in this class",
        )));
    }

    match storage.redeem_invitation(&code, student.id, now).await {
        Ok(Some(updated)) => {
            info!(
                "Student {} joined class {} via invitation {}",
                updated.id, invitation.class_id, code
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                updated,
                "Invitation redeemed successfully",
            )))
        }
        // 事务内二次校验失败：并发兑换把名额用完了
        Ok(None) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::InvitationCodeExhausted,
            "Invitation is no longer redeemable",
        ))),
        Err(e) => {
            error!("Invitation redemption failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Invitation redemption failed: {e}"),
                )),
            )
        }
    }
}
