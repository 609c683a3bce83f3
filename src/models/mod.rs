//! 数据模型定义
//!
//! 按领域拆分为 entities（业务实体）、requests（请求 DTO）、responses（响应 DTO）。

pub mod assignments;
pub mod charts;
pub mod classes;
pub mod common;
pub mod invitations;
pub mod notifications;
pub mod students;
pub mod system;
pub mod teachers;
pub mod wall;

pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 应用启动时间（用于系统状态接口）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// code == 0 表示成功，其余按 HTTP 状态分段：
/// 40xxx 客户端错误，41xxx 资源不存在，42xxx 邀请码，43xxx 班级墙，
/// 50xxx 服务端错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,
    Unauthorized = 40100,
    Forbidden = 40300,
    NotFound = 40400,
    Conflict = 40900,

    TeacherNotFound = 41001,
    ClassNotFound = 41002,
    StudentNotFound = 41003,
    AssignmentNotFound = 41004,
    WallPostNotFound = 41005,

    InvitationCodeNotFound = 42001,
    InvitationCodeInactive = 42002,
    InvitationCodeExpired = 42003,
    InvitationCodeExhausted = 42004,
    AlreadyEnrolled = 42005,

    StudentMuted = 43001,

    InternalServerError = 50000,
}
