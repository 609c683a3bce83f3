use serde::Deserialize;
use ts_rs::TS;

/// 创建教师请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateTeacherRequest {
    pub full_name: String,
    pub email: String,
}
