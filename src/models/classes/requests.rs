use serde::Deserialize;
use ts_rs::TS;

/// 创建班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub teacher_id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// 班级列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassListParams {
    pub teacher_id: Option<i64>,
}
