use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    // 唯一 ID
    pub id: i64,
    // 所在班级 ID（尚未加入班级时为空）
    pub class_id: Option<i64>,
    // 学生姓名
    pub name: String,
    // 学生邮箱（可选，没有邮箱的学生在批量通知中被跳过）
    pub email: Option<String>,
    // 头像地址
    pub photo_url: Option<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 某学生某天的做题记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Solution {
    pub id: i64,
    pub student_id: i64,
    // 做题日期（UTC）
    pub solved_on: chrono::NaiveDate,
    // 当天做题数
    pub count: i64,
}
