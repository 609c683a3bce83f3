use serde::Deserialize;
use ts_rs::TS;

/// 创建学生请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub name: String,
    pub class_id: Option<i64>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

/// 更新学生请求（字段为空表示不修改）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub class_id: Option<i64>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

/// 学生列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    pub class_id: Option<i64>,
}

/// 记录做题数请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct RecordSolutionRequest {
    // 做题日期（UTC），如 "2026-08-30"
    pub solved_on: chrono::NaiveDate,
    pub count: i64,
}

impl RecordSolutionRequest {
    /// 做题数按 i32 落库，有效范围 [0, i32::MAX]
    pub fn count_in_range(&self) -> bool {
        (0..=i64::from(i32::MAX)).contains(&self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(count: i64) -> RecordSolutionRequest {
        RecordSolutionRequest {
            solved_on: chrono::NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            count,
        }
    }

    #[test]
    fn test_count_range_rejects_negative() {
        assert!(!record(-1).count_in_range());
        assert!(record(0).count_in_range());
    }

    #[test]
    fn test_count_range_rejects_values_above_storage_width() {
        assert!(record(i64::from(i32::MAX)).count_in_range());
        assert!(!record(i64::from(i32::MAX) + 1).count_in_range());
        assert!(!record(i64::MAX).count_in_range());
    }
}
