use std::collections::HashMap;

use serde::Serialize;
use ts_rs::TS;

/// 做题曲线中的一行：某一天每个学生的做题数
///
/// 区间内的每一天都有一行；没有记录的学生当天计为 0。
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/chart.ts")]
pub struct SeriesRow {
    pub date: chrono::NaiveDate,
    // student_id -> 当天做题数
    pub counts: HashMap<i64, i64>,
}

/// 排行榜中单个学生的汇总
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/chart.ts")]
pub struct RankEntry {
    pub student_id: i64,
    pub name: String,
    // 累计做题数
    pub total: i64,
    // 最近 7 天做题数（含当天）
    pub last_7_days: i64,
    // 单日最高做题数
    pub best_day: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/chart.ts")]
pub struct ChartResponse {
    pub rows: Vec<SeriesRow>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/chart.ts")]
pub struct RankingResponse {
    pub items: Vec<RankEntry>,
}
