use serde::Deserialize;
use ts_rs::TS;

/// 做题曲线查询参数（日期均为 UTC，闭区间）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/chart.ts")]
pub struct ChartParams {
    pub from: chrono::NaiveDate,
    pub to: chrono::NaiveDate,
}
