//! 做题曲线与排行榜聚合
//!
//! 纯函数，无 I/O：输入扁平的做题记录，输出图表行或排行榜。

use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::models::charts::responses::{RankEntry, SeriesRow};
use crate::models::students::entities::{Solution, Student};

/// 把做题记录整理为按天的曲线数据
///
/// `[from, to]` 闭区间内每一天产生一行；区间内没有记录的学生当天计 0。
/// 超出区间的记录被忽略。
pub fn solution_series(
    students: &[Student],
    solutions: &[Solution],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<SeriesRow> {
    // (student_id, date) -> count
    let mut by_day: HashMap<(i64, NaiveDate), i64> = HashMap::new();
    for solution in solutions {
        if solution.solved_on >= from && solution.solved_on <= to {
            *by_day.entry((solution.student_id, solution.solved_on)).or_insert(0) +=
                solution.count;
        }
    }

    let mut rows = Vec::new();
    let mut date = from;
    while date <= to {
        let counts = students
            .iter()
            .map(|s| (s.id, by_day.get(&(s.id, date)).copied().unwrap_or(0)))
            .collect();
        rows.push(SeriesRow { date, counts });

        match date.checked_add_days(Days::new(1)) {
            Some(next) => date = next,
            None => break,
        }
    }
    rows
}

/// 生成排行榜：累计、近 7 天（含当天）、单日最高，按累计降序
///
/// 排序是稳定的，累计相同的学生保持名单顺序；没有任何记录的学生
/// 也会出现在榜单中，三项均为 0。
pub fn rank_students(students: &[Student], solutions: &[Solution], today: NaiveDate) -> Vec<RankEntry> {
    let week_start = today.checked_sub_days(Days::new(6)).unwrap_or(today);

    let mut entries: Vec<RankEntry> = students
        .iter()
        .map(|student| {
            let mut total = 0i64;
            let mut last_7_days = 0i64;
            let mut per_day: HashMap<NaiveDate, i64> = HashMap::new();

            for solution in solutions.iter().filter(|s| s.student_id == student.id) {
                total += solution.count;
                if solution.solved_on >= week_start && solution.solved_on <= today {
                    last_7_days += solution.count;
                }
                *per_day.entry(solution.solved_on).or_insert(0) += solution.count;
            }

            RankEntry {
                student_id: student.id,
                name: student.name.clone(),
                total,
                last_7_days,
                best_day: per_day.values().copied().max().unwrap_or(0),
            }
        })
        .collect();

    // Vec::sort_by 是稳定排序，平分时保持名单顺序
    entries.sort_by(|a, b| b.total.cmp(&a.total));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn student(id: i64, name: &str) -> Student {
        Student {
            id,
            class_id: Some(1),
            name: name.to_string(),
            email: None,
            photo_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn solution(student_id: i64, date: NaiveDate, count: i64) -> Solution {
        Solution {
            id: 0,
            student_id,
            solved_on: date,
            count,
        }
    }

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_series_one_row_per_day_with_zero_fill() {
        let students = vec![student(1, "甲"), student(2, "乙")];
        let solutions = vec![
            solution(1, d("2026-08-01"), 5),
            solution(2, d("2026-08-03"), 2),
        ];

        let rows = solution_series(&students, &solutions, d("2026-08-01"), d("2026-08-03"));
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].counts[&1], 5);
        assert_eq!(rows[0].counts[&2], 0);
        assert_eq!(rows[1].counts[&1], 0);
        assert_eq!(rows[1].counts[&2], 0);
        assert_eq!(rows[2].counts[&2], 2);
    }

    #[test]
    fn test_series_ignores_out_of_range_records() {
        let students = vec![student(1, "甲")];
        let solutions = vec![
            solution(1, d("2026-07-31"), 9),
            solution(1, d("2026-08-02"), 3),
            solution(1, d("2026-08-04"), 9),
        ];

        let rows = solution_series(&students, &solutions, d("2026-08-01"), d("2026-08-03"));
        let total: i64 = rows.iter().map(|r| r.counts[&1]).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_series_empty_students_yields_empty_rows() {
        let rows = solution_series(&[], &[], d("2026-08-01"), d("2026-08-02"));
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.counts.is_empty()));
    }

    #[test]
    fn test_ranking_sorted_by_total_desc() {
        let students = vec![student(1, "甲"), student(2, "乙"), student(3, "丙")];
        let today = d("2026-08-30");
        let solutions = vec![
            solution(1, d("2026-08-01"), 3),
            solution(2, d("2026-08-01"), 10),
            solution(3, d("2026-08-02"), 5),
        ];

        let ranked = rank_students(&students, &solutions, today);
        let ids: Vec<i64> = ranked.iter().map(|e| e.student_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_ranking_zero_solution_students_sink_to_bottom() {
        let students = vec![student(1, "甲"), student(2, "乙"), student(3, "丙")];
        let solutions = vec![solution(2, d("2026-08-01"), 1)];

        let ranked = rank_students(&students, &solutions, d("2026-08-30"));
        assert_eq!(ranked[0].student_id, 2);
        // 没有记录的学生仍在榜单中，total 为 0，保持名单顺序
        assert_eq!(ranked[1].student_id, 1);
        assert_eq!(ranked[2].student_id, 3);
        assert_eq!(ranked[1].total, 0);
        assert_eq!(ranked[1].last_7_days, 0);
        assert_eq!(ranked[1].best_day, 0);
    }

    #[test]
    fn test_ranking_empty_solutions_no_panic() {
        let students = vec![student(1, "甲")];
        let ranked = rank_students(&students, &[], d("2026-08-30"));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].total, 0);
    }

    #[test]
    fn test_last_7_days_window_inclusive_of_today() {
        let students = vec![student(1, "甲")];
        let today = d("2026-08-30");
        let solutions = vec![
            solution(1, d("2026-08-30"), 1), // 当天，算
            solution(1, d("2026-08-24"), 2), // 第 7 天，算
            solution(1, d("2026-08-23"), 4), // 第 8 天，不算
        ];

        let ranked = rank_students(&students, &solutions, today);
        assert_eq!(ranked[0].last_7_days, 3);
        assert_eq!(ranked[0].total, 7);
        assert_eq!(ranked[0].best_day, 4);
    }
}
