//! 班级名单相关的纯函数

use std::collections::HashSet;

use crate::models::students::entities::Student;

/// 计算尚未提交作业的学生：全班名单减去已提交学生的 ID 集合
///
/// 保持输入顺序（即数据库查询返回的名单顺序），按学生 ID 去差集。
/// 是否有邮箱在这里不考虑，由批量通知环节区分。
pub fn pending_students(students: &[Student], submitted_ids: &HashSet<i64>) -> Vec<Student> {
    students
        .iter()
        .filter(|s| !submitted_ids.contains(&s.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn student(id: i64, name: &str, email: Option<&str>) -> Student {
        Student {
            id,
            class_id: Some(1),
            name: name.to_string(),
            email: email.map(|e| e.to_string()),
            photo_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_roster_submitted_leaves_nobody() {
        let students = vec![student(1, "甲", None), student(2, "乙", None)];
        let submitted: HashSet<i64> = [1, 2].into_iter().collect();
        assert!(pending_students(&students, &submitted).is_empty());
    }

    #[test]
    fn test_difference_is_keyed_by_id_not_email() {
        // A、B 有邮箱且未提交；C 没有邮箱但已提交。
        // C 因提交被排除，而不是因为没有邮箱。
        let students = vec![
            student(1, "A", Some("a@example.com")),
            student(2, "B", Some("b@example.com")),
            student(3, "C", None),
        ];
        let submitted: HashSet<i64> = [3].into_iter().collect();

        let pending = pending_students(&students, &submitted);
        let ids: Vec<i64> = pending.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_order_is_preserved() {
        let students = vec![
            student(5, "e", None),
            student(3, "c", None),
            student(9, "i", None),
        ];
        let submitted: HashSet<i64> = [3].into_iter().collect();

        let ids: Vec<i64> = pending_students(&students, &submitted)
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![5, 9]);
    }

    #[test]
    fn test_empty_roster() {
        let submitted: HashSet<i64> = [1].into_iter().collect();
        assert!(pending_students(&[], &submitted).is_empty());
    }
}
