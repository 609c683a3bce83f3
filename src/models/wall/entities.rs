use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 墙上内容的作者身份
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/wall.ts")]
pub enum AuthorRole {
    Teacher,
    Student,
}

impl AuthorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorRole::Teacher => "teacher",
            AuthorRole::Student => "student",
        }
    }

    // 数据库中的未知值按学生处理
    pub fn from_str_or_student(s: &str) -> Self {
        match s {
            "teacher" => AuthorRole::Teacher,
            _ => AuthorRole::Student,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/wall.ts")]
pub struct WallPost {
    pub id: i64,
    pub class_id: i64,
    pub author_id: i64,
    pub author_role: AuthorRole,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/wall.ts")]
pub struct WallComment {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub author_role: AuthorRole,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_role_round_trip() {
        assert_eq!(
            AuthorRole::from_str_or_student(AuthorRole::Teacher.as_str()),
            AuthorRole::Teacher
        );
        assert_eq!(
            AuthorRole::from_str_or_student("garbage"),
            AuthorRole::Student
        );
    }
}
