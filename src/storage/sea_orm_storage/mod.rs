//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod classes;
mod invitations;
mod solutions;
mod students;
mod submissions;
mod teachers;
mod wall;

use crate::config::AppConfig;
use crate::errors::{ClassTrackError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ClassTrackError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ClassTrackError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ClassTrackError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ClassTrackError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{
        entities::{Assignment, Submission},
        requests::{AssignmentListQuery, CreateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    classes::{
        entities::Class,
        requests::{ClassListParams, CreateClassRequest},
    },
    invitations::{entities::Invitation, requests::CreateInvitationRequest},
    students::{
        entities::{Solution, Student},
        requests::{CreateStudentRequest, RecordSolutionRequest, StudentListParams, UpdateStudentRequest},
    },
    teachers::{entities::Teacher, requests::CreateTeacherRequest},
    wall::{
        entities::{WallComment, WallPost},
        requests::{CreateWallCommentRequest, CreateWallPostRequest},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl Storage for SeaOrmStorage {
    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_classes(&self, params: ClassListParams) -> Result<Vec<Class>> {
        self.list_classes_impl(params).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students(&self, params: StudentListParams) -> Result<Vec<Student>> {
        self.list_students_impl(params).await
    }

    async fn list_students_by_class(&self, class_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_class_impl(class_id).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 做题记录模块
    async fn record_solution(
        &self,
        student_id: i64,
        record: RecordSolutionRequest,
    ) -> Result<Solution> {
        self.record_solution_impl(student_id, record).await
    }

    async fn list_solutions_by_class(&self, class_id: i64) -> Result<Vec<Solution>> {
        self.list_solutions_by_class_impl(class_id).await
    }

    // 邀请码模块
    async fn create_invitation(&self, invitation: CreateInvitationRequest) -> Result<Invitation> {
        self.create_invitation_impl(invitation).await
    }

    async fn get_invitation_by_code(&self, code: &str) -> Result<Option<Invitation>> {
        self.get_invitation_by_code_impl(code).await
    }

    async fn list_invitations_by_class(&self, class_id: i64) -> Result<Vec<Invitation>> {
        self.list_invitations_by_class_impl(class_id).await
    }

    async fn set_invitation_active(&self, id: i64, is_active: bool) -> Result<Option<Invitation>> {
        self.set_invitation_active_impl(id, is_active).await
    }

    async fn redeem_invitation(
        &self,
        code: &str,
        student_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Option<Student>> {
        self.redeem_invitation_impl(code, student_id, now).await
    }

    // 作业模块
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(assignment).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    async fn list_assignments_due_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Assignment>> {
        self.list_assignments_due_between_impl(start, end).await
    }

    // 提交记录模块
    async fn upsert_submission(&self, assignment_id: i64, student_id: i64) -> Result<Submission> {
        self.upsert_submission_impl(assignment_id, student_id).await
    }

    async fn list_submissions_by_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_by_assignment_impl(assignment_id)
            .await
    }

    // 班级墙模块
    async fn create_wall_post(
        &self,
        class_id: i64,
        post: CreateWallPostRequest,
    ) -> Result<WallPost> {
        self.create_wall_post_impl(class_id, post).await
    }

    async fn get_wall_post_by_id(&self, id: i64) -> Result<Option<WallPost>> {
        self.get_wall_post_by_id_impl(id).await
    }

    async fn list_wall_posts(&self, class_id: i64) -> Result<Vec<WallPost>> {
        self.list_wall_posts_impl(class_id).await
    }

    async fn delete_wall_post(&self, id: i64) -> Result<bool> {
        self.delete_wall_post_impl(id).await
    }

    async fn create_wall_comment(
        &self,
        post_id: i64,
        comment: CreateWallCommentRequest,
    ) -> Result<WallComment> {
        self.create_wall_comment_impl(post_id, comment).await
    }

    async fn list_wall_comments(&self, post_id: i64) -> Result<Vec<WallComment>> {
        self.list_wall_comments_impl(post_id).await
    }

    async fn mute_student(&self, class_id: i64, student_id: i64, muted_by: i64) -> Result<bool> {
        self.mute_student_impl(class_id, student_id, muted_by).await
    }

    async fn unmute_student(&self, class_id: i64, student_id: i64) -> Result<bool> {
        self.unmute_student_impl(class_id, student_id).await
    }

    async fn is_student_muted(&self, class_id: i64, student_id: i64) -> Result<bool> {
        self.is_student_muted_impl(class_id, student_id).await
    }
}
