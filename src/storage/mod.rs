use std::sync::Arc;

use chrono::{DateTime, Utc};

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 教师管理方法
    // 创建教师
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    // 通过ID获取教师信息
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 列出班级（可按教师筛选）
    async fn list_classes(&self, params: ClassListParams) -> Result<Vec<Class>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 列出学生（可按班级筛选）
    async fn list_students(&self, params: StudentListParams) -> Result<Vec<Student>>;
    // 列出某班级全部学生
    async fn list_students_by_class(&self, class_id: i64) -> Result<Vec<Student>>;
    // 更新学生信息
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 做题记录方法
    // 记录某学生某天的做题数（同一天重复记录按覆盖处理）
    async fn record_solution(
        &self,
        student_id: i64,
        record: RecordSolutionRequest,
    ) -> Result<Solution>;
    // 列出某班级全部做题记录
    async fn list_solutions_by_class(&self, class_id: i64) -> Result<Vec<Solution>>;

    /// 邀请码管理方法
    // 创建邀请码
    async fn create_invitation(&self, invitation: CreateInvitationRequest) -> Result<Invitation>;
    // 通过邀请码查询
    async fn get_invitation_by_code(&self, code: &str) -> Result<Option<Invitation>>;
    // 列出某班级的邀请码
    async fn list_invitations_by_class(&self, class_id: i64) -> Result<Vec<Invitation>>;
    // 启用/停用邀请码
    async fn set_invitation_active(&self, id: i64, is_active: bool) -> Result<Option<Invitation>>;
    // 兑换邀请码：在事务内重读邀请码、增加使用次数、把学生移入班级。
    // 重读后不再满足兑换条件（如并发用尽名额）时返回 None，不做任何修改。
    async fn redeem_invitation(
        &self,
        code: &str,
        student_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Option<Student>>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment>;
    // 通过ID获取作业信息
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 分页列出作业
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    // 删除作业
    async fn delete_assignment(&self, id: i64) -> Result<bool>;
    // 列出截止时间落在 [start, end) 内的作业
    async fn list_assignments_due_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Assignment>>;

    /// 提交记录方法
    // 记录学生提交（重复提交覆盖提交时间）
    async fn upsert_submission(&self, assignment_id: i64, student_id: i64) -> Result<Submission>;
    // 列出某作业的全部提交
    async fn list_submissions_by_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>>;

    /// 班级墙方法
    // 发帖
    async fn create_wall_post(
        &self,
        class_id: i64,
        post: CreateWallPostRequest,
    ) -> Result<WallPost>;
    // 通过ID获取帖子
    async fn get_wall_post_by_id(&self, id: i64) -> Result<Option<WallPost>>;
    // 列出某班级的帖子（新帖在前）
    async fn list_wall_posts(&self, class_id: i64) -> Result<Vec<WallPost>>;
    // 删除帖子（评论级联删除）
    async fn delete_wall_post(&self, id: i64) -> Result<bool>;
    // 评论
    async fn create_wall_comment(
        &self,
        post_id: i64,
        comment: CreateWallCommentRequest,
    ) -> Result<WallComment>;
    // 列出某帖子的评论（旧评论在前）
    async fn list_wall_comments(&self, post_id: i64) -> Result<Vec<WallComment>>;
    // 禁言（幂等，返回是否新增）
    async fn mute_student(&self, class_id: i64, student_id: i64, muted_by: i64) -> Result<bool>;
    // 解除禁言（幂等，返回是否确有记录被删除）
    async fn unmute_student(&self, class_id: i64, student_id: i64) -> Result<bool>;
    // 查询是否被禁言
    async fn is_student_muted(&self, class_id: i64, student_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
