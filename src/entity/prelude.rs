//! 预导入模块，方便使用

pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::class_invitations::{
    ActiveModel as InvitationActiveModel, Entity as ClassInvitations, Model as InvitationModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::muted_students::{
    ActiveModel as MutedStudentActiveModel, Entity as MutedStudents, Model as MutedStudentModel,
};
pub use super::student_assignments::{
    ActiveModel as SubmissionActiveModel, Entity as StudentAssignments, Model as SubmissionModel,
};
pub use super::student_solutions::{
    ActiveModel as SolutionActiveModel, Entity as StudentSolutions, Model as SolutionModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
pub use super::wall_post_comments::{
    ActiveModel as WallCommentActiveModel, Entity as WallPostComments, Model as WallCommentModel,
};
pub use super::wall_posts::{
    ActiveModel as WallPostActiveModel, Entity as WallPosts, Model as WallPostModel,
};
