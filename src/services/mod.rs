pub mod assignments;
pub mod charts;
pub mod classes;
pub mod invitations;
pub mod students;
pub mod system;
pub mod teachers;
pub mod wall;

pub use assignments::AssignmentService;
pub use charts::ChartService;
pub use classes::ClassService;
pub use invitations::InvitationService;
pub use students::StudentService;
pub use system::SystemService;
pub use teachers::TeacherService;
pub use wall::WallService;
