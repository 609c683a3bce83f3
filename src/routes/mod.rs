pub mod assignments;

pub mod charts;

pub mod classes;

pub mod invitations;

pub mod students;

pub mod system;

pub mod teachers;

pub mod wall;

pub use assignments::configure_assignments_routes;
pub use charts::configure_charts_routes;
pub use classes::configure_classes_routes;
pub use invitations::configure_invitations_routes;
pub use students::configure_students_routes;
pub use system::configure_system_routes;
pub use teachers::configure_teachers_routes;
pub use wall::configure_wall_routes;
