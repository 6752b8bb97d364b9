pub mod admin;
pub mod domain;
pub mod error;
pub mod fixture;
pub mod instructor;
pub mod ports;
pub mod student;

pub use admin::AdminState;
pub use domain::{
    AdminProfile, Announcement, Assignment, Course, CourseRecord, EnrolledCourse, EntityKind,
    InstructorProfile, InstructorRecord, NewInstructor, Priority, ProfileUpdate, Realm,
    RosterEntry, ScheduleSlot, Status, StudentProfile, StudentRecord, Submission, SystemStats,
};
pub use error::{AuthError, DomainError};
pub use instructor::InstructorState;
pub use ports::{CredentialService, FlagStore, PortError, PortResult};
pub use student::StudentState;
