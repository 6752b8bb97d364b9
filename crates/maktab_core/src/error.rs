//! crates/maktab_core/src/error.rs
//!
//! Error taxonomy for the domain mutation layer. Every failed lookup is an
//! explicit `NotFound` surfaced to the caller; nothing degrades into a
//! silent no-op.

use crate::domain::EntityKind;

/// Failures raised by the mutation API on a role's working copy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: u64 },

    #[error("grade {0} is outside the accepted range 0..=100")]
    InvalidGrade(u8),

    #[error("progress {0} is outside the accepted range 0..=100")]
    InvalidProgress(u8),

    #[error("submission for student {student_id} on assignment {assignment_id} has not been handed in")]
    NotYetSubmitted { assignment_id: u64, student_id: u64 },

    #[error("completed lesson count {completed} exceeds the scheduled total {total}")]
    LessonCountExceedsTotal { completed: u32, total: u32 },

    #[error("course {course_id} is already at capacity")]
    CourseFull { course_id: u64 },
}

impl DomainError {
    pub(crate) fn not_found(kind: EntityKind, id: u64) -> Self {
        Self::NotFound { kind, id }
    }
}

/// Failures raised at the authentication boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid identifier or secret")]
    InvalidCredentials,
}
