//! crates/maktab_core/src/domain.rs
//!
//! Defines the pure, core data structures for the academy portals.
//! These structs are independent of any storage or transport format; each
//! portal role (student, instructor, admin) works against its own silo of
//! these types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

//=========================================================================================
// Shared Enums
//=========================================================================================

/// The three portal roles. Each realm owns an independent fixture and an
/// independently keyed session flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Realm {
    Student,
    Instructor,
    Admin,
}

impl Realm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Realm::Student => "student",
            Realm::Instructor => "instructor",
            Realm::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Names the entity family a failed lookup was searching, so `NotFound`
/// errors stay diagnosable at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Student,
    Instructor,
    Course,
    Assignment,
    Submission,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Student => "student",
            EntityKind::Instructor => "instructor",
            EntityKind::Course => "course",
            EntityKind::Assignment => "assignment",
            EntityKind::Submission => "submission",
        };
        write!(f, "{name}")
    }
}

//=========================================================================================
// Instructor Silo: Courses, Assignments, Submissions
//=========================================================================================

/// One recurring meeting of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub day: String,
    pub time: String,
    pub duration_minutes: u32,
}

/// A student as seen from inside one course roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub student_id: u64,
    pub name: String,
    /// Percentage through the course material, 0..=100.
    pub progress: u8,
}

/// A student's hand-in for one assignment. Exactly one exists per enrolled
/// student; `grade` is only ever set once `submitted` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub student_id: u64,
    pub submitted: bool,
    pub grade: Option<u8>,
    pub feedback: Option<String>,
}

impl Submission {
    fn pending(student_id: u64) -> Self {
        Self {
            student_id,
            submitted: false,
            grade: None,
            feedback: None,
        }
    }
}

/// An assignment owned by a course. Construction seeds one pending
/// submission per roster entry, which is what keeps the submission set
/// equal to the roster set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: u64,
    pub title: String,
    pub due_date: NaiveDate,
    pub submissions: Vec<Submission>,
}

impl Assignment {
    pub fn for_roster(id: u64, title: impl Into<String>, due_date: NaiveDate, roster: &[RosterEntry]) -> Self {
        Self {
            id,
            title: title.into(),
            due_date,
            submissions: roster
                .iter()
                .map(|entry| Submission::pending(entry.student_id))
                .collect(),
        }
    }

    pub fn submission(&self, student_id: u64) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.student_id == student_id)
    }

    pub fn submission_mut(&mut self, student_id: u64) -> Option<&mut Submission> {
        self.submissions.iter_mut().find(|s| s.student_id == student_id)
    }
}

/// A course as the owning instructor sees it: roster, schedule, lesson
/// counters and the owned assignment list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u64,
    pub title: String,
    pub capacity: u32,
    pub schedule: Vec<ScheduleSlot>,
    total_lessons: u32,
    completed_lessons: u32,
    pub roster: Vec<RosterEntry>,
    pub assignments: Vec<Assignment>,
}

impl Course {
    /// Builds a course, rejecting lesson counters that start out inconsistent.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        capacity: u32,
        schedule: Vec<ScheduleSlot>,
        total_lessons: u32,
        completed_lessons: u32,
    ) -> Result<Self, DomainError> {
        if completed_lessons > total_lessons {
            return Err(DomainError::LessonCountExceedsTotal {
                completed: completed_lessons,
                total: total_lessons,
            });
        }
        Ok(Self {
            id,
            title: title.into(),
            capacity,
            schedule,
            total_lessons,
            completed_lessons,
            roster: Vec::new(),
            assignments: Vec::new(),
        })
    }

    pub fn total_lessons(&self) -> u32 {
        self.total_lessons
    }

    pub fn completed_lessons(&self) -> u32 {
        self.completed_lessons
    }

    /// Advances the completed-lesson counter, capped at the total.
    pub fn complete_lesson(&mut self) -> Result<(), DomainError> {
        if self.completed_lessons >= self.total_lessons {
            return Err(DomainError::LessonCountExceedsTotal {
                completed: self.completed_lessons + 1,
                total: self.total_lessons,
            });
        }
        self.completed_lessons += 1;
        Ok(())
    }

    pub fn assignment_mut(&mut self, assignment_id: u64) -> Option<&mut Assignment> {
        self.assignments.iter_mut().find(|a| a.id == assignment_id)
    }
}

/// A notice posted by an instructor to one or more of their courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub priority: Priority,
    pub course_ids: Vec<u64>,
}

//=========================================================================================
// Student Silo
//=========================================================================================

/// A course as it appears on the student's own dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolledCourse {
    pub title: String,
    pub instructor: String,
    pub progress: u8,
    pub next_lesson: String,
}

//=========================================================================================
// Admin Silo: Catalog Records and Derived Stats
//=========================================================================================

/// A student row in the admin catalog. `instructor` and `courses` are
/// display-level denormalisations kept by `assign_student_to_instructor`;
/// the course list has set semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub status: Status,
    pub instructor: Option<String>,
    pub courses: Vec<String>,
    pub monthly_fee: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructorRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub status: Status,
    pub student_count: u32,
    pub rating: f32,
}

/// The fields an admin supplies when onboarding an instructor; everything
/// else is defaulted by `AdminState::add_instructor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInstructor {
    pub name: String,
    pub email: String,
    pub specialization: String,
}

/// A course row in the admin catalog. Holds a weak reference to the owning
/// instructor by id, never an owned copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: u64,
    pub title: String,
    pub instructor_id: u64,
    pub enrolled: u32,
    pub capacity: u32,
    pub total_lessons: u32,
    pub completed_lessons: u32,
}

/// Aggregate counts over the admin catalog. This is a projection computed
/// on demand by `AdminState::system_stats`; it is never stored, so it can
/// never drift from the collections it summarises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStats {
    pub total_students: u32,
    pub active_students: u32,
    pub inactive_students: u32,
    pub total_instructors: u32,
    pub active_instructors: u32,
    pub total_courses: u32,
    /// Sum of monthly fees across active students.
    pub monthly_revenue: u64,
    /// Lessons completed across all courses as a percentage of lessons
    /// scheduled, 0.0 when nothing is scheduled.
    pub completion_rate: f32,
}

//=========================================================================================
// Actor Profiles
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub specialization: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub level: String,
}

/// A partial profile edit. Fields left as `None` keep their current value;
/// no validation happens beyond field presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

macro_rules! impl_apply_update {
    ($($profile:ty),+) => {
        $(impl $profile {
            /// Shallow-merges the update into this profile.
            pub fn apply(&mut self, update: ProfileUpdate) {
                if let Some(name) = update.name {
                    self.name = name;
                }
                if let Some(email) = update.email {
                    self.email = email;
                }
                if let Some(phone) = update.phone {
                    self.phone = phone;
                }
                if let Some(avatar) = update.avatar {
                    self.avatar = avatar;
                }
            }
        })+
    };
}

impl_apply_update!(AdminProfile, InstructorProfile, StudentProfile);
