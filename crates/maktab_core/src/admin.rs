//! crates/maktab_core/src/admin.rs
//!
//! The admin portal's working copy: the academy-wide catalog of students,
//! instructors and courses, plus the mutation API the admin views call.
//! Aggregate statistics are a projection computed on demand, never stored.

use crate::domain::{
    AdminProfile, CourseRecord, EntityKind, InstructorRecord, NewInstructor, ProfileUpdate,
    Status, StudentRecord, SystemStats,
};
use crate::error::DomainError;

/// The in-memory graph the admin portal operates on. Seeded from the fixture
/// at login; every mutation goes through a method here so the invariants in
/// the domain types stay enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminState {
    pub profile: AdminProfile,
    students: Vec<StudentRecord>,
    instructors: Vec<InstructorRecord>,
    courses: Vec<CourseRecord>,
    next_id: u64,
}

impl AdminState {
    pub fn new(
        profile: AdminProfile,
        students: Vec<StudentRecord>,
        instructors: Vec<InstructorRecord>,
        courses: Vec<CourseRecord>,
    ) -> Self {
        let max_id = students
            .iter()
            .map(|s| s.id)
            .chain(instructors.iter().map(|i| i.id))
            .chain(courses.iter().map(|c| c.id))
            .max()
            .unwrap_or(0);
        Self {
            profile,
            students,
            instructors,
            courses,
            next_id: max_id + 1,
        }
    }

    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn instructors(&self) -> &[InstructorRecord] {
        &self.instructors
    }

    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Shallow-merges the update into the admin's own profile and returns
    /// the merged result.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> AdminProfile {
        self.profile.apply(update);
        self.profile.clone()
    }

    pub fn update_student_status(&mut self, student_id: u64, status: Status) -> Result<(), DomainError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id == student_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Student, student_id))?;
        student.status = status;
        Ok(())
    }

    pub fn update_instructor_status(
        &mut self,
        instructor_id: u64,
        status: Status,
    ) -> Result<(), DomainError> {
        let instructor = self
            .instructors
            .iter_mut()
            .find(|i| i.id == instructor_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Instructor, instructor_id))?;
        instructor.status = status;
        Ok(())
    }

    /// Pairs a student with an instructor for one course: records the
    /// instructor's display name on the student and adds the course title to
    /// the student's list with set semantics. Repeating the call with the
    /// same arguments leaves the list content unchanged; enrolment only
    /// grows on the first add and is bounded by the course capacity.
    pub fn assign_student_to_instructor(
        &mut self,
        student_id: u64,
        instructor_id: u64,
        course_id: u64,
    ) -> Result<(), DomainError> {
        if !self.students.iter().any(|s| s.id == student_id) {
            return Err(DomainError::not_found(EntityKind::Student, student_id));
        }
        let instructor_name = self
            .instructors
            .iter()
            .find(|i| i.id == instructor_id)
            .map(|i| i.name.clone())
            .ok_or_else(|| DomainError::not_found(EntityKind::Instructor, instructor_id))?;
        let course_idx = self
            .courses
            .iter()
            .position(|c| c.id == course_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Course, course_id))?;

        let course = &self.courses[course_idx];
        let already_listed = self
            .students
            .iter()
            .find(|s| s.id == student_id)
            .map(|s| s.courses.contains(&course.title))
            .unwrap_or(false);
        if !already_listed && course.enrolled >= course.capacity {
            return Err(DomainError::CourseFull { course_id });
        }

        let title = course.title.clone();
        if let Some(student) = self.students.iter_mut().find(|s| s.id == student_id) {
            student.instructor = Some(instructor_name);
            if !already_listed {
                student.courses.push(title);
            }
        }
        if !already_listed {
            self.courses[course_idx].enrolled += 1;
        }
        Ok(())
    }

    /// Onboards a new instructor with defaulted status, student count and
    /// rating. The id comes from the state's monotonic counter.
    pub fn add_instructor(&mut self, data: NewInstructor) -> InstructorRecord {
        let record = InstructorRecord {
            id: self.take_id(),
            name: data.name,
            email: data.email,
            specialization: data.specialization,
            status: Status::Active,
            student_count: 0,
            rating: 0.0,
        };
        self.instructors.push(record.clone());
        record
    }

    /// Recomputes the aggregate counts from a full scan of the collections.
    /// There is no stored copy to drift from this result; calling it twice
    /// in a row returns identical values.
    pub fn system_stats(&self) -> SystemStats {
        let active_students = self
            .students
            .iter()
            .filter(|s| s.status == Status::Active)
            .count() as u32;
        let active_instructors = self
            .instructors
            .iter()
            .filter(|i| i.status == Status::Active)
            .count() as u32;
        let monthly_revenue = self
            .students
            .iter()
            .filter(|s| s.status == Status::Active)
            .map(|s| u64::from(s.monthly_fee))
            .sum();
        let scheduled: u32 = self.courses.iter().map(|c| c.total_lessons).sum();
        let completed: u32 = self.courses.iter().map(|c| c.completed_lessons).sum();
        let completion_rate = if scheduled == 0 {
            0.0
        } else {
            completed as f32 / scheduled as f32 * 100.0
        };

        SystemStats {
            total_students: self.students.len() as u32,
            active_students,
            inactive_students: self.students.len() as u32 - active_students,
            total_instructors: self.instructors.len() as u32,
            active_instructors,
            total_courses: self.courses.len() as u32,
            monthly_revenue,
            completion_rate,
        }
    }
}
