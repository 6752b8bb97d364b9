//! crates/maktab_core/src/instructor.rs
//!
//! The instructor portal's working copy: the courses the instructor teaches
//! (rosters, lesson counters, assignments and their submissions) plus the
//! announcement feed, with the grading and progress mutations on top.

use chrono::{NaiveDate, Utc};

use crate::domain::{
    Announcement, Assignment, Course, EntityKind, InstructorProfile, Priority, ProfileUpdate,
};
use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct InstructorState {
    pub profile: InstructorProfile,
    courses: Vec<Course>,
    announcements: Vec<Announcement>,
    next_id: u64,
}

impl InstructorState {
    pub fn new(
        profile: InstructorProfile,
        courses: Vec<Course>,
        announcements: Vec<Announcement>,
    ) -> Self {
        let max_id = courses
            .iter()
            .map(|c| c.id)
            .chain(courses.iter().flat_map(|c| c.assignments.iter().map(|a| a.id)))
            .chain(announcements.iter().map(|a| a.id))
            .max()
            .unwrap_or(0);
        Self {
            profile,
            courses,
            announcements,
            next_id: max_id + 1,
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Most-recent-first; `add_announcement` prepends.
    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn course_mut(&mut self, course_id: u64) -> Result<&mut Course, DomainError> {
        self.courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Course, course_id))
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) -> InstructorProfile {
        self.profile.apply(update);
        self.profile.clone()
    }

    /// Creates an assignment on a course. One pending submission is seeded
    /// per roster entry, so the submission set always equals the roster set.
    pub fn add_assignment(
        &mut self,
        course_id: u64,
        title: impl Into<String>,
        due_date: NaiveDate,
    ) -> Result<Assignment, DomainError> {
        let id = self.take_id();
        let course = self.course_mut(course_id)?;
        let assignment = Assignment::for_roster(id, title, due_date, &course.roster);
        course.assignments.push(assignment.clone());
        Ok(assignment)
    }

    /// Marks a student's submission as handed in. Repeating the call is a
    /// no-op; an existing grade is kept.
    pub fn record_submission(
        &mut self,
        course_id: u64,
        assignment_id: u64,
        student_id: u64,
    ) -> Result<(), DomainError> {
        let submission = self.submission_mut(course_id, assignment_id, student_id)?;
        submission.submitted = true;
        Ok(())
    }

    /// Sets grade and feedback on a handed-in submission. Re-grading
    /// overwrites both fields; it never duplicates the submission. The grade
    /// range is validated before any lookup happens.
    pub fn grade_assignment(
        &mut self,
        course_id: u64,
        assignment_id: u64,
        student_id: u64,
        grade: u8,
        feedback: impl Into<String>,
    ) -> Result<(), DomainError> {
        if grade > 100 {
            return Err(DomainError::InvalidGrade(grade));
        }
        let submission = self.submission_mut(course_id, assignment_id, student_id)?;
        if !submission.submitted {
            return Err(DomainError::NotYetSubmitted {
                assignment_id,
                student_id,
            });
        }
        submission.grade = Some(grade);
        submission.feedback = Some(feedback.into());
        Ok(())
    }

    /// Sets a student's progress within one course roster, 0..=100.
    pub fn update_student_progress(
        &mut self,
        course_id: u64,
        student_id: u64,
        progress: u8,
    ) -> Result<(), DomainError> {
        if progress > 100 {
            return Err(DomainError::InvalidProgress(progress));
        }
        let course = self.course_mut(course_id)?;
        let entry = course
            .roster
            .iter_mut()
            .find(|r| r.student_id == student_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Student, student_id))?;
        entry.progress = progress;
        Ok(())
    }

    /// Advances the completed-lesson counter on one course.
    pub fn complete_lesson(&mut self, course_id: u64) -> Result<(), DomainError> {
        self.course_mut(course_id)?.complete_lesson()
    }

    /// Posts an announcement targeting the given courses. Every target id
    /// must resolve; the new announcement lands at the head of the feed.
    pub fn add_announcement(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        priority: Priority,
        course_ids: Vec<u64>,
    ) -> Result<Announcement, DomainError> {
        for course_id in &course_ids {
            if !self.courses.iter().any(|c| c.id == *course_id) {
                return Err(DomainError::not_found(EntityKind::Course, *course_id));
            }
        }
        let announcement = Announcement {
            id: self.take_id(),
            title: title.into(),
            content: content.into(),
            date: Utc::now(),
            priority,
            course_ids,
        };
        self.announcements.insert(0, announcement.clone());
        Ok(announcement)
    }

    fn submission_mut(
        &mut self,
        course_id: u64,
        assignment_id: u64,
        student_id: u64,
    ) -> Result<&mut crate::domain::Submission, DomainError> {
        let course = self.course_mut(course_id)?;
        let assignment = course
            .assignment_mut(assignment_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Assignment, assignment_id))?;
        assignment
            .submission_mut(student_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Submission, student_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::instructor_fixture;

    fn first_course_id(state: &InstructorState) -> u64 {
        state.courses()[0].id
    }

    #[test]
    fn grade_out_of_range_is_rejected_and_submission_untouched() {
        let mut state = instructor_fixture();
        let course_id = first_course_id(&state);
        let assignment = state.courses()[0].assignments[0].clone();
        let student_id = assignment.submissions[0].student_id;

        let err = state
            .grade_assignment(course_id, assignment.id, student_id, 150, "too generous")
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidGrade(150));

        let after = state.courses()[0]
            .assignments
            .iter()
            .find(|a| a.id == assignment.id)
            .unwrap()
            .submission(student_id)
            .unwrap()
            .clone();
        assert_eq!(after, assignment.submission(student_id).unwrap().clone());
    }

    #[test]
    fn regrade_overwrites_without_duplicating() {
        let mut state = instructor_fixture();
        let course_id = first_course_id(&state);
        let assignment_id = state.courses()[0].assignments[0].id;
        let student_id = state.courses()[0].roster[0].student_id;

        state
            .record_submission(course_id, assignment_id, student_id)
            .unwrap();
        state
            .grade_assignment(course_id, assignment_id, student_id, 85, "good")
            .unwrap();
        state
            .grade_assignment(course_id, assignment_id, student_id, 90, "better")
            .unwrap();

        let assignment = state.courses()[0]
            .assignments
            .iter()
            .find(|a| a.id == assignment_id)
            .unwrap();
        let matching: Vec<_> = assignment
            .submissions
            .iter()
            .filter(|s| s.student_id == student_id)
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].grade, Some(90));
        assert_eq!(matching[0].feedback.as_deref(), Some("better"));
    }

    #[test]
    fn grading_before_hand_in_is_rejected() {
        let mut state = instructor_fixture();
        let course_id = first_course_id(&state);
        let due = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let assignment = state.add_assignment(course_id, "Tafsir summary", due).unwrap();
        let student_id = state.courses()[0].roster[0].student_id;

        let err = state
            .grade_assignment(course_id, assignment.id, student_id, 70, "n/a")
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::NotYetSubmitted {
                assignment_id: assignment.id,
                student_id
            }
        );
    }

    #[test]
    fn submissions_track_the_roster_through_mutations() {
        let mut state = instructor_fixture();
        let course_id = first_course_id(&state);
        let due = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
        let assignment = state.add_assignment(course_id, "Memorisation check", due).unwrap();
        let student_id = state.courses()[0].roster[0].student_id;
        state
            .record_submission(course_id, assignment.id, student_id)
            .unwrap();
        state
            .grade_assignment(course_id, assignment.id, student_id, 95, "excellent tajweed")
            .unwrap();

        for course in state.courses() {
            let roster_ids: std::collections::BTreeSet<u64> =
                course.roster.iter().map(|r| r.student_id).collect();
            for assignment in &course.assignments {
                let submission_ids: std::collections::BTreeSet<u64> =
                    assignment.submissions.iter().map(|s| s.student_id).collect();
                assert_eq!(submission_ids, roster_ids);
                assert_eq!(assignment.submissions.len(), course.roster.len());
            }
        }
    }

    #[test]
    fn progress_update_validates_range_and_ids() {
        let mut state = instructor_fixture();
        let course_id = first_course_id(&state);
        let student_id = state.courses()[0].roster[0].student_id;

        assert_eq!(
            state.update_student_progress(course_id, student_id, 101),
            Err(DomainError::InvalidProgress(101))
        );
        assert_eq!(
            state.update_student_progress(course_id, 999, 50),
            Err(DomainError::NotFound {
                kind: EntityKind::Student,
                id: 999
            })
        );

        state.update_student_progress(course_id, student_id, 72).unwrap();
        assert_eq!(state.courses()[0].roster[0].progress, 72);
    }

    #[test]
    fn announcements_are_most_recent_first() {
        let mut state = instructor_fixture();
        let course_id = first_course_id(&state);
        state
            .add_announcement("Eid break", "No classes next week.", Priority::High, vec![course_id])
            .unwrap();
        let second = state
            .add_announcement("Recital", "Friday recital at 5pm.", Priority::Medium, vec![course_id])
            .unwrap();
        assert_eq!(state.announcements()[0], second);
        assert_eq!(state.announcements()[1].title, "Eid break");
    }

    #[test]
    fn announcement_with_unknown_course_is_rejected() {
        let mut state = instructor_fixture();
        let before_len = state.announcements().len();
        let err = state
            .add_announcement("Oops", "bad target", Priority::Low, vec![999])
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::NotFound {
                kind: EntityKind::Course,
                id: 999
            }
        );
        assert_eq!(state.announcements().len(), before_len);
    }
}
