//! crates/maktab_core/src/student.rs
//!
//! The student portal's working copy. The student surface is read-mostly:
//! a profile and the enrolled-course dashboard, with profile edits as the
//! only mutation.

use crate::domain::{EnrolledCourse, ProfileUpdate, StudentProfile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentState {
    pub profile: StudentProfile,
    enrolled: Vec<EnrolledCourse>,
}

impl StudentState {
    pub fn new(profile: StudentProfile, enrolled: Vec<EnrolledCourse>) -> Self {
        Self { profile, enrolled }
    }

    pub fn enrolled(&self) -> &[EnrolledCourse] {
        &self.enrolled
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) -> StudentProfile {
        self.profile.apply(update);
        self.profile.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::student_fixture;

    #[test]
    fn profile_edit_keeps_enrolment_untouched() {
        let mut state = student_fixture();
        let enrolled_before = state.enrolled().to_vec();
        state.update_profile(ProfileUpdate {
            name: Some("Yusuf Rahman".to_string()),
            ..ProfileUpdate::default()
        });
        assert_eq!(state.profile.name, "Yusuf Rahman");
        assert_eq!(state.enrolled(), enrolled_before.as_slice());
    }
}
