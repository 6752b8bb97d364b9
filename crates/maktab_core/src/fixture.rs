//! crates/maktab_core/src/fixture.rs
//!
//! Static seed data for each portal realm. A session's working copy is
//! cloned from these builders at login; the fixtures themselves are never
//! mutated. The admin and instructor datasets name the same people and
//! courses so they agree in spirit, but the silos are independent and
//! nothing synchronises them.

use chrono::NaiveDate;

use crate::admin::AdminState;
use crate::domain::{
    AdminProfile, Assignment, Course, CourseRecord, EnrolledCourse, InstructorProfile,
    InstructorRecord, Realm, RosterEntry, ScheduleSlot, Status, StudentProfile, StudentRecord,
};
use crate::instructor::InstructorState;
use crate::student::StudentState;

/// The fixed credential allow-list the mock directory answers from.
/// No hashing: this stands in for a real identity service.
pub fn allow_list() -> &'static [(Realm, &'static str, &'static str)] {
    &[
        (Realm::Admin, "admin@example.com", "admin123"),
        (Realm::Instructor, "fatima@maktab.example", "teach123"),
        (Realm::Student, "amina@maktab.example", "learn123"),
    ]
}

pub fn admin_fixture() -> AdminState {
    let profile = AdminProfile {
        id: 1,
        name: "Dr. Ahmed Hassan".to_string(),
        email: "admin@example.com".to_string(),
        phone: "+1 555 0100".to_string(),
        avatar: "AH".to_string(),
    };

    let students = vec![
        StudentRecord {
            id: 1,
            name: "Amina Yusuf".to_string(),
            email: "amina@maktab.example".to_string(),
            status: Status::Active,
            instructor: Some("Ustadha Fatima Zahra".to_string()),
            courses: vec!["Quran Recitation & Tajweed".to_string()],
            monthly_fee: 60,
        },
        StudentRecord {
            id: 2,
            name: "Bilal Hassan".to_string(),
            email: "bilal@maktab.example".to_string(),
            status: Status::Active,
            instructor: Some("Ustadha Fatima Zahra".to_string()),
            courses: vec!["Hifz Program".to_string()],
            monthly_fee: 80,
        },
        StudentRecord {
            id: 3,
            name: "Maryam Siddiqui".to_string(),
            email: "maryam@maktab.example".to_string(),
            status: Status::Inactive,
            instructor: None,
            courses: Vec::new(),
            monthly_fee: 60,
        },
        StudentRecord {
            id: 4,
            name: "Omar Farouk".to_string(),
            email: "omar@maktab.example".to_string(),
            status: Status::Active,
            instructor: Some("Ustadh Ibrahim Khalil".to_string()),
            courses: vec!["Islamic Studies Foundations".to_string()],
            monthly_fee: 50,
        },
    ];

    let instructors = vec![
        InstructorRecord {
            id: 11,
            name: "Ustadha Fatima Zahra".to_string(),
            email: "fatima@maktab.example".to_string(),
            specialization: "Tajweed & Qira'at".to_string(),
            status: Status::Active,
            student_count: 2,
            rating: 4.9,
        },
        InstructorRecord {
            id: 12,
            name: "Ustadh Ibrahim Khalil".to_string(),
            email: "ibrahim@maktab.example".to_string(),
            specialization: "Islamic Studies".to_string(),
            status: Status::Active,
            student_count: 1,
            rating: 4.7,
        },
        InstructorRecord {
            id: 13,
            name: "Ustadh Hamza Qadri".to_string(),
            email: "hamza@maktab.example".to_string(),
            specialization: "Hifz".to_string(),
            status: Status::Inactive,
            student_count: 0,
            rating: 4.5,
        },
    ];

    let courses = vec![
        CourseRecord {
            id: 21,
            title: "Quran Recitation & Tajweed".to_string(),
            instructor_id: 11,
            enrolled: 1,
            capacity: 12,
            total_lessons: 24,
            completed_lessons: 9,
        },
        CourseRecord {
            id: 22,
            title: "Hifz Program".to_string(),
            instructor_id: 11,
            enrolled: 1,
            capacity: 8,
            total_lessons: 48,
            completed_lessons: 20,
        },
        CourseRecord {
            id: 23,
            title: "Islamic Studies Foundations".to_string(),
            instructor_id: 12,
            enrolled: 1,
            capacity: 20,
            total_lessons: 16,
            completed_lessons: 4,
        },
    ];

    AdminState::new(profile, students, instructors, courses)
}

pub fn instructor_fixture() -> InstructorState {
    let profile = InstructorProfile {
        id: 11,
        name: "Ustadha Fatima Zahra".to_string(),
        email: "fatima@maktab.example".to_string(),
        phone: "+1 555 0111".to_string(),
        avatar: "FZ".to_string(),
        specialization: "Tajweed & Qira'at".to_string(),
        bio: "Ijazah in Hafs 'an 'Asim; teaching online since 2018.".to_string(),
    };

    let mut tajweed = Course::new(
        21,
        "Quran Recitation & Tajweed",
        12,
        vec![
            ScheduleSlot {
                day: "Monday".to_string(),
                time: "17:00".to_string(),
                duration_minutes: 45,
            },
            ScheduleSlot {
                day: "Thursday".to_string(),
                time: "17:00".to_string(),
                duration_minutes: 45,
            },
        ],
        24,
        9,
    )
    .expect("fixture lesson counters are consistent");
    tajweed.roster = vec![
        RosterEntry {
            student_id: 1,
            name: "Amina Yusuf".to_string(),
            progress: 38,
        },
        RosterEntry {
            student_id: 2,
            name: "Bilal Hassan".to_string(),
            progress: 42,
        },
    ];
    let mut makharij = Assignment::for_roster(
        31,
        "Makharij drill: throat letters",
        NaiveDate::from_ymd_opt(2025, 5, 20).expect("fixture date is valid"),
        &tajweed.roster,
    );
    // Amina has handed in and been graded; Bilal has handed in, ungraded.
    makharij.submissions[0].submitted = true;
    makharij.submissions[0].grade = Some(88);
    makharij.submissions[0].feedback = Some("Clear articulation, keep the madd lengths even.".to_string());
    makharij.submissions[1].submitted = true;
    tajweed.assignments.push(makharij);

    let mut hifz = Course::new(
        22,
        "Hifz Program",
        8,
        vec![ScheduleSlot {
            day: "Saturday".to_string(),
            time: "09:00".to_string(),
            duration_minutes: 60,
        }],
        48,
        20,
    )
    .expect("fixture lesson counters are consistent");
    hifz.roster = vec![RosterEntry {
        student_id: 2,
        name: "Bilal Hassan".to_string(),
        progress: 42,
    }];
    let mut revision = Assignment::for_roster(
        32,
        "Juz 'Amma revision",
        NaiveDate::from_ymd_opt(2025, 5, 27).expect("fixture date is valid"),
        &hifz.roster,
    );
    revision.submissions[0].submitted = true;
    hifz.assignments.push(revision);

    InstructorState::new(profile, vec![tajweed, hifz], Vec::new())
}

pub fn student_fixture() -> StudentState {
    let profile = StudentProfile {
        id: 1,
        name: "Amina Yusuf".to_string(),
        email: "amina@maktab.example".to_string(),
        phone: "+1 555 0122".to_string(),
        avatar: "AY".to_string(),
        level: "Intermediate".to_string(),
    };

    let enrolled = vec![
        EnrolledCourse {
            title: "Quran Recitation & Tajweed".to_string(),
            instructor: "Ustadha Fatima Zahra".to_string(),
            progress: 38,
            next_lesson: "Monday 17:00".to_string(),
        },
        EnrolledCourse {
            title: "Islamic Studies Foundations".to_string(),
            instructor: "Ustadh Ibrahim Khalil".to_string(),
            progress: 25,
            next_lesson: "Wednesday 16:00".to_string(),
        },
    ];

    StudentState::new(profile, enrolled)
}
