//! Student records returned by the search and statistics endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    filter_field::StudentStatus,
    option_set::{Faculty, Program},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: u64,
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub enrollment_date: NaiveDate,
    #[serde(default)]
    pub expulsion_date: Option<NaiveDate>,
    #[serde(default)]
    pub faculty: Option<Faculty>,
    #[serde(default)]
    pub program: Option<Program>,
    pub citizenship: String,
    pub course: u8,
}

impl StudentRecord {
    pub fn full_name(&self) -> String {
        [self.last_name.as_str(), self.first_name.as_str(), self.middle_name.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn status(&self) -> StudentStatus {
        match self.expulsion_date {
            Some(_) => StudentStatus::Expelled,
            None => StudentStatus::Enrolled,
        }
    }

    pub fn faculty_name(&self) -> &str {
        self.faculty.as_ref().map(|f| f.name.as_str()).unwrap_or("")
    }

    pub fn program_name(&self) -> &str {
        self.program.as_ref().map(|p| p.name.as_str()).unwrap_or("")
    }
}

/// Response of `GET /enrollment-stats/?date=YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentStats {
    pub date: String,
    pub count: u64,
    pub students: Vec<StudentRecord>,
}
