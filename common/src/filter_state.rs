//! Current values of every filter field.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{
    errors::ValidationError,
    filter_field::{FieldKind, MultiField, OptionId, ScalarField, StudentStatus},
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Typed value bag for the students filter form.
///
/// Only [`crate::filter_store::FilterStore`] mutates it, which keeps every
/// multi-select value a subset of that field's available options. There is
/// no way to build one from outside data:
///
/// ```compile_fail
/// let state: common::filter_state::FilterState = serde_json::from_str(r#"{"programs": [7]}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    enrollment_date: String,
    enrolled_from: String,
    enrolled_to: String,
    last_name: String,
    citizenship: String,
    status: String,
    faculties: BTreeSet<OptionId>,
    programs: BTreeSet<OptionId>,
    courses: BTreeSet<OptionId>,
}

impl FilterState {
    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::EnrollmentDate => &self.enrollment_date,
            ScalarField::EnrolledFrom => &self.enrolled_from,
            ScalarField::EnrolledTo => &self.enrolled_to,
            ScalarField::LastName => &self.last_name,
            ScalarField::Citizenship => &self.citizenship,
            ScalarField::Status => &self.status,
        }
    }

    pub(crate) fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::EnrollmentDate => &mut self.enrollment_date,
            ScalarField::EnrolledFrom => &mut self.enrolled_from,
            ScalarField::EnrolledTo => &mut self.enrolled_to,
            ScalarField::LastName => &mut self.last_name,
            ScalarField::Citizenship => &mut self.citizenship,
            ScalarField::Status => &mut self.status,
        }
    }

    pub fn multi(&self, field: MultiField) -> &BTreeSet<OptionId> {
        match field {
            MultiField::Faculties => &self.faculties,
            MultiField::Programs => &self.programs,
            MultiField::Courses => &self.courses,
        }
    }

    pub(crate) fn multi_mut(&mut self, field: MultiField) -> &mut BTreeSet<OptionId> {
        match field {
            MultiField::Faculties => &mut self.faculties,
            MultiField::Programs => &mut self.programs,
            MultiField::Courses => &mut self.courses,
        }
    }

    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        ScalarField::ALL.iter().all(|field| self.scalar(*field).trim().is_empty())
            && MultiField::ALL.iter().all(|field| self.multi(*field).is_empty())
    }

    /// Check the values that can be wrong on their own, before anything is sent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in ScalarField::ALL {
            if field.kind() == FieldKind::Date {
                parse_date(field, self.scalar(field))?;
            }
        }

        let from = parse_date(ScalarField::EnrolledFrom, &self.enrolled_from)?;
        let to = parse_date(ScalarField::EnrolledTo, &self.enrolled_to)?;
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(ValidationError::InvertedDateRange {
                    from: self.enrolled_from.trim().to_string(),
                    to: self.enrolled_to.trim().to_string(),
                });
            }
        }

        let status = self.status.trim();
        if !status.is_empty() && StudentStatus::from_token(status).is_none() {
            return Err(ValidationError::UnknownStatus(status.to_string()));
        }
        Ok(())
    }

    /// Parsed value of a date field, `None` while it is empty.
    pub fn date(&self, field: ScalarField) -> Result<Option<NaiveDate>, ValidationError> {
        parse_date(field, self.scalar(field))
    }
}

fn parse_date(field: ScalarField, value: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::MalformedDate { field, value: value.to_string() })
}
