//! The fixed set of filter fields shown on the students form.

use serde::{Deserialize, Serialize};

/// Identifier of a selectable option (faculty id, program id, course number).
pub type OptionId = u64;

/// Separator used for multi-valued keys on the wire. Never part of an id or token.
pub const MULTI_VALUE_DELIMITER: &str = ",";

/// Courses a student can be on.
pub const COURSES: std::ops::RangeInclusive<OptionId> = 1..=6;

/// Suggestions offered for the free-text citizenship field.
pub const CITIZENSHIPS: [&str; 6] = ["Россия", "Казахстан", "Беларусь", "Узбекистан", "Армения", "Азербайджан"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Date,
    Text,
    Enum,
    MultiId,
    MultiEnum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScalarField {
    EnrollmentDate,
    EnrolledFrom,
    EnrolledTo,
    LastName,
    Citizenship,
    Status,
}

impl ScalarField {
    pub const ALL: [ScalarField; 6] = [
        ScalarField::EnrollmentDate,
        ScalarField::EnrolledFrom,
        ScalarField::EnrolledTo,
        ScalarField::LastName,
        ScalarField::Citizenship,
        ScalarField::Status,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            ScalarField::EnrollmentDate => "enrollment_date",
            ScalarField::EnrolledFrom => "enrolled_from",
            ScalarField::EnrolledTo => "enrolled_to",
            ScalarField::LastName => "last_name",
            ScalarField::Citizenship => "citizenship",
            ScalarField::Status => "status",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            ScalarField::EnrollmentDate | ScalarField::EnrolledFrom | ScalarField::EnrolledTo => FieldKind::Date,
            ScalarField::LastName | ScalarField::Citizenship => FieldKind::Text,
            ScalarField::Status => FieldKind::Enum,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ScalarField::EnrollmentDate => "Дата зачисления",
            ScalarField::EnrolledFrom => "Зачислен с",
            ScalarField::EnrolledTo => "Зачислен по",
            ScalarField::LastName => "Фамилия",
            ScalarField::Citizenship => "Гражданство",
            ScalarField::Status => "Статус",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MultiField {
    Faculties,
    Programs,
    Courses,
}

impl MultiField {
    pub const ALL: [MultiField; 3] = [MultiField::Faculties, MultiField::Programs, MultiField::Courses];

    pub fn wire_name(self) -> &'static str {
        match self {
            MultiField::Faculties => "faculties",
            MultiField::Programs => "programs",
            MultiField::Courses => "courses",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            MultiField::Faculties | MultiField::Programs => FieldKind::MultiId,
            MultiField::Courses => FieldKind::MultiEnum,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            MultiField::Faculties => "Факультет",
            MultiField::Programs => "Направление",
            MultiField::Courses => "Курс",
        }
    }

    /// Field whose options are loaded from this field's current selection.
    pub fn dependent(self) -> Option<MultiField> {
        match self {
            MultiField::Faculties => Some(MultiField::Programs),
            MultiField::Programs | MultiField::Courses => None,
        }
    }

    pub fn parent(self) -> Option<MultiField> {
        match self {
            MultiField::Programs => Some(MultiField::Faculties),
            MultiField::Faculties | MultiField::Courses => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilterField {
    Scalar(ScalarField),
    Multi(MultiField),
}

impl FilterField {
    /// Every field, in the order its key is emitted on the wire.
    pub const ALL: [FilterField; 9] = [
        FilterField::Scalar(ScalarField::EnrollmentDate),
        FilterField::Scalar(ScalarField::EnrolledFrom),
        FilterField::Scalar(ScalarField::EnrolledTo),
        FilterField::Scalar(ScalarField::LastName),
        FilterField::Scalar(ScalarField::Citizenship),
        FilterField::Scalar(ScalarField::Status),
        FilterField::Multi(MultiField::Faculties),
        FilterField::Multi(MultiField::Programs),
        FilterField::Multi(MultiField::Courses),
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            FilterField::Scalar(field) => field.wire_name(),
            FilterField::Multi(field) => field.wire_name(),
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FilterField::Scalar(field) => field.kind(),
            FilterField::Multi(field) => field.kind(),
        }
    }
}

impl From<ScalarField> for FilterField {
    fn from(field: ScalarField) -> Self {
        FilterField::Scalar(field)
    }
}

impl From<MultiField> for FilterField {
    fn from(field: MultiField) -> Self {
        FilterField::Multi(field)
    }
}

/// Values accepted by the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentStatus {
    Enrolled,
    Expelled,
}

impl StudentStatus {
    pub const ALL: [StudentStatus; 2] = [StudentStatus::Enrolled, StudentStatus::Expelled];

    pub fn token(self) -> &'static str {
        match self {
            StudentStatus::Enrolled => "enrolled",
            StudentStatus::Expelled => "expelled",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.token() == token)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            StudentStatus::Enrolled => "Обучается",
            StudentStatus::Expelled => "Отчислен",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn wire_names_are_unique() {
        let names = FilterField::ALL.iter().map(|f| f.wire_name()).collect::<BTreeSet<_>>();
        assert_eq!(names.len(), FilterField::ALL.len());
    }

    #[test]
    fn faculties_and_programs_form_the_only_cascade() {
        for field in MultiField::ALL {
            if let Some(dependent) = field.dependent() {
                assert_eq!(dependent.parent(), Some(field));
            }
        }
        assert_eq!(MultiField::Faculties.dependent(), Some(MultiField::Programs));
        assert_eq!(MultiField::Courses.dependent(), None);
    }

    #[test]
    fn status_tokens_round_trip() {
        for status in StudentStatus::ALL {
            assert_eq!(StudentStatus::from_token(status.token()), Some(status));
        }
        assert_eq!(StudentStatus::from_token("graduated"), None);
    }
}
