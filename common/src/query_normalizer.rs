//! Turns a [`FilterState`] into the flat request sent to the student search endpoint.

use serde::{Deserialize, Serialize};

use crate::{
    filter_field::{FilterField, MULTI_VALUE_DELIMITER, OptionId},
    filter_state::FilterState,
};

/// Query parameters of one search submission, in fixed key order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct EnrollmentRequest {
    params: Vec<(String, String)>,
}

impl EnrollmentRequest {
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// `application/x-www-form-urlencoded` rendering, e.g. `courses=1%2C2&faculties=3`.
    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.params)
            .finish()
    }
}

pub fn join_ids<'a>(ids: impl IntoIterator<Item = &'a OptionId>) -> String {
    ids.into_iter().map(|id| id.to_string()).collect::<Vec<_>>().join(MULTI_VALUE_DELIMITER)
}

/// Empty scalars and empty selections are left out. Multi-valued fields are
/// joined in ascending id order, so equal states give identical requests.
pub fn normalize(state: &FilterState) -> EnrollmentRequest {
    let mut params = Vec::new();
    for field in FilterField::ALL {
        let value = match field {
            FilterField::Scalar(scalar) => state.scalar(scalar).trim().to_string(),
            FilterField::Multi(multi) => join_ids(state.multi(multi)),
        };
        if !value.is_empty() {
            params.push((field.wire_name().to_string(), value));
        }
    }
    EnrollmentRequest { params }
}
