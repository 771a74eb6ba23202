//! Client API calls for the enrollment endpoints.

use std::collections::BTreeSet;

use common::{
    errors::GENERIC_ERROR_MESSAGE,
    filter_field::OptionId,
    option_set::OptionSet,
    query_normalizer::EnrollmentRequest,
    student::{EnrollmentStats, StudentRecord},
};
use dioxus::prelude::*;


#[server]
pub async fn list_faculties() -> Result<OptionSet, ServerFnError> {
    let client = backend::api_utils::university_client::get_university_client();
    let x = backend::api::catalog::list_faculties(&client).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 502, details: None })
}

#[server]
pub async fn list_programs(faculty_ids: BTreeSet<OptionId>) -> Result<OptionSet, ServerFnError> {
    let client = backend::api_utils::university_client::get_university_client();
    let x = backend::api::catalog::list_programs(&client, &faculty_ids).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 502, details: None })
}

#[server]
pub async fn search_students(request: EnrollmentRequest) -> Result<Vec<StudentRecord>, ServerFnError> {
    let client = backend::api_utils::university_client::get_university_client();
    let x = backend::api::students::search_students(&client, &request).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 502, details: None })
}

#[server]
pub async fn enrollment_stats(date: String) -> Result<EnrollmentStats, ServerFnError> {
    let client = backend::api_utils::university_client::get_university_client();
    let x = backend::api::students::enrollment_stats(&client, &date).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 502, details: None })
}

/// Message to show for a failed call; transport failures get the generic text.
pub fn server_error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError { message, .. } if !message.trim().is_empty() => message.clone(),
        _ => GENERIC_ERROR_MESSAGE.to_string(),
    }
}
