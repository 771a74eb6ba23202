use common::{query_normalizer::EnrollmentRequest, student::StudentRecord};

use crate::api_utils::university_client::UniversityClient;

pub async fn search_students(client: &UniversityClient, request: &EnrollmentRequest) -> anyhow::Result<Vec<StudentRecord>> {
    tracing::info!("searching students: {}", request.query_string());
    client.get_json::<Vec<StudentRecord>>("students/", request.params()).await
}
