use common::student::EnrollmentStats;

use crate::api_utils::university_client::UniversityClient;

/// Students enrolled on `date` (`YYYY-MM-DD`). The server rejects other formats.
pub async fn enrollment_stats(client: &UniversityClient, date: &str) -> anyhow::Result<EnrollmentStats> {
    let query = [("date".to_string(), date.trim().to_string())];
    client.get_json::<EnrollmentStats>("enrollment-stats/", &query).await
}
