use common::option_set::{Faculty, OptionRecord, OptionSet};

use crate::api_utils::university_client::UniversityClient;

pub async fn list_faculties(client: &UniversityClient) -> anyhow::Result<OptionSet> {
    let faculties = client.get_json::<Vec<Faculty>>("faculties/", &[]).await?;
    Ok(faculties.into_iter().map(OptionRecord::from).collect())
}
