use std::collections::BTreeSet;

use common::{
    filter_field::{MultiField, OptionId},
    option_set::{OptionRecord, OptionSet, Program},
    query_normalizer::join_ids,
};

use crate::api_utils::university_client::UniversityClient;

/// Programs belonging to any of `faculty_ids`. No request is made for an empty set.
pub async fn list_programs(client: &UniversityClient, faculty_ids: &BTreeSet<OptionId>) -> anyhow::Result<OptionSet> {
    if faculty_ids.is_empty() {
        return Ok(OptionSet::default());
    }
    let query = [(MultiField::Faculties.wire_name().to_string(), join_ids(faculty_ids))];
    let programs = client.get_json::<Vec<Program>>("programs/", &query).await?;
    Ok(programs.into_iter().map(OptionRecord::from).collect())
}
