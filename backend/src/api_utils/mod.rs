pub mod university_client;
