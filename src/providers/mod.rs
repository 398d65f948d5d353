pub mod github;
pub mod s3;
pub mod s3_client;
