pub mod dynamodb;
pub mod log;
