pub mod schema;
pub mod person_repo;
pub mod group_repo;
pub mod storage;
