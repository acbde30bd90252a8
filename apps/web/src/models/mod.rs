pub mod auth;
pub mod job;
pub mod rank;
pub mod resume;
