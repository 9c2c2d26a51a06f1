pub mod enums;
pub mod job;
