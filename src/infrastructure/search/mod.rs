pub mod dto;
pub mod factory;
pub mod job_repository;
pub mod job_store;
pub mod memory;
pub mod splunk;

pub use factory::build_job_store;
pub use job_repository::JobRepository;
