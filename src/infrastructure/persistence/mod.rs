mod memory_job_repository;

pub use memory_job_repository::InMemoryJobRepository;
