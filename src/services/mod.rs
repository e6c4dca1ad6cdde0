pub mod application_service;
pub mod auth_service;
pub mod employer_service;
pub mod file_service;
pub mod firm_profile_service;
pub mod job_seeker_service;
pub mod job_service;
pub mod storage_service;
pub mod student_profile_service;

#[cfg(test)]
pub mod test_support;
