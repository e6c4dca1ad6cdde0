pub mod application_dto;
pub mod auth_dto;
pub mod extension_dto;
pub mod job_dto;
pub mod profile_dto;
pub mod response_dto;
