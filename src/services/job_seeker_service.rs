use std::sync::Arc;

use uuid::Uuid;

use crate::dto::profile_dto::{CreateJobSeekerPayload, UpdateJobSeekerPayload};
use crate::error::{Error, Result};
use crate::models::job_seeker::{JobSeeker, JobSeekerWithExtension, NewJobSeeker};
use crate::models::string_list::StringList;
use crate::models::user::Role;
use crate::repositories::{JobSeekerRepository, StudentProfileRepository, UserRepository};
use crate::services::file_service::DocumentKind;
use crate::utils::patch::{patch_list, patch_optional_string, patch_string, patch_value};

#[derive(Clone)]
pub struct JobSeekerService {
    users: Arc<dyn UserRepository>,
    job_seekers: Arc<dyn JobSeekerRepository>,
    student_profiles: Arc<dyn StudentProfileRepository>,
}

impl JobSeekerService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        job_seekers: Arc<dyn JobSeekerRepository>,
        student_profiles: Arc<dyn StudentProfileRepository>,
    ) -> Self {
        Self {
            users,
            job_seekers,
            student_profiles,
        }
    }

    pub async fn create_profile(
        &self,
        user_id: Uuid,
        payload: CreateJobSeekerPayload,
    ) -> Result<JobSeeker> {
        let user = self
            .users
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| Error::not_found("user"))?;
        if user.role != Role::JobSeeker {
            return Err(Error::Forbidden("user is not a job seeker".to_string()));
        }
        if self.job_seekers.get_by_user_id(user_id).await?.is_some() {
            return Err(Error::Conflict(
                "job seeker profile already exists".to_string(),
            ));
        }

        let profile = self
            .job_seekers
            .create(NewJobSeeker {
                user_id,
                full_name: payload.full_name,
                job_seeker_type: payload.job_seeker_type,
                current_city: payload.current_city,
                phone: payload.phone,
                desired_field: payload.desired_field,
                resume_url: payload.resume_url,
                portfolio_url: payload.portfolio_url.filter(|url| !url.trim().is_empty()),
                skills: StringList::from(payload.skills),
            })
            .await?;
        tracing::info!(%user_id, job_seeker_id = %profile.id, "job seeker profile created");
        Ok(profile)
    }

    pub async fn get_profile(&self, user_id: Uuid) -> Result<JobSeeker> {
        self.job_seekers
            .get_by_user_id(user_id)
            .await?
            .ok_or_else(|| Error::not_found("job seeker profile"))
    }

    pub async fn get_profile_with_extension(&self, user_id: Uuid) -> Result<JobSeekerWithExtension> {
        let profile = self.get_profile(user_id).await?;
        let student_profile = self
            .student_profiles
            .get_by_job_seeker_id(profile.id)
            .await?;
        Ok(JobSeekerWithExtension {
            profile,
            student_profile,
        })
    }

    pub async fn update_profile(
        &self,
        user_id: Uuid,
        payload: UpdateJobSeekerPayload,
    ) -> Result<JobSeeker> {
        let mut profile = self.get_profile(user_id).await?;

        patch_string(&mut profile.full_name, payload.full_name);
        patch_value(&mut profile.job_seeker_type, payload.job_seeker_type);
        patch_string(&mut profile.current_city, payload.current_city);
        patch_string(&mut profile.phone, payload.phone);
        patch_string(&mut profile.desired_field, payload.desired_field);
        patch_string(&mut profile.resume_url, payload.resume_url);
        patch_optional_string(&mut profile.portfolio_url, payload.portfolio_url);
        patch_list(&mut profile.skills, payload.skills);

        self.job_seekers.update(&profile).await
    }

    /// Points the profile at a freshly uploaded document.
    pub async fn attach_document(
        &self,
        user_id: Uuid,
        kind: DocumentKind,
        url: String,
    ) -> Result<JobSeeker> {
        let mut profile = self.get_profile(user_id).await?;
        match kind {
            DocumentKind::Resume => profile.resume_url = url,
            DocumentKind::Portfolio => profile.portfolio_url = Some(url),
        }
        self.job_seekers.update(&profile).await
    }
}
