use std::sync::Arc;

use uuid::Uuid;

use crate::dto::extension_dto::{CreateStudentProfilePayload, UpdateStudentProfilePayload};
use crate::error::{Error, Result};
use crate::models::job_seeker::JobSeekerType;
use crate::models::string_list::StringList;
use crate::models::student_profile::{NewStudentProfile, StudentProfile};
use crate::repositories::{JobSeekerRepository, StudentProfileRepository};
use crate::utils::patch::{patch_list, patch_string, patch_value};

/// Manages the student extension of a job seeker profile, keyed by job seeker id.
#[derive(Clone)]
pub struct StudentProfileService {
    student_profiles: Arc<dyn StudentProfileRepository>,
    job_seekers: Arc<dyn JobSeekerRepository>,
}

impl StudentProfileService {
    pub fn new(
        student_profiles: Arc<dyn StudentProfileRepository>,
        job_seekers: Arc<dyn JobSeekerRepository>,
    ) -> Self {
        Self {
            student_profiles,
            job_seekers,
        }
    }

    pub async fn create_profile(
        &self,
        job_seeker_id: Uuid,
        payload: CreateStudentProfilePayload,
    ) -> Result<StudentProfile> {
        let job_seeker = self
            .job_seekers
            .get_by_id(job_seeker_id)
            .await?
            .ok_or_else(|| Error::not_found("job seeker profile"))?;
        if job_seeker.job_seeker_type != JobSeekerType::Student {
            return Err(Error::Validation(
                "student profile can only be created for student job seekers".to_string(),
            ));
        }
        if self
            .student_profiles
            .get_by_job_seeker_id(job_seeker_id)
            .await?
            .is_some()
        {
            return Err(Error::Conflict("student profile already exists".to_string()));
        }

        self.student_profiles
            .create(NewStudentProfile {
                job_seeker_id,
                college_name: payload.college_name,
                degree: payload.degree,
                year_semester: payload.year_semester,
                software_proficiency: StringList::from(payload.software_proficiency),
                previous_internships: StringList::from(payload.previous_internships),
                freelance_projects: StringList::from(payload.freelance_projects),
                preferred_start_month: payload.preferred_start_month,
                preferred_duration: payload.preferred_duration,
                willing_to_relocate: payload.willing_to_relocate,
            })
            .await
    }

    pub async fn get_profile(&self, job_seeker_id: Uuid) -> Result<StudentProfile> {
        self.student_profiles
            .get_by_job_seeker_id(job_seeker_id)
            .await?
            .ok_or_else(|| Error::not_found("student profile"))
    }

    pub async fn update_profile(
        &self,
        job_seeker_id: Uuid,
        payload: UpdateStudentProfilePayload,
    ) -> Result<StudentProfile> {
        let mut profile = self.get_profile(job_seeker_id).await?;

        patch_string(&mut profile.college_name, payload.college_name);
        patch_string(&mut profile.degree, payload.degree);
        patch_string(&mut profile.year_semester, payload.year_semester);
        patch_list(&mut profile.software_proficiency, payload.software_proficiency);
        patch_list(&mut profile.previous_internships, payload.previous_internships);
        patch_list(&mut profile.freelance_projects, payload.freelance_projects);
        patch_string(&mut profile.preferred_start_month, payload.preferred_start_month);
        patch_string(&mut profile.preferred_duration, payload.preferred_duration);
        patch_value(&mut profile.willing_to_relocate, payload.willing_to_relocate);

        self.student_profiles.update(&profile).await
    }

    pub async fn delete_profile(&self, job_seeker_id: Uuid) -> Result<()> {
        self.get_profile(job_seeker_id).await?;
        self.student_profiles
            .delete_by_job_seeker_id(job_seeker_id)
            .await
    }
}
