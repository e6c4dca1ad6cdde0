use std::sync::Arc;

use uuid::Uuid;

use crate::dto::extension_dto::{CreateFirmProfilePayload, UpdateFirmProfilePayload};
use crate::error::{Error, Result};
use crate::models::employer::EmployerType;
use crate::models::firm_profile::{FirmProfile, NewFirmProfile};
use crate::models::string_list::StringList;
use crate::repositories::{EmployerRepository, FirmProfileRepository};
use crate::utils::patch::{patch_list, patch_string};

/// Manages the firm extension of an employer profile, keyed by employer id.
#[derive(Clone)]
pub struct FirmProfileService {
    firm_profiles: Arc<dyn FirmProfileRepository>,
    employers: Arc<dyn EmployerRepository>,
}

impl FirmProfileService {
    pub fn new(
        firm_profiles: Arc<dyn FirmProfileRepository>,
        employers: Arc<dyn EmployerRepository>,
    ) -> Self {
        Self {
            firm_profiles,
            employers,
        }
    }

    pub async fn create_profile(
        &self,
        employer_id: Uuid,
        payload: CreateFirmProfilePayload,
    ) -> Result<FirmProfile> {
        let employer = self
            .employers
            .get_by_id(employer_id)
            .await?
            .ok_or_else(|| Error::not_found("employer profile"))?;
        if employer.employer_type != EmployerType::Firm {
            return Err(Error::Validation(
                "firm profile can only be created for firm employers".to_string(),
            ));
        }
        if self
            .firm_profiles
            .get_by_employer_id(employer_id)
            .await?
            .is_some()
        {
            return Err(Error::Conflict("firm profile already exists".to_string()));
        }

        self.firm_profiles
            .create(NewFirmProfile {
                employer_id,
                year_founded: payload.year_founded,
                firm_size: payload.firm_size,
                legal_entity_type: payload.legal_entity_type,
                primary_discipline: payload.primary_discipline,
                secondary_disciplines: StringList::from(payload.secondary_disciplines),
                instagram_url: payload.instagram_url,
                linkedin_url: payload.linkedin_url,
                preferred_duration: payload.preferred_duration,
                stipend_range: payload.stipend_range,
                project_images: StringList::from(payload.project_images),
            })
            .await
    }

    pub async fn get_profile(&self, employer_id: Uuid) -> Result<FirmProfile> {
        self.firm_profiles
            .get_by_employer_id(employer_id)
            .await?
            .ok_or_else(|| Error::not_found("firm profile"))
    }

    pub async fn update_profile(
        &self,
        employer_id: Uuid,
        payload: UpdateFirmProfilePayload,
    ) -> Result<FirmProfile> {
        let mut profile = self.get_profile(employer_id).await?;

        if payload.year_founded.is_some() {
            profile.year_founded = payload.year_founded;
        }
        patch_string(&mut profile.firm_size, payload.firm_size);
        patch_string(&mut profile.legal_entity_type, payload.legal_entity_type);
        patch_string(&mut profile.primary_discipline, payload.primary_discipline);
        patch_list(&mut profile.secondary_disciplines, payload.secondary_disciplines);
        patch_string(&mut profile.instagram_url, payload.instagram_url);
        patch_string(&mut profile.linkedin_url, payload.linkedin_url);
        patch_string(&mut profile.preferred_duration, payload.preferred_duration);
        patch_string(&mut profile.stipend_range, payload.stipend_range);
        patch_list(&mut profile.project_images, payload.project_images);

        self.firm_profiles.update(&profile).await
    }

    pub async fn delete_profile(&self, employer_id: Uuid) -> Result<()> {
        self.get_profile(employer_id).await?;
        self.firm_profiles.delete_by_employer_id(employer_id).await
    }
}
