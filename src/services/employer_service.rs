use std::sync::Arc;

use uuid::Uuid;

use crate::dto::profile_dto::{CreateEmployerPayload, UpdateEmployerPayload};
use crate::error::{Error, Result};
use crate::models::employer::{Employer, EmployerWithExtension, NewEmployer};
use crate::models::user::Role;
use crate::repositories::{EmployerRepository, FirmProfileRepository, UserRepository};
use crate::utils::patch::{patch_optional_string, patch_string, patch_value};

#[derive(Clone)]
pub struct EmployerService {
    users: Arc<dyn UserRepository>,
    employers: Arc<dyn EmployerRepository>,
    firm_profiles: Arc<dyn FirmProfileRepository>,
}

impl EmployerService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        employers: Arc<dyn EmployerRepository>,
        firm_profiles: Arc<dyn FirmProfileRepository>,
    ) -> Self {
        Self {
            users,
            employers,
            firm_profiles,
        }
    }

    pub async fn create_profile(
        &self,
        user_id: Uuid,
        payload: CreateEmployerPayload,
    ) -> Result<Employer> {
        let user = self
            .users
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| Error::not_found("user"))?;
        if user.role != Role::Employer {
            return Err(Error::Forbidden("user is not an employer".to_string()));
        }
        if self.employers.get_by_user_id(user_id).await?.is_some() {
            return Err(Error::Conflict("employer profile already exists".to_string()));
        }

        let profile = self
            .employers
            .create(NewEmployer {
                user_id,
                company_name: payload.company_name,
                employer_type: payload.employer_type,
                industry: payload.industry,
                primary_phone: payload.primary_phone,
                contact_person: payload.contact_person,
                contact_person_designation: payload.contact_person_designation,
                city: payload.city,
                state: payload.state,
                pin_code: payload.pin_code,
                website_url: payload.website_url,
                logo_url: payload.logo_url.filter(|url| !url.trim().is_empty()),
            })
            .await?;
        tracing::info!(%user_id, employer_id = %profile.id, "employer profile created");
        Ok(profile)
    }

    pub async fn get_profile(&self, user_id: Uuid) -> Result<Employer> {
        self.employers
            .get_by_user_id(user_id)
            .await?
            .ok_or_else(|| Error::not_found("employer profile"))
    }

    pub async fn get_profile_with_extension(&self, user_id: Uuid) -> Result<EmployerWithExtension> {
        let profile = self.get_profile(user_id).await?;
        let firm_profile = self.firm_profiles.get_by_employer_id(profile.id).await?;
        Ok(EmployerWithExtension {
            profile,
            firm_profile,
        })
    }

    pub async fn update_profile(
        &self,
        user_id: Uuid,
        payload: UpdateEmployerPayload,
    ) -> Result<Employer> {
        let mut profile = self.get_profile(user_id).await?;

        patch_string(&mut profile.company_name, payload.company_name);
        patch_value(&mut profile.employer_type, payload.employer_type);
        patch_string(&mut profile.industry, payload.industry);
        patch_string(&mut profile.primary_phone, payload.primary_phone);
        patch_string(&mut profile.contact_person, payload.contact_person);
        patch_string(
            &mut profile.contact_person_designation,
            payload.contact_person_designation,
        );
        patch_string(&mut profile.city, payload.city);
        patch_string(&mut profile.state, payload.state);
        patch_string(&mut profile.pin_code, payload.pin_code);
        patch_string(&mut profile.website_url, payload.website_url);
        patch_optional_string(&mut profile.logo_url, payload.logo_url);
        patch_value(&mut profile.is_hiring, payload.is_hiring);

        self.employers.update(&profile).await
    }
}
