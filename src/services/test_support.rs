use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::{
    application::{Application, ApplicationStatus},
    employer::{Employer, EmployerType},
    job::{EmploymentMode, Job, JobType, TargetAudience},
    job_seeker::{JobSeeker, JobSeekerType},
    string_list::StringList,
    user::{Role, User},
};

pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn user(role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        email: "someone@example.com".into(),
        password_hash: String::new(),
        role,
        is_verified: false,
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

pub fn job_seeker(kind: JobSeekerType) -> JobSeeker {
    JobSeeker {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        full_name: "Asha Rao".into(),
        job_seeker_type: kind,
        current_city: "Pune".into(),
        phone: "9800000000".into(),
        desired_field: "Architecture".into(),
        resume_url: "http://localhost:8080/uploads/resume/cv.pdf".into(),
        portfolio_url: None,
        skills: StringList::from(vec!["revit".to_string()]),
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

pub fn employer(kind: EmployerType) -> Employer {
    Employer {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        company_name: "Studio North".into(),
        employer_type: kind,
        industry: "Architecture".into(),
        primary_phone: "9811111111".into(),
        contact_person: "Meera".into(),
        contact_person_designation: "Partner".into(),
        city: "Pune".into(),
        state: "Maharashtra".into(),
        pin_code: "411001".into(),
        website_url: "https://studionorth.example".into(),
        logo_url: None,
        is_hiring: false,
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

pub fn job(employer_id: Uuid) -> Job {
    Job {
        id: Uuid::new_v4(),
        employer_id,
        title: "Design Intern".into(),
        job_type: JobType::Internship,
        industry: "Architecture".into(),
        target_audience: TargetAudience::Students,
        employment_mode: EmploymentMode::OnSite,
        start_month: "July".into(),
        duration: "3 months".into(),
        application_deadline: fixed_now() + Duration::days(7),
        compensation_range: "10k-15k".into(),
        is_paid: true,
        city: "Pune".into(),
        state: "Maharashtra".into(),
        required_skills: StringList::from(vec!["autocad".to_string()]),
        min_experience: String::new(),
        portfolio_required: false,
        resume_required: false,
        description: "Drafting support".into(),
        about_team: String::new(),
        contact_email: "jobs@studionorth.example".into(),
        is_active: true,
        created_at: fixed_now(),
        updated_at: fixed_now(),
        employer: None,
    }
}

pub fn application(job_id: Uuid, job_seeker_id: Uuid, status: ApplicationStatus) -> Application {
    Application {
        id: Uuid::new_v4(),
        job_id,
        job_seeker_id,
        status,
        applied_at: fixed_now(),
        updated_at: fixed_now(),
        job: None,
        job_seeker: None,
    }
}
