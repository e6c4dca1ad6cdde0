use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::employer_repository::EMPLOYER_COLUMNS;
use super::JobRepository;
use crate::error::{Error, Result};
use crate::models::employer::Employer;
use crate::models::job::{Job, JobFilter, NewJob};

const JOB_COLUMN_NAMES: &[&str] = &[
    "id",
    "employer_id",
    "title",
    "job_type",
    "industry",
    "target_audience",
    "employment_mode",
    "start_month",
    "duration",
    "application_deadline",
    "compensation_range",
    "is_paid",
    "city",
    "state",
    "required_skills",
    "min_experience",
    "portfolio_required",
    "resume_required",
    "description",
    "about_team",
    "contact_email",
    "is_active",
    "created_at",
    "updated_at",
];

pub(crate) const JOB_COLUMNS: &str = "id, employer_id, title, job_type, industry, target_audience, employment_mode, start_month, duration, application_deadline, compensation_range, is_paid, city, state, required_skills, min_experience, portfolio_required, resume_required, description, about_team, contact_email, is_active, created_at, updated_at";

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Escapes LIKE metacharacters so user input only ever matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn sort_clause(filter: &JobFilter) -> Result<Option<(String, &'static str)>> {
    let (Some(column), Some(direction)) = (
        non_blank(&filter.order_by),
        non_blank(&filter.order_direction),
    ) else {
        return Ok(None);
    };

    let column = column.to_ascii_lowercase();
    if !JOB_COLUMN_NAMES.contains(&column.as_str()) {
        return Err(Error::Validation(format!("cannot sort jobs by '{}'", column)));
    }

    let direction = match direction.to_ascii_lowercase().as_str() {
        "asc" => "ASC",
        "desc" => "DESC",
        other => {
            return Err(Error::Validation(format!(
                "invalid sort direction '{}', expected asc or desc",
                other
            )))
        }
    };

    Ok(Some((column, direction)))
}

/// Compiles a [`JobFilter`] into a parameterised `SELECT` over `jobs`.
///
/// Absent predicates contribute nothing. Without both sort parts the result is
/// ordered newest first; a non-positive limit leaves the result unbounded.
pub fn compile_job_query(filter: &JobFilter) -> Result<QueryBuilder<'static, Postgres>> {
    let sort = sort_clause(filter)?;

    let mut qb = QueryBuilder::new(format!("SELECT {JOB_COLUMNS} FROM jobs WHERE 1=1"));

    if filter.matches_nothing {
        qb.push(" AND FALSE");
    }

    if let Some(employer_id) = filter.employer_id {
        qb.push(" AND employer_id = ").push_bind(employer_id);
    }
    if let Some(industry) = non_blank(&filter.industry) {
        qb.push(" AND industry = ").push_bind(industry.to_string());
    }
    if let Some(job_type) = filter.job_type {
        qb.push(" AND job_type = ").push_bind(job_type);
    }
    if let Some(city) = non_blank(&filter.city) {
        qb.push(" AND city ILIKE ")
            .push_bind(format!("%{}%", escape_like(city)))
            .push(" ESCAPE '\\'");
    }
    if let Some(audience) = filter.target_audience {
        qb.push(" AND (target_audience = ")
            .push_bind(audience)
            .push(" OR target_audience = 'any')");
    }
    if let Some(mode) = filter.employment_mode {
        qb.push(" AND employment_mode = ").push_bind(mode);
    }
    if let Some(is_paid) = filter.is_paid {
        qb.push(" AND is_paid = ").push_bind(is_paid);
    }
    if let Some(is_active) = filter.is_active {
        qb.push(" AND is_active = ").push_bind(is_active);
    }

    match sort {
        Some((column, direction)) => {
            qb.push(format!(" ORDER BY {} {}", column, direction));
        }
        None => {
            qb.push(" ORDER BY created_at DESC");
        }
    }

    if let Some(limit) = filter.limit.filter(|limit| *limit > 0) {
        qb.push(" LIMIT ").push_bind(limit);
    }

    Ok(qb)
}

/// Attaches each job's owning employer with a single `ANY($1)` lookup.
pub(crate) async fn attach_employers(pool: &PgPool, jobs: &mut [Job]) -> Result<()> {
    if jobs.is_empty() {
        return Ok(());
    }

    let mut ids: Vec<Uuid> = jobs.iter().map(|job| job.employer_id).collect();
    ids.sort_unstable();
    ids.dedup();

    let employers = sqlx::query_as::<_, Employer>(&format!(
        "SELECT {EMPLOYER_COLUMNS} FROM employers WHERE id = ANY($1)"
    ))
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let by_id: HashMap<Uuid, Employer> = employers.into_iter().map(|e| (e.id, e)).collect();
    for job in jobs.iter_mut() {
        job.employer = by_id.get(&job.employer_id).cloned();
    }
    Ok(())
}

#[derive(Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn create(&self, job: NewJob) -> Result<Job> {
        let created = sqlx::query_as::<_, Job>(&format!(
            r#"
            INSERT INTO jobs (
                employer_id, title, job_type, industry, target_audience,
                employment_mode, start_month, duration, application_deadline,
                compensation_range, is_paid, city, state, required_skills,
                min_experience, portfolio_required, resume_required, description,
                about_team, contact_email
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, $18, $19, $20
            )
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(job.employer_id)
        .bind(&job.title)
        .bind(job.job_type)
        .bind(&job.industry)
        .bind(job.target_audience)
        .bind(job.employment_mode)
        .bind(&job.start_month)
        .bind(&job.duration)
        .bind(job.application_deadline)
        .bind(&job.compensation_range)
        .bind(job.is_paid)
        .bind(&job.city)
        .bind(&job.state)
        .bind(&job.required_skills)
        .bind(&job.min_experience)
        .bind(job.portfolio_required)
        .bind(job.resume_required)
        .bind(&job.description)
        .bind(&job.about_team)
        .bind(&job.contact_email)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Job>> {
        let job = sqlx::query_as::<_, Job>(&format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match job {
            Some(job) => {
                let mut jobs = [job];
                attach_employers(&self.pool, &mut jobs).await?;
                let [job] = jobs;
                Ok(Some(job))
            }
            None => Ok(None),
        }
    }

    async fn list_by_employer(&self, employer_id: Uuid) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE employer_id = $1 ORDER BY created_at DESC"
        ))
        .bind(employer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }

    async fn list(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let mut qb = compile_job_query(filter)?;
        let mut jobs = qb.build_query_as::<Job>().fetch_all(&self.pool).await?;
        attach_employers(&self.pool, &mut jobs).await?;
        Ok(jobs)
    }

    async fn update(&self, job: &Job) -> Result<Job> {
        let updated = sqlx::query_as::<_, Job>(&format!(
            r#"
            UPDATE jobs
            SET
                title = $2,
                job_type = $3,
                industry = $4,
                target_audience = $5,
                employment_mode = $6,
                start_month = $7,
                duration = $8,
                application_deadline = $9,
                compensation_range = $10,
                is_paid = $11,
                city = $12,
                state = $13,
                required_skills = $14,
                min_experience = $15,
                portfolio_required = $16,
                resume_required = $17,
                description = $18,
                about_team = $19,
                contact_email = $20,
                is_active = $21,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(job.id)
        .bind(&job.title)
        .bind(job.job_type)
        .bind(&job.industry)
        .bind(job.target_audience)
        .bind(job.employment_mode)
        .bind(&job.start_month)
        .bind(&job.duration)
        .bind(job.application_deadline)
        .bind(&job.compensation_range)
        .bind(job.is_paid)
        .bind(&job.city)
        .bind(&job.state)
        .bind(&job.required_skills)
        .bind(&job.min_experience)
        .bind(job.portfolio_required)
        .bind(job.resume_required)
        .bind(&job.description)
        .bind(&job.about_team)
        .bind(&job.contact_email)
        .bind(job.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found("job"));
        }
        Ok(())
    }

    async fn count_by_employer(&self, employer_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE employer_id = $1")
            .bind(employer_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn distinct_industries(&self) -> Result<Vec<String>> {
        let industries: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT industry FROM jobs WHERE is_active = TRUE AND industry <> '' ORDER BY industry",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(industries)
    }

    async fn distinct_cities(&self) -> Result<Vec<String>> {
        let cities: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT city FROM jobs WHERE is_active = TRUE AND city <> '' ORDER BY city",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(cities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{JobType, TargetAudience};

    fn sql(filter: &JobFilter) -> String {
        compile_job_query(filter).unwrap().sql().to_string()
    }

    #[test]
    fn empty_filter_orders_newest_first_without_limit() {
        let sql = sql(&JobFilter::default());
        assert!(sql.ends_with("WHERE 1=1 ORDER BY created_at DESC"));
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn audience_filter_also_matches_any() {
        let sql = sql(&JobFilter {
            target_audience: Some(TargetAudience::Students),
            ..Default::default()
        });
        assert!(sql.contains("AND (target_audience = $1 OR target_audience = 'any')"));
    }

    #[test]
    fn city_uses_case_insensitive_substring() {
        let sql = sql(&JobFilter {
            city: Some("Pune".into()),
            ..Default::default()
        });
        assert!(sql.contains("AND city ILIKE $1 ESCAPE '\\'"));
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("Mumbai"), "Mumbai");
    }

    #[test]
    fn blank_strings_add_no_predicate() {
        let sql = sql(&JobFilter {
            industry: Some("   ".into()),
            city: Some(String::new()),
            ..Default::default()
        });
        assert!(!sql.contains("industry ="));
        assert!(!sql.contains("ILIKE"));
    }

    #[test]
    fn predicates_bind_in_composition_order() {
        let sql = sql(&JobFilter {
            employer_id: Some(Uuid::nil()),
            job_type: Some(JobType::Internship),
            is_paid: Some(true),
            is_active: Some(false),
            ..Default::default()
        });
        assert!(sql.contains("AND employer_id = $1"));
        assert!(sql.contains("AND job_type = $2"));
        assert!(sql.contains("AND is_paid = $3"));
        assert!(sql.contains("AND is_active = $4"));
    }

    #[test]
    fn unmatchable_filter_compiles_to_an_empty_selection() {
        let sql = sql(&JobFilter {
            matches_nothing: true,
            city: Some("Pune".into()),
            ..Default::default()
        });
        assert!(sql.contains("WHERE 1=1 AND FALSE AND city ILIKE $1"));
    }

    #[test]
    fn positive_limit_is_applied_after_ordering() {
        let bounded = sql(&JobFilter {
            limit: Some(5),
            ..Default::default()
        });
        assert!(bounded.ends_with("ORDER BY created_at DESC LIMIT $1"));

        let unbounded = sql(&JobFilter {
            limit: Some(0),
            ..Default::default()
        });
        assert!(!unbounded.contains("LIMIT"));
    }

    #[test]
    fn explicit_sort_is_honoured_case_insensitively() {
        let sql = sql(&JobFilter {
            order_by: Some("Application_Deadline".into()),
            order_direction: Some("asc".into()),
            ..Default::default()
        });
        assert!(sql.ends_with("ORDER BY application_deadline ASC"));
    }

    #[test]
    fn half_specified_sort_falls_back_to_default() {
        let sql = sql(&JobFilter {
            order_by: Some("title".into()),
            ..Default::default()
        });
        assert!(sql.ends_with("ORDER BY created_at DESC"));
    }

    #[test]
    fn unknown_sort_column_or_direction_is_rejected() {
        let bad_column = compile_job_query(&JobFilter {
            order_by: Some("title; DROP TABLE jobs".into()),
            order_direction: Some("desc".into()),
            ..Default::default()
        });
        assert!(matches!(bad_column, Err(Error::Validation(_))));

        let bad_direction = compile_job_query(&JobFilter {
            order_by: Some("title".into()),
            order_direction: Some("sideways".into()),
            ..Default::default()
        });
        assert!(matches!(bad_direction, Err(Error::Validation(_))));
    }
}
