//! Job openings on the careers page.

use models::{errors::ModelError, job, validate};
use sea_orm::{prelude::DateTimeWithTimeZone, ColumnTrait, EntityTrait, NotSet, QueryFilter, Set};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use super::{record, ContentResource, ContentService, DeletePolicy};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct JobInput {
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobPatch {
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

fn check_title(v: &str) -> Result<(), ModelError> { validate::short_text("title", v, 255) }
fn check_department(v: &str) -> Result<(), ModelError> { validate::short_text("department", v, 128) }
fn check_location(v: &str) -> Result<(), ModelError> { validate::short_text("location", v, 128) }
fn check_type(v: &str) -> Result<(), ModelError> { validate::short_text("type", v, 64) }
fn check_salary(v: &str) -> Result<(), ModelError> { validate::short_text("salary", v, 128) }

pub struct Jobs;

impl ContentResource for Jobs {
    type Entity = job::Entity;
    type Model = job::Model;
    type ActiveModel = job::ActiveModel;
    type Create = JobInput;
    type Update = JobPatch;

    const NAME: &'static str = "Job";
    const KEY: &'static str = "jobs";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Soft;

    fn id_column() -> job::Column { job::Column::Id }

    fn visibility_column() -> Option<job::Column> { Some(job::Column::IsActive) }

    fn model_id(model: &job::Model) -> i32 { model.id }

    fn new_active_model(input: JobInput, now: DateTimeWithTimeZone) -> Result<job::ActiveModel, ModelError> {
        check_title(&input.title)?;
        check_department(&input.department)?;
        check_location(&input.location)?;
        check_type(&input.job_type)?;
        check_salary(&input.salary)?;
        validate::required("description", &input.description)?;
        Ok(job::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            department: Set(input.department),
            location: Set(input.location),
            job_type: Set(input.job_type),
            salary: Set(input.salary),
            description: Set(input.description),
            requirements: Set(validate::string_list(input.requirements)),
            benefits: Set(validate::string_list(input.benefits)),
            tags: Set(validate::string_list(input.tags)),
            posted_date: Set(now),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }

    fn apply_update(active: &mut job::ActiveModel, input: JobPatch, now: DateTimeWithTimeZone) -> Result<(), ModelError> {
        if let Some(title) = input.title {
            check_title(&title)?;
            active.title = Set(title);
        }
        if let Some(department) = input.department {
            check_department(&department)?;
            active.department = Set(department);
        }
        if let Some(location) = input.location {
            check_location(&location)?;
            active.location = Set(location);
        }
        if let Some(job_type) = input.job_type {
            check_type(&job_type)?;
            active.job_type = Set(job_type);
        }
        if let Some(salary) = input.salary {
            check_salary(&salary)?;
            active.salary = Set(salary);
        }
        if let Some(description) = input.description {
            validate::required("description", &description)?;
            active.description = Set(description);
        }
        if let Some(requirements) = input.requirements {
            active.requirements = Set(validate::string_list(requirements));
        }
        if let Some(benefits) = input.benefits {
            active.benefits = Set(validate::string_list(benefits));
        }
        if let Some(tags) = input.tags {
            active.tags = Set(validate::string_list(tags));
        }
        active.updated_at = Set(now);
        Ok(())
    }

    fn updated_at_column() -> Option<job::Column> { Some(job::Column::UpdatedAt) }

    fn sample_data() -> serde_json::Value {
        json!([
            {
                "id": 1,
                "title": "Senior AI Security Engineer",
                "department": "Engineering",
                "location": "San Francisco, CA",
                "type": "Full-time",
                "salary": "$120,000 - $180,000",
                "description": "Join our team to develop cutting-edge AI-powered security solutions that protect organizations from sophisticated cyber threats.",
                "requirements": [
                    "5+ years experience in cybersecurity",
                    "Strong Python and machine learning skills",
                    "Experience with AI/ML frameworks",
                    "Knowledge of security protocols and standards"
                ],
                "benefits": [
                    "Competitive salary and equity",
                    "Health, dental, and vision insurance",
                    "Flexible work arrangements",
                    "Professional development opportunities"
                ],
                "tags": ["AI", "Security", "Engineering"],
                "is_active": true
            },
            {
                "id": 2,
                "title": "Cybersecurity Analyst",
                "department": "Security Operations",
                "location": "Remote",
                "type": "Full-time",
                "salary": "$80,000 - $120,000",
                "description": "Monitor and analyze security threats, investigate incidents, and help develop response strategies.",
                "requirements": [
                    "3+ years in security operations",
                    "Experience with SIEM tools",
                    "Knowledge of threat intelligence",
                    "Strong analytical skills"
                ],
                "benefits": [
                    "Remote work flexibility",
                    "Comprehensive benefits package",
                    "Training and certification support",
                    "Career growth opportunities"
                ],
                "tags": ["Security", "Remote"],
                "is_active": true
            },
            {
                "id": 3,
                "title": "Product Manager - Security Solutions",
                "department": "Product",
                "location": "New York, NY",
                "type": "Full-time",
                "salary": "$100,000 - $150,000",
                "description": "Lead product strategy and development for our security platform, working with engineering and sales teams.",
                "requirements": [
                    "5+ years product management experience",
                    "Background in cybersecurity or SaaS",
                    "Strong technical and business acumen",
                    "Excellent communication skills"
                ],
                "benefits": [
                    "Competitive compensation",
                    "Health and wellness benefits",
                    "Stock options",
                    "Professional development budget"
                ],
                "tags": ["Product", "Security"],
                "is_active": true
            }
        ])
    }
}

impl ContentService<Jobs> {
    /// Distinct tags across active jobs, sorted.
    #[instrument(skip(self))]
    pub async fn all_tags(&self) -> Result<Vec<String>, ServiceError> {
        let res = job::Entity::find()
            .filter(job::Column::IsActive.eq(true))
            .all(self.db())
            .await
            .map(|jobs| job::collect_tags(&jobs))
            .map_err(ServiceError::from);
        record(Jobs::KEY, "all_tags", &res);
        res
    }
}
