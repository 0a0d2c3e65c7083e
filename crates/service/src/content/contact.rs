//! Contact form submissions. Hard-deleted, never hidden.

use models::{contact, errors::ModelError, validate};
use sea_orm::{prelude::DateTimeWithTimeZone, ActiveModelTrait, IntoActiveModel, NotSet, Set};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use super::{record, ContentResource, ContentService, DeletePolicy};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    pub interest: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub interest: Option<String>,
}

fn check_name(v: &str) -> Result<(), ModelError> { validate::short_text("name", v, 255) }
fn check_interest(v: &str) -> Result<(), ModelError> { validate::short_text("interest", v, 128) }

fn check_email(v: &str) -> Result<(), ModelError> {
    validate::max_len("email", v, 255)?;
    validate::email(v)
}

/// Blank optional text is stored as NULL.
fn optional(field: &str, value: Option<String>, max: usize) -> Result<Option<String>, ModelError> {
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(v) => {
            validate::max_len(field, &v, max)?;
            Ok(Some(v))
        }
        None => Ok(None),
    }
}

pub struct Contacts;

impl ContentResource for Contacts {
    type Entity = contact::Entity;
    type Model = contact::Model;
    type ActiveModel = contact::ActiveModel;
    type Create = ContactInput;
    type Update = ContactPatch;

    const NAME: &'static str = "Contact";
    const KEY: &'static str = "contact";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Hard;

    fn id_column() -> contact::Column { contact::Column::Id }

    fn visibility_column() -> Option<contact::Column> { None }

    fn updated_at_column() -> Option<contact::Column> { None }

    fn model_id(model: &contact::Model) -> i32 { model.id }

    fn new_active_model(input: ContactInput, now: DateTimeWithTimeZone) -> Result<contact::ActiveModel, ModelError> {
        check_name(&input.name)?;
        check_email(&input.email)?;
        validate::required("message", &input.message)?;
        check_interest(&input.interest)?;
        Ok(contact::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            email: Set(input.email.trim().to_string()),
            company: Set(optional("company", input.company, 255)?),
            phone: Set(optional("phone", input.phone, 64)?),
            message: Set(input.message),
            interest: Set(input.interest),
            is_processed: Set(false),
            created_at: Set(now),
        })
    }

    fn apply_update(active: &mut contact::ActiveModel, input: ContactPatch, _now: DateTimeWithTimeZone) -> Result<(), ModelError> {
        if let Some(name) = input.name {
            check_name(&name)?;
            active.name = Set(name);
        }
        if let Some(email) = input.email {
            check_email(&email)?;
            active.email = Set(email.trim().to_string());
        }
        if input.company.is_some() {
            active.company = Set(optional("company", input.company, 255)?);
        }
        if input.phone.is_some() {
            active.phone = Set(optional("phone", input.phone, 64)?);
        }
        if let Some(message) = input.message {
            validate::required("message", &message)?;
            active.message = Set(message);
        }
        if let Some(interest) = input.interest {
            check_interest(&interest)?;
            active.interest = Set(interest);
        }
        Ok(())
    }

    fn sample_data() -> serde_json::Value {
        json!([
            {
                "id": 1,
                "name": "Jane Chen",
                "email": "jane.chen@example.com",
                "company": "Example Corp",
                "phone": "+1 415 555 0100",
                "message": "We would like a demo of Avocado AI Sentinel for our SOC team.",
                "interest": "AI Security Platform",
                "is_processed": false
            }
        ])
    }
}

impl ContentService<Contacts> {
    /// Flag a submission as handled and return it.
    #[instrument(skip(self))]
    pub async fn mark_processed(&self, id: i32) -> Result<contact::Model, ServiceError> {
        let res = self.process(id).await;
        record(Contacts::KEY, "mark_processed", &res);
        if res.is_ok() {
            info!(id, "contact marked as processed");
        }
        res
    }

    async fn process(&self, id: i32) -> Result<contact::Model, ServiceError> {
        let mut active = self.find_any(id).await?.into_active_model();
        active.is_processed = Set(true);
        Ok(active.update(self.db()).await?)
    }
}
