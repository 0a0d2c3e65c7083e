//! Techniques: the technology pillars shown on the portal.

use models::{errors::ModelError, technique, validate};
use sea_orm::{prelude::DateTimeWithTimeZone, ActiveModelTrait, EntityTrait, NotSet, Set, TransactionTrait};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use super::{now, record, ContentResource, ContentService, DeletePolicy};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct TechniqueInput {
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    pub category: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TechniquePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub category: Option<String>,
}

/// Seed set restored by [`ContentService::reset_defaults`].
const DEFAULT_TECHNIQUES: [(&str, &str, &str, [&str; 4]); 6] = [
    (
        "Machine Learning",
        "Advanced ML algorithms that learn from patterns and adapt to new threats in real-time.",
        "AI/ML",
        ["Pattern Recognition", "Anomaly Detection", "Predictive Analytics", "Behavioral Analysis"],
    ),
    (
        "Threat Intelligence",
        "Comprehensive threat intelligence gathering and analysis from global sources.",
        "Security",
        ["Real-time Monitoring", "Threat Hunting", "Vulnerability Assessment", "Risk Analysis"],
    ),
    (
        "Automated Response",
        "Intelligent automation that responds to threats faster than human operators.",
        "Automation",
        ["Instant Blocking", "Incident Response", "Workflow Automation", "Alert Management"],
    ),
    (
        "Zero Trust Security",
        "Implementing zero trust principles across all network and application layers.",
        "Security",
        ["Identity Verification", "Access Control", "Network Segmentation", "Continuous Monitoring"],
    ),
    (
        "Behavioral Analytics",
        "Analyzing user and system behavior to detect suspicious activities.",
        "Analytics",
        ["User Behavior Analysis", "System Monitoring", "Risk Scoring", "Threat Correlation"],
    ),
    (
        "AI-Powered Detection",
        "Next-generation AI systems that detect and prevent advanced persistent threats.",
        "AI/ML",
        ["Deep Learning", "Neural Networks", "Natural Language Processing", "Computer Vision"],
    ),
];

pub fn default_inputs() -> Vec<TechniqueInput> {
    DEFAULT_TECHNIQUES
        .iter()
        .map(|(name, description, category, features)| TechniqueInput {
            name: (*name).into(),
            description: (*description).into(),
            features: features.iter().map(|f| (*f).to_string()).collect(),
            category: (*category).into(),
        })
        .collect()
}

fn check_name(v: &str) -> Result<(), ModelError> { validate::short_text("name", v, 255) }
fn check_category(v: &str) -> Result<(), ModelError> { validate::short_text("category", v, 128) }

pub struct Techniques;

impl ContentResource for Techniques {
    type Entity = technique::Entity;
    type Model = technique::Model;
    type ActiveModel = technique::ActiveModel;
    type Create = TechniqueInput;
    type Update = TechniquePatch;

    const NAME: &'static str = "Technique";
    const KEY: &'static str = "techniques";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Soft;

    fn id_column() -> technique::Column { technique::Column::Id }

    fn visibility_column() -> Option<technique::Column> { Some(technique::Column::IsActive) }

    fn model_id(model: &technique::Model) -> i32 { model.id }

    fn new_active_model(input: TechniqueInput, now: DateTimeWithTimeZone) -> Result<technique::ActiveModel, ModelError> {
        check_name(&input.name)?;
        check_category(&input.category)?;
        validate::required("description", &input.description)?;
        Ok(technique::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            features: Set(validate::string_list(input.features)),
            category: Set(input.category),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }

    fn apply_update(active: &mut technique::ActiveModel, input: TechniquePatch, now: DateTimeWithTimeZone) -> Result<(), ModelError> {
        if let Some(name) = input.name {
            check_name(&name)?;
            active.name = Set(name);
        }
        if let Some(description) = input.description {
            validate::required("description", &description)?;
            active.description = Set(description);
        }
        if let Some(features) = input.features {
            active.features = Set(validate::string_list(features));
        }
        if let Some(category) = input.category {
            check_category(&category)?;
            active.category = Set(category);
        }
        active.updated_at = Set(now);
        Ok(())
    }

    fn updated_at_column() -> Option<technique::Column> { Some(technique::Column::UpdatedAt) }

    fn sample_data() -> serde_json::Value {
        let items: Vec<serde_json::Value> = DEFAULT_TECHNIQUES
            .iter()
            .enumerate()
            .map(|(i, (name, description, category, features))| {
                json!({
                    "id": i + 1,
                    "name": name,
                    "description": description,
                    "features": features,
                    "category": category,
                    "is_active": true
                })
            })
            .collect();
        serde_json::Value::Array(items)
    }
}

impl ContentService<Techniques> {
    /// Replace every technique with the default set, atomically.
    #[instrument(skip(self))]
    pub async fn reset_defaults(&self) -> Result<Vec<technique::Model>, ServiceError> {
        let res = self.reseed().await;
        record(Techniques::KEY, "reset_defaults", &res);
        if let Ok(rows) = &res {
            info!(count = rows.len(), "techniques reset to defaults");
        }
        res
    }

    async fn reseed(&self) -> Result<Vec<technique::Model>, ServiceError> {
        let stamp = now();
        let rows = default_inputs()
            .into_iter()
            .map(|input| Techniques::new_active_model(input, stamp))
            .collect::<Result<Vec<_>, _>>()?;

        let txn = self.db().begin().await?;
        technique::Entity::delete_many().exec(&txn).await?;
        let mut inserted = Vec::with_capacity(rows.len());
        for row in rows {
            inserted.push(row.insert(&txn).await?);
        }
        txn.commit().await?;
        Ok(inserted)
    }
}
