//! Products: the portal's commercial offerings.

use models::{errors::ModelError, product, validate};
use sea_orm::{prelude::DateTimeWithTimeZone, NotSet, Set};
use serde::Deserialize;
use serde_json::json;

use super::{ContentResource, DeletePolicy};

#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub category: String,
    pub description: String,
    pub features: Vec<String>,
    pub price: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub price: Option<String>,
}

fn check_name(v: &str) -> Result<(), ModelError> { validate::short_text("name", v, 255) }
fn check_category(v: &str) -> Result<(), ModelError> { validate::short_text("category", v, 128) }
fn check_price(v: &str) -> Result<(), ModelError> { validate::short_text("price", v, 128) }

pub struct Products;

impl ContentResource for Products {
    type Entity = product::Entity;
    type Model = product::Model;
    type ActiveModel = product::ActiveModel;
    type Create = ProductInput;
    type Update = ProductPatch;

    const NAME: &'static str = "Product";
    const KEY: &'static str = "products";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Soft;

    fn id_column() -> product::Column { product::Column::Id }

    fn visibility_column() -> Option<product::Column> { Some(product::Column::IsActive) }

    fn model_id(model: &product::Model) -> i32 { model.id }

    fn new_active_model(input: ProductInput, now: DateTimeWithTimeZone) -> Result<product::ActiveModel, ModelError> {
        check_name(&input.name)?;
        check_category(&input.category)?;
        validate::required("description", &input.description)?;
        check_price(&input.price)?;
        Ok(product::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            category: Set(input.category),
            description: Set(input.description),
            features: Set(validate::string_list(input.features)),
            price: Set(input.price),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }

    fn apply_update(active: &mut product::ActiveModel, input: ProductPatch, now: DateTimeWithTimeZone) -> Result<(), ModelError> {
        if let Some(name) = input.name {
            check_name(&name)?;
            active.name = Set(name);
        }
        if let Some(category) = input.category {
            check_category(&category)?;
            active.category = Set(category);
        }
        if let Some(description) = input.description {
            validate::required("description", &description)?;
            active.description = Set(description);
        }
        if let Some(features) = input.features {
            active.features = Set(validate::string_list(features));
        }
        if let Some(price) = input.price {
            check_price(&price)?;
            active.price = Set(price);
        }
        active.updated_at = Set(now);
        Ok(())
    }

    fn updated_at_column() -> Option<product::Column> { Some(product::Column::UpdatedAt) }

    fn sample_data() -> serde_json::Value {
        json!([
            {
                "id": 1,
                "name": "Avocado Shield",
                "category": "Endpoint Protection",
                "description": "Advanced endpoint security that protects devices from sophisticated threats using AI-powered detection.",
                "features": ["Real-time threat detection", "Behavioral analysis", "Automated response", "Cloud-based management"],
                "price": "Starting at $25/user/month",
                "is_active": true
            },
            {
                "id": 2,
                "name": "Avocado AI Sentinel",
                "category": "AI Security Platform",
                "description": "Comprehensive AI-powered security platform that learns and adapts to new threats automatically.",
                "features": ["Machine learning algorithms", "Predictive analytics", "Threat intelligence", "Automated incident response"],
                "price": "Starting at $50/user/month",
                "is_active": true
            },
            {
                "id": 3,
                "name": "Avocado Response",
                "category": "Incident Response",
                "description": "Rapid incident response and recovery solution with automated workflows and AI assistance.",
                "features": ["Automated workflows", "AI-powered analysis", "Real-time alerts", "Recovery automation"],
                "price": "Starting at $100/incident",
                "is_active": true
            }
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_entries_are_dropped_from_features() {
        let input = ProductInput {
            name: "Shield".into(),
            category: "Endpoint".into(),
            description: "d".into(),
            features: vec![" a ".into(), "".into()],
            price: "$1".into(),
        };
        let am = Products::new_active_model(input, chrono::Utc::now().into()).expect("valid");
        assert_eq!(am.features, Set(vec!["a"].into()));
        assert_eq!(am.is_active, Set(true));
    }

    #[test]
    fn overlong_category_is_rejected() {
        let input = ProductInput {
            name: "Shield".into(),
            category: "x".repeat(129),
            description: "d".into(),
            features: vec![],
            price: "$1".into(),
        };
        assert!(Products::new_active_model(input, chrono::Utc::now().into()).is_err());
    }

    #[test]
    fn sample_is_an_array_of_three() {
        let sample = Products::sample_data();
        assert_eq!(sample.as_array().map(Vec::len), Some(3));
        assert!(sample[0]["features"].is_array());
    }
}
