//! Case studies: customer stories published on the portal.

use models::{case_study, errors::ModelError, validate};
use sea_orm::{prelude::DateTimeWithTimeZone, NotSet, Set};
use serde::Deserialize;
use serde_json::json;

use super::{ContentResource, DeletePolicy};

#[derive(Debug, Clone, Deserialize)]
pub struct CaseStudyInput {
    pub title: String,
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseStudyPatch {
    pub title: Option<String>,
    pub industry: Option<String>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub results: Option<Vec<String>>,
}

fn check_title(v: &str) -> Result<(), ModelError> { validate::short_text("title", v, 255) }
fn check_industry(v: &str) -> Result<(), ModelError> { validate::short_text("industry", v, 128) }

pub struct CaseStudies;

impl ContentResource for CaseStudies {
    type Entity = case_study::Entity;
    type Model = case_study::Model;
    type ActiveModel = case_study::ActiveModel;
    type Create = CaseStudyInput;
    type Update = CaseStudyPatch;

    const NAME: &'static str = "Case study";
    const KEY: &'static str = "cases";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Soft;

    fn id_column() -> case_study::Column { case_study::Column::Id }

    fn visibility_column() -> Option<case_study::Column> { Some(case_study::Column::IsActive) }

    fn model_id(model: &case_study::Model) -> i32 { model.id }

    fn new_active_model(input: CaseStudyInput, now: DateTimeWithTimeZone) -> Result<case_study::ActiveModel, ModelError> {
        check_title(&input.title)?;
        check_industry(&input.industry)?;
        validate::required("challenge", &input.challenge)?;
        validate::required("solution", &input.solution)?;
        Ok(case_study::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            industry: Set(input.industry),
            challenge: Set(input.challenge),
            solution: Set(input.solution),
            results: Set(validate::string_list(input.results)),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }

    fn apply_update(active: &mut case_study::ActiveModel, input: CaseStudyPatch, now: DateTimeWithTimeZone) -> Result<(), ModelError> {
        if let Some(title) = input.title {
            check_title(&title)?;
            active.title = Set(title);
        }
        if let Some(industry) = input.industry {
            check_industry(&industry)?;
            active.industry = Set(industry);
        }
        if let Some(challenge) = input.challenge {
            validate::required("challenge", &challenge)?;
            active.challenge = Set(challenge);
        }
        if let Some(solution) = input.solution {
            validate::required("solution", &solution)?;
            active.solution = Set(solution);
        }
        if let Some(results) = input.results {
            active.results = Set(validate::string_list(results));
        }
        active.updated_at = Set(now);
        Ok(())
    }

    fn updated_at_column() -> Option<case_study::Column> { Some(case_study::Column::UpdatedAt) }

    fn sample_data() -> serde_json::Value {
        json!([
            {
                "id": 1,
                "title": "Fortune 500 Financial Institution",
                "industry": "Financial Services",
                "challenge": "Faced sophisticated cyber attacks targeting customer data and financial transactions.",
                "solution": "Implemented Avocado AI Sentinel with behavioral analytics and real-time threat detection.",
                "results": [
                    "99.9% threat detection rate",
                    "60% reduction in false positives",
                    "Real-time response to threats",
                    "Compliance with financial regulations"
                ],
                "is_active": true
            },
            {
                "id": 2,
                "title": "Global Healthcare Provider",
                "industry": "Healthcare",
                "challenge": "Needed to protect sensitive patient data while maintaining system accessibility for medical staff.",
                "solution": "Deployed Avocado Zero Trust framework with advanced access controls and monitoring.",
                "results": [
                    "Zero data breaches in 2 years",
                    "HIPAA compliance achieved",
                    "Improved system performance",
                    "Enhanced user experience"
                ],
                "is_active": true
            },
            {
                "id": 3,
                "title": "E-commerce Platform",
                "industry": "Retail",
                "challenge": "Experienced frequent DDoS attacks and payment fraud attempts.",
                "solution": "Integrated Avocado Monitor with AI-powered fraud detection and automated response.",
                "results": [
                    "95% reduction in fraud attempts",
                    "99.9% uptime maintained",
                    "Automated threat response",
                    "Improved customer trust"
                ],
                "is_active": true
            }
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{content::ContentService, pagination::Pagination, test_support::get_db};

    #[tokio::test]
    async fn results_survive_a_round_trip() -> anyhow::Result<()> {
        let svc = ContentService::<CaseStudies>::new(get_db().await?);
        let created = svc
            .create(CaseStudyInput {
                title: "Global Healthcare Provider".into(),
                industry: "Healthcare".into(),
                challenge: "Protect patient data".into(),
                solution: "Zero Trust".into(),
                results: vec!["HIPAA compliance achieved".into(), "Zero data breaches in 2 years".into()],
            })
            .await?;
        let listed = svc.list(Pagination::default()).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].results, created.results);
        assert_eq!(listed[0].results.len(), 2);
        Ok(())
    }

    #[test]
    fn blank_solution_is_rejected_on_patch() {
        let mut am = CaseStudies::new_active_model(
            CaseStudyInput {
                title: "t".into(),
                industry: "i".into(),
                challenge: "c".into(),
                solution: "s".into(),
                results: vec![],
            },
            chrono::Utc::now().into(),
        )
        .expect("valid");
        let patch = CaseStudyPatch { solution: Some(" ".into()), ..Default::default() };
        assert!(CaseStudies::apply_update(&mut am, patch, chrono::Utc::now().into()).is_err());
    }

    #[tokio::test]
    async fn delete_retires_the_case_study() -> anyhow::Result<()> {
        use sea_orm::EntityTrait;

        let svc = ContentService::<CaseStudies>::new(get_db().await?);
        let created = svc
            .create(CaseStudyInput {
                title: "Financial Institution".into(),
                industry: "Banking".into(),
                challenge: "Fraud".into(),
                solution: "Behavioral analytics".into(),
                results: vec!["90% fewer false positives".into()],
            })
            .await?;

        assert_eq!(svc.delete(created.id).await?.message, "Case study deleted successfully");
        assert!(matches!(svc.get(created.id).await, Err(crate::ServiceError::NotFound(_))));
        assert!(svc.list(Pagination::default()).await?.is_empty());

        let row = case_study::Entity::find_by_id(created.id).one(svc.db()).await?.expect("row kept");
        assert!(!row.is_active);
        assert!(row.updated_at >= created.updated_at);
        Ok(())
    }
}
