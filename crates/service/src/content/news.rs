//! News items; publication is controlled by `is_published`.

use models::{
    errors::ModelError,
    news::{self, PublishedDate},
    validate,
};
use sea_orm::{prelude::DateTimeWithTimeZone, NotSet, Set};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use super::{ContentResource, ContentService, DeletePolicy};
use crate::{errors::ServiceError, pagination::Pagination};

#[derive(Debug, Clone, Deserialize)]
pub struct NewsInput {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub published_date: Option<PublishedDate>,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub published_date: Option<PublishedDate>,
    pub is_published: Option<bool>,
    pub images: Option<Vec<String>>,
}

fn check_title(v: &str) -> Result<(), ModelError> { validate::short_text("title", v, 255) }
fn check_category(v: &str) -> Result<(), ModelError> { validate::short_text("category", v, 128) }

fn images(list: Vec<String>) -> models::StringList {
    news::cap_images(validate::string_list(list).into_inner())
}

pub struct NewsItems;

impl ContentResource for NewsItems {
    type Entity = news::Entity;
    type Model = news::Model;
    type ActiveModel = news::ActiveModel;
    type Create = NewsInput;
    type Update = NewsPatch;

    const NAME: &'static str = "News item";
    const KEY: &'static str = "news";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Soft;

    fn id_column() -> news::Column { news::Column::Id }

    fn visibility_column() -> Option<news::Column> { Some(news::Column::IsPublished) }

    fn model_id(model: &news::Model) -> i32 { model.id }

    fn new_active_model(input: NewsInput, now: DateTimeWithTimeZone) -> Result<news::ActiveModel, ModelError> {
        check_title(&input.title)?;
        check_category(&input.category)?;
        validate::required("content", &input.content)?;
        let published_date = match &input.published_date {
            Some(date) => date.resolve()?,
            None => now,
        };
        Ok(news::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            content: Set(input.content),
            category: Set(input.category),
            images: Set(images(input.images.unwrap_or_default())),
            published_date: Set(published_date),
            is_published: Set(input.is_published.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }

    fn apply_update(active: &mut news::ActiveModel, input: NewsPatch, now: DateTimeWithTimeZone) -> Result<(), ModelError> {
        if let Some(title) = input.title {
            check_title(&title)?;
            active.title = Set(title);
        }
        if let Some(content) = input.content {
            validate::required("content", &content)?;
            active.content = Set(content);
        }
        if let Some(category) = input.category {
            check_category(&category)?;
            active.category = Set(category);
        }
        if let Some(date) = input.published_date {
            active.published_date = Set(date.resolve()?);
        }
        if let Some(published) = input.is_published {
            active.is_published = Set(published);
        }
        if let Some(list) = input.images {
            active.images = Set(images(list));
        }
        active.updated_at = Set(now);
        Ok(())
    }

    fn updated_at_column() -> Option<news::Column> { Some(news::Column::UpdatedAt) }

    fn sample_data() -> serde_json::Value {
        let published = chrono::Utc::now().to_rfc3339();
        json!([
            {
                "id": 1,
                "title": "Avocado.ai Launches New AI-Powered Security Platform",
                "content": "Avocado.ai is proud to announce the launch of our latest AI-powered security platform, designed to provide comprehensive protection against evolving cyber threats.",
                "category": "Company News",
                "images": [],
                "published_date": published,
                "is_published": true
            },
            {
                "id": 2,
                "title": "Avocado.ai Recognized as Leader in Cybersecurity Innovation",
                "content": "Avocado.ai has been recognized as a leader in cybersecurity innovation by leading industry analysts, highlighting our commitment to advancing security technology.",
                "category": "Awards",
                "images": [],
                "published_date": published,
                "is_published": true
            },
            {
                "id": 3,
                "title": "New Partnership with Fortune 500 Companies",
                "content": "Avocado.ai has established new partnerships with several Fortune 500 companies, expanding our reach and impact in the cybersecurity industry.",
                "category": "Partnerships",
                "images": [],
                "published_date": published,
                "is_published": true
            }
        ])
    }
}

impl ContentService<NewsItems> {
    /// Admin view: published and unpublished items alike.
    #[instrument(skip(self))]
    pub async fn list_admin(&self, page: Pagination) -> Result<Vec<news::Model>, ServiceError> {
        self.list_all(page).await
    }
}
