//! Generic CRUD over the portal's content tables.
//!
//! Every table follows the same lifecycle: a typed payload is validated and
//! turned into an `ActiveModel`, stored, listed through a visibility flag and
//! finally retired. [`ContentResource`] describes one table;
//! [`ContentService`] runs the lifecycle for any of them.

pub mod case_study;
pub mod contact;
pub mod job;
pub mod news;
pub mod product;
pub mod technique;

use std::marker::PhantomData;

use chrono::Utc;
use common::types::Message;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection,
    EntityTrait, FromQueryResult, IntoActiveModel, ModelTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, info, instrument};

use crate::{errors::ServiceError, pagination::Pagination};
use models::errors::ModelError;

pub use case_study::CaseStudies;
pub use contact::Contacts;
pub use job::Jobs;
pub use news::NewsItems;
pub use product::Products;
pub use technique::Techniques;

/// What `delete` does to a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Clear the visibility flag and keep the row.
    Soft,
    /// Remove the row.
    Hard,
}

/// Descriptor of one content table.
///
/// Implementors are zero-sized markers; all behaviour is associated.
pub trait ContentResource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model, ActiveModel = Self::ActiveModel>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Serialize
        + Clone
        + Send
        + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync;
    /// Creation payload.
    type Create: DeserializeOwned + Send + 'static;
    /// Sparse update payload; absent fields are left untouched.
    type Update: DeserializeOwned + Send + 'static;

    /// Display name used in messages, e.g. `Product`.
    const NAME: &'static str;
    /// Metric and log label, e.g. `products`.
    const KEY: &'static str;
    const DELETE_POLICY: DeletePolicy;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    /// Flag that must be `true` for public reads; `None` lists every row.
    fn visibility_column() -> Option<<Self::Entity as EntityTrait>::Column>;

    fn model_id(model: &Self::Model) -> i32;

    /// Validate `input` and build a fresh, visible row stamped with `now`.
    fn new_active_model(input: Self::Create, now: DateTimeWithTimeZone) -> Result<Self::ActiveModel, ModelError>;

    /// Validate `input` and write its present fields into `active`.
    fn apply_update(active: &mut Self::ActiveModel, input: Self::Update, now: DateTimeWithTimeZone) -> Result<(), ModelError>;

    /// Modification timestamp, stamped on soft delete; `None` if the table has none.
    fn updated_at_column() -> Option<<Self::Entity as EntityTrait>::Column>;

    /// Static fixture served without touching storage.
    fn sample_data() -> serde_json::Value;
}

/// CRUD service for one content table.
pub struct ContentService<R: ContentResource> {
    db: DatabaseConnection,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ContentResource> Clone for ContentService<R> {
    fn clone(&self) -> Self { Self::new(self.db.clone()) }
}

pub(crate) fn now() -> DateTimeWithTimeZone { Utc::now().into() }

fn record<T>(resource: &str, operation: &str, res: &Result<T, ServiceError>) {
    if let Err(ServiceError::Db(e)) = res {
        error!(resource, operation, error = %e, "storage failure");
    }
    common::metrics::record_content_op(resource, operation, res.is_ok());
}

impl<R: ContentResource> ContentService<R> {
    pub fn new(db: DatabaseConnection) -> Self { Self { db, _resource: PhantomData } }

    pub fn db(&self) -> &DatabaseConnection { &self.db }

    fn visible(select: Select<R::Entity>) -> Select<R::Entity> {
        match R::visibility_column() {
            Some(flag) => select.filter(flag.eq(true)),
            None => select,
        }
    }

    async fn fetch_page(&self, select: Select<R::Entity>, page: Pagination) -> Result<Vec<R::Model>, ServiceError> {
        if page.is_empty() {
            return Ok(Vec::new());
        }
        let rows = select
            .order_by_asc(R::id_column())
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Row by id, ignoring the visibility flag.
    pub(crate) async fn find_any(&self, id: i32) -> Result<R::Model, ServiceError> {
        R::Entity::find()
            .filter(R::id_column().eq(id))
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::NAME))
    }

    /// Visible rows in insertion order.
    #[instrument(skip(self), fields(resource = R::KEY))]
    pub async fn list(&self, page: Pagination) -> Result<Vec<R::Model>, ServiceError> {
        let res = self.fetch_page(Self::visible(R::Entity::find()), page).await;
        record(R::KEY, "list", &res);
        res
    }

    /// Every row, visible or not.
    #[instrument(skip(self), fields(resource = R::KEY))]
    pub async fn list_all(&self, page: Pagination) -> Result<Vec<R::Model>, ServiceError> {
        let res = self.fetch_page(R::Entity::find(), page).await;
        record(R::KEY, "list_all", &res);
        res
    }

    /// Visible row by id.
    #[instrument(skip(self), fields(resource = R::KEY))]
    pub async fn get(&self, id: i32) -> Result<R::Model, ServiceError> {
        let res = match Self::visible(R::Entity::find().filter(R::id_column().eq(id))).one(&self.db).await {
            Ok(found) => found.ok_or_else(|| ServiceError::not_found(R::NAME)),
            Err(e) => Err(e.into()),
        };
        record(R::KEY, "get", &res);
        res
    }

    #[instrument(skip(self, input), fields(resource = R::KEY))]
    pub async fn create(&self, input: R::Create) -> Result<R::Model, ServiceError> {
        let res = self.insert(input).await;
        record(R::KEY, "create", &res);
        if let Ok(model) = &res {
            info!(resource = R::KEY, id = R::model_id(model), "content created");
        }
        res
    }

    async fn insert(&self, input: R::Create) -> Result<R::Model, ServiceError> {
        let active = R::new_active_model(input, now())?;
        Ok(active.insert(&self.db).await?)
    }

    /// Apply a sparse update to any row with `id`, visible or not.
    #[instrument(skip(self, input), fields(resource = R::KEY))]
    pub async fn update(&self, id: i32, input: R::Update) -> Result<R::Model, ServiceError> {
        let res = self.patch(id, input).await;
        record(R::KEY, "update", &res);
        if res.is_ok() {
            info!(resource = R::KEY, id, "content updated");
        }
        res
    }

    async fn patch(&self, id: i32, input: R::Update) -> Result<R::Model, ServiceError> {
        let mut active = self.find_any(id).await?.into_active_model();
        R::apply_update(&mut active, input, now())?;
        Ok(active.update(&self.db).await?)
    }

    /// Retire a row according to the table's [`DeletePolicy`].
    #[instrument(skip(self), fields(resource = R::KEY))]
    pub async fn delete(&self, id: i32) -> Result<Message, ServiceError> {
        let res = self.remove(id).await;
        record(R::KEY, "delete", &res);
        if res.is_ok() {
            info!(resource = R::KEY, id, policy = ?R::DELETE_POLICY, "content deleted");
        }
        res
    }

    async fn remove(&self, id: i32) -> Result<Message, ServiceError> {
        let found = self.find_any(id).await?;
        match R::DELETE_POLICY {
            DeletePolicy::Soft => {
                let flag = R::visibility_column()
                    .ok_or_else(|| ServiceError::Db(format!("{} has no visibility flag to clear", R::NAME)))?;
                let mut active = found.into_active_model();
                active.set(flag, false.into());
                if let Some(stamp) = R::updated_at_column() {
                    active.set(stamp, now().into());
                }
                active.update(&self.db).await?;
            }
            DeletePolicy::Hard => {
                R::Entity::delete_many()
                    .filter(R::id_column().eq(id))
                    .exec(&self.db)
                    .await?;
            }
        }
        Ok(Message::new(format!("{} deleted successfully", R::NAME)))
    }

    pub fn sample(&self) -> serde_json::Value { R::sample_data() }
}
