use std::collections::BTreeSet;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::StringList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub department: String,
    pub location: String,
    /// Full-time, Part-time, Contract, ...
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub requirements: StringList,
    #[sea_orm(column_type = "JsonBinary")]
    pub benefits: StringList,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: StringList,
    pub posted_date: DateTimeWithTimeZone,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Distinct tags across `jobs`, in sorted order.
pub fn collect_tags<'a>(jobs: impl IntoIterator<Item = &'a Model>) -> Vec<String> {
    jobs.into_iter()
        .flat_map(|job| job.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn job(tags: Vec<&str>) -> Model {
        let now = Utc::now().into();
        Model {
            id: 1,
            title: "Engineer".into(),
            department: "Engineering".into(),
            location: "Remote".into(),
            job_type: "Full-time".into(),
            salary: "TBD".into(),
            description: "...".into(),
            requirements: StringList::default(),
            benefits: StringList::default(),
            tags: tags.into(),
            posted_date: now,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn tags_are_deduplicated_and_sorted() {
        let jobs = vec![job(vec!["rust", "ai"]), job(vec!["ai", "security"]), job(vec![])];
        assert_eq!(collect_tags(&jobs), vec!["ai", "rust", "security"]);
    }

    #[test]
    fn type_field_keeps_its_wire_name() {
        let json = serde_json::to_value(job(vec![])).unwrap();
        assert_eq!(json["type"], "Full-time");
        assert!(json.get("job_type").is_none());
    }
}
