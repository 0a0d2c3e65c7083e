use utoipa::openapi::{
    path::{OperationBuilder, ParameterBuilder, ParameterIn, PathItem, PathItemType},
    request_body::RequestBodyBuilder,
    ContentBuilder, ObjectBuilder, Required, ResponseBuilder, SchemaType,
};
use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub service: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub username: String, pub password: String }

#[derive(ToSchema)]
pub struct TokenResponse { pub access_token: String, pub token_type: String, pub expires_at: i64 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::meta::root,
        crate::routes::meta::health,
        crate::routes::meta::info,
        crate::routes::auth::login,
    ),
    components(schemas(HealthResponse, LoginRequest, TokenResponse)),
    tags(
        (name = "meta"),
        (name = "auth"),
        (name = "products"),
        (name = "techniques"),
        (name = "cases"),
        (name = "jobs"),
        (name = "news"),
        (name = "contact")
    )
)]
pub struct ApiDoc;

/// Collection path and tag of every content table.
const CONTENT_TABLES: [(&str, &str); 6] = [
    ("/api/products", "products"),
    ("/api/techniques", "techniques"),
    ("/api/cases", "cases"),
    ("/api/jobs", "jobs"),
    ("/api/news", "news"),
    ("/api/contact", "contact"),
];

fn op(tag: &str, summary: &str, ok: &str) -> OperationBuilder {
    OperationBuilder::new()
        .tag(tag)
        .summary(Some(summary))
        .response("200", ResponseBuilder::new().description(ok).build())
}

fn int_param(name: &str, location: ParameterIn, required: bool) -> ParameterBuilder {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(location)
        .required(if required { Required::True } else { Required::False })
        .schema(Some(ObjectBuilder::new().schema_type(SchemaType::Integer)))
}

fn json_body() -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .content("application/json", ContentBuilder::new().schema(ObjectBuilder::new().schema_type(SchemaType::Object)).build())
        .required(Some(Required::True))
        .build()
}

fn with_ops(ops: Vec<(PathItemType, OperationBuilder)>) -> PathItem {
    let mut item = PathItem::default();
    for (kind, builder) in ops {
        item.operations.insert(kind, builder.build());
    }
    item
}

/// Generated document: annotated handlers plus the per-table CRUD paths.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    for (base, tag) in CONTENT_TABLES {
        let collection = with_ops(vec![
            (
                PathItemType::Get,
                op(tag, "List visible rows", "Rows in insertion order")
                    .parameter(int_param("skip", ParameterIn::Query, false))
                    .parameter(int_param("limit", ParameterIn::Query, false)),
            ),
            (
                PathItemType::Post,
                op(tag, "Create", "Created row")
                    .request_body(Some(json_body()))
                    .response("422", ResponseBuilder::new().description("Validation Error").build()),
            ),
        ]);
        let id = || int_param("id", ParameterIn::Path, true);
        let not_found = || ResponseBuilder::new().description("Not Found").build();
        let item = with_ops(vec![
            (PathItemType::Get, op(tag, "Get visible row", "Row").parameter(id()).response("404", not_found())),
            (
                PathItemType::Put,
                op(tag, "Sparse update", "Updated row")
                    .parameter(id())
                    .request_body(Some(json_body()))
                    .response("404", not_found()),
            ),
            (PathItemType::Delete, op(tag, "Delete", "Acknowledgement").parameter(id()).response("404", not_found())),
        ]);
        let sample = with_ops(vec![(PathItemType::Get, op(tag, "Static fixture", "Sample rows"))]);

        doc.paths.paths.insert(format!("{base}/"), collection);
        doc.paths.paths.insert(format!("{base}/{{id}}"), item);
        doc.paths.paths.insert(format!("{base}/sample/data"), sample);
    }

    let extra = [
        ("/api/jobs/tags", PathItemType::Get, op("jobs", "Distinct tags of active jobs", "Sorted tags")),
        ("/api/news/admin/all", PathItemType::Get, op("news", "All news, unpublished included (bearer token)", "Rows")),
        ("/api/techniques/init/default", PathItemType::Post, op("techniques", "Replace techniques with the defaults (bearer token)", "Inserted rows")),
        (
            "/api/contact/{id}/process",
            PathItemType::Put,
            op("contact", "Mark a submission as processed", "Updated row").parameter(int_param("id", ParameterIn::Path, true)),
        ),
    ];
    for (path, kind, builder) in extra {
        doc.paths.paths.insert(path.to_string(), with_ops(vec![(kind, builder)]));
    }
    doc
}
