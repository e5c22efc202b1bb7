use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Product as returned by the API.
#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: i32,
    pub name: String,
    #[schema(example = 15.5)]
    pub price: f64,
}

/// Body accepted by create and update. `id` is ignored.
#[derive(ToSchema)]
pub struct ProductInputDoc {
    pub id: Option<i32>,
    pub name: String,
    #[schema(example = 15.5)]
    pub price: f64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::create,
        crate::routes::products::update,
        crate::routes::products::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ProductDoc,
            ProductInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "product")
    )
)]
pub struct ApiDoc;
