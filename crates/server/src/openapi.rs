use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub status: u16, pub message: String, pub detail: Option<String> }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateFilmRequest { pub title: String, pub year: i32, pub director_id: Option<i32>, pub actors: Vec<i32> }

#[derive(ToSchema)]
pub struct UpdateFilmRequest { pub title: String, pub year: i32 }

#[derive(ToSchema)]
pub struct NameRequest { pub name: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct LinkActorRequest { pub actor_id: i32 }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct FilmDoc {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub director_id: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ActorDoc { pub id: i32, pub name: String, pub created_at: String, pub updated_at: String }

#[derive(ToSchema)]
pub struct ActorEnvelopeDoc { pub actor: ActorDoc }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct FilmActorDoc { pub id: i32, pub film_id: i32, pub actor_id: i32, pub created_at: String, pub updated_at: String }

#[derive(ToSchema)]
pub struct RemovedResponse { pub removed: u64 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::films::create,
        crate::routes::films::update,
        crate::routes::films::links,
        crate::routes::films::link_actor,
        crate::routes::films::unlink_actor,
        crate::routes::directors::delete,
        crate::routes::actors::create,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            ErrorResponse,
            CreateFilmRequest,
            UpdateFilmRequest,
            NameRequest,
            LinkActorRequest,
            FilmDoc,
            ActorDoc,
            ActorEnvelopeDoc,
            FilmActorDoc,
            RemovedResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "films"),
        (name = "directors"),
        (name = "actors")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_json_endpoints() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in ["/health", "/films", "/films/{id}", "/films/{id}/actors", "/directors/{id}", "/actors"] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {p}");
        }
    }
}
