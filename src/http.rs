//! # HTTP Surface
//!
//! Mounts [`CampsApi`] and [`TalksApi`] on an axum [`Router`].
//!
//! | Method | Path                              | Operation          |
//! |--------|-----------------------------------|--------------------|
//! | GET    | `/camps?includeTalks=`            | [`CampsApi::list`]   |
//! | POST   | `/camps`                          | [`CampsApi::create`] |
//! | GET    | `/camps/search?theDate=&includeTalks=` | [`CampsApi::search`] |
//! | GET    | `/camps/{moniker}`                | [`CampsApi::get`]    |
//! | PUT    | `/camps/{moniker}`                | [`CampsApi::update`] |
//! | DELETE | `/camps/{moniker}`                | [`CampsApi::delete`] |
//! | GET    | `/camps/{moniker}/talks`          | [`TalksApi::list`]   |
//! | POST   | `/camps/{moniker}/talks`          | [`TalksApi::create`] |
//! | GET    | `/camps/{moniker}/talks/{id}`     | [`TalksApi::get`]    |
//! | PUT    | `/camps/{moniker}/talks/{id}`     | [`TalksApi::update`] |
//! | DELETE | `/camps/{moniker}/talks/{id}`     | [`TalksApi::delete`] |
//!
//! Every path is prefixed with the configured base path. Extractor rejections are turned
//! into the same JSON error body the operations use: bad query strings and bodies are 400,
//! a talk id that is not a number is 404.

use crate::api::{ApiError, CampsApi, Reply, TalksApi};
use crate::repository::CampRepository;
use crate::shapes::{CampShape, TalkShape};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::sync::Arc;

/// Shared handler state: one API object per resource.
pub struct AppState<R> {
    pub camps: Arc<CampsApi<R>>,
    pub talks: Arc<TalksApi<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            camps: Arc::clone(&self.camps),
            talks: Arc::clone(&self.talks),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IncludeTalks {
    #[serde(default, alias = "IncludeTalks", deserialize_with = "lenient_bool")]
    include_talks: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchParams {
    #[serde(alias = "TheDate")]
    the_date: NaiveDate,
    #[serde(default, alias = "IncludeTalks", deserialize_with = "lenient_bool")]
    include_talks: bool,
}

/// Query-string booleans in any letter case (`true`, `True`, `TRUE`).
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        s if s.eq_ignore_ascii_case("true") => Ok(true),
        s if s.eq_ignore_ascii_case("false") => Ok(false),
        other => Err(de::Error::custom(format!("invalid boolean `{other}`"))),
    }
}

/// Builds the router. `base_path` is mounted as given; an empty one serves at the root.
pub fn router<R>(state: AppState<R>, base_path: &str) -> Router
where
    R: CampRepository + 'static,
{
    let api = Router::new()
        .route("/camps", get(list_camps::<R>).post(create_camp::<R>))
        .route("/camps/search", get(search_camps::<R>))
        .route(
            "/camps/{moniker}",
            get(get_camp::<R>).put(update_camp::<R>).delete(delete_camp::<R>),
        )
        .route(
            "/camps/{moniker}/talks",
            get(list_talks::<R>).post(create_talk::<R>),
        )
        .route(
            "/camps/{moniker}/talks/{id}",
            get(get_talk::<R>).put(update_talk::<R>).delete(delete_talk::<R>),
        )
        .with_state(state);

    if base_path.is_empty() || base_path == "/" {
        api
    } else {
        Router::new().nest(base_path, api)
    }
}

fn respond<T: serde::Serialize>(result: Result<Reply<T>, ApiError>) -> Response {
    match result {
        Ok(reply) => reply.into_response(),
        Err(e) => e.into_response(),
    }
}

fn bad_query(rejection: QueryRejection) -> ApiError {
    ApiError::validation(rejection.body_text())
}

fn bad_body(rejection: JsonRejection) -> ApiError {
    ApiError::validation(rejection.body_text())
}

fn bad_talk_path(_: PathRejection) -> ApiError {
    ApiError::not_found("Couldn't find the talk")
}

async fn list_camps<R: CampRepository>(
    State(state): State<AppState<R>>,
    params: Result<Query<IncludeTalks>, QueryRejection>,
) -> Response {
    let result = match params {
        Ok(Query(params)) => state.camps.list(params.include_talks).await,
        Err(rejection) => Err(bad_query(rejection)),
    };
    respond(result)
}

async fn search_camps<R: CampRepository>(
    State(state): State<AppState<R>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Response {
    let result = match params {
        Ok(Query(params)) => state.camps.search(params.the_date, params.include_talks).await,
        Err(rejection) => Err(bad_query(rejection)),
    };
    respond(result)
}

async fn get_camp<R: CampRepository>(
    State(state): State<AppState<R>>,
    Path(moniker): Path<String>,
) -> Response {
    respond(state.camps.get(&moniker).await)
}

async fn create_camp<R: CampRepository>(
    State(state): State<AppState<R>>,
    body: Result<Json<CampShape>, JsonRejection>,
) -> Response {
    let result = match body {
        Ok(Json(shape)) => state.camps.create(shape).await,
        Err(rejection) => Err(bad_body(rejection)),
    };
    respond(result)
}

async fn update_camp<R: CampRepository>(
    State(state): State<AppState<R>>,
    Path(moniker): Path<String>,
    body: Result<Json<CampShape>, JsonRejection>,
) -> Response {
    let result = match body {
        Ok(Json(shape)) => state.camps.update(&moniker, shape).await,
        Err(rejection) => Err(bad_body(rejection)),
    };
    respond(result)
}

async fn delete_camp<R: CampRepository>(
    State(state): State<AppState<R>>,
    Path(moniker): Path<String>,
) -> Response {
    respond(state.camps.delete(&moniker).await)
}

async fn list_talks<R: CampRepository>(
    State(state): State<AppState<R>>,
    Path(moniker): Path<String>,
) -> Response {
    respond(state.talks.list(&moniker).await)
}

async fn create_talk<R: CampRepository>(
    State(state): State<AppState<R>>,
    Path(moniker): Path<String>,
    body: Result<Json<TalkShape>, JsonRejection>,
) -> Response {
    let result = match body {
        Ok(Json(shape)) => state.talks.create(&moniker, shape).await,
        Err(rejection) => Err(bad_body(rejection)),
    };
    respond(result)
}

async fn get_talk<R: CampRepository>(
    State(state): State<AppState<R>>,
    path: Result<Path<(String, u32)>, PathRejection>,
) -> Response {
    let result = match path {
        Ok(Path((moniker, id))) => state.talks.get(&moniker, id).await,
        Err(rejection) => Err(bad_talk_path(rejection)),
    };
    respond(result)
}

async fn update_talk<R: CampRepository>(
    State(state): State<AppState<R>>,
    path: Result<Path<(String, u32)>, PathRejection>,
    body: Result<Json<TalkShape>, JsonRejection>,
) -> Response {
    let result = match (path, body) {
        (Err(rejection), _) => Err(bad_talk_path(rejection)),
        (_, Err(rejection)) => Err(bad_body(rejection)),
        (Ok(Path((moniker, id))), Ok(Json(shape))) => state.talks.update(&moniker, id, shape).await,
    };
    respond(result)
}

async fn delete_talk<R: CampRepository>(
    State(state): State<AppState<R>>,
    path: Result<Path<(String, u32)>, PathRejection>,
) -> Response {
    let result = match path {
        Ok(Path((moniker, id))) => state.talks.delete(&moniker, id).await,
        Err(rejection) => Err(bad_talk_path(rejection)),
    };
    respond(result)
}
