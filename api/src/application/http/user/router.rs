use super::handlers::{
    enroll_user::{__path_enroll_user, enroll_user},
    get_user::{__path_get_user, get_user},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(enroll_user, get_user))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/users", state.args.server.root_path),
            post(enroll_user),
        )
        .route(
            &format!("{}/api/users/{{user_id}}", state.args.server.root_path),
            get(get_user),
        )
}
