//! `/posts` controller: each handler proxies one CRUD call to the remote API.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use posts_core::{ApiError, CreatePostRequest, Post, RemotePostClient, UpdatePostRequest};

use crate::error::{GatewayError, Operation};

#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<RemotePostClient>,
}

impl AppState {
    pub fn new(posts: RemotePostClient) -> Self {
        Self {
            posts: Arc::new(posts),
        }
    }
}

/// Runs a blocking remote call on the blocking pool and translates its error.
async fn call_remote<T, F>(state: &AppState, operation: Operation, call: F) -> Result<T, GatewayError>
where
    T: Send + 'static,
    F: FnOnce(&RemotePostClient) -> Result<T, ApiError> + Send + 'static,
{
    let posts = Arc::clone(&state.posts);
    tokio::task::spawn_blocking(move || call(&posts))
        .await?
        .map_err(|e| GatewayError::from_remote(operation, e))
}

pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, GatewayError> {
    let posts = call_remote(&state, Operation::ListPosts, |posts| posts.list_posts()).await?;
    Ok(Json(posts))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, GatewayError> {
    let post = call_remote(&state, Operation::GetPost, move |posts| posts.get_post(id)).await?;
    Ok(Json(post))
}

pub async fn create_post(
    State(state): State<AppState>,
    Json(input): Json<CreatePostRequest>,
) -> Result<Json<Post>, GatewayError> {
    let post = call_remote(&state, Operation::CreatePost, move |posts| posts.create_post(&input)).await?;
    Ok(Json(post))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdatePostRequest>,
) -> Result<Json<Post>, GatewayError> {
    let post = call_remote(&state, Operation::UpdatePost, move |posts| posts.update_post(id, &input)).await?;
    Ok(Json(post))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, GatewayError> {
    call_remote(&state, Operation::DeletePost, move |posts| posts.delete_post(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
