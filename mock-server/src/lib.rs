use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
}

#[derive(Deserialize)]
pub struct PostInput {
    pub title: String,
}

/// Posts keyed by id, listed in ascending id order.
#[derive(Default)]
pub struct Store {
    next_id: i64,
    posts: BTreeMap<i64, Post>,
}

pub type Db = Arc<RwLock<Store>>;

/// Router without an auth check.
pub fn app() -> Router {
    routes(Arc::new(RwLock::new(Store::default())))
}

/// Router that answers 401 unless the request carries the matching
/// `authorization: Basic ..` header.
pub fn app_with_credentials(username: &str, password: &str) -> Router {
    let expected = Arc::new(format!(
        "Basic {}",
        STANDARD.encode(format!("{username}:{password}"))
    ));
    routes(Arc::new(RwLock::new(Store::default())))
        .layer(middleware::from_fn_with_state(expected, require_basic_auth))
}

fn routes(db: Db) -> Router {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post).put(update_post).delete(delete_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn require_basic_auth(
    State(expected): State<Arc<String>>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if presented != Some(expected.as_str()) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(request).await)
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let store = db.read().await;
    Json(store.posts.values().cloned().collect())
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<PostInput>,
) -> (StatusCode, Json<Post>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let post = Post {
        id: store.next_id,
        title: input.title,
    };
    store.posts.insert(post.id, post.clone());
    (StatusCode::CREATED, Json(post))
}

async fn get_post(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, StatusCode> {
    let store = db.read().await;
    store.posts.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<PostInput>,
) -> Result<Json<Post>, StatusCode> {
    let mut store = db.write().await;
    let post = store.posts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    post.title = input.title;
    Ok(Json(post.clone()))
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.posts.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_to_json() {
        let post = Post {
            id: 1,
            title: "Test".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "title": "Test" }));
    }

    #[test]
    fn post_input_ignores_client_supplied_id() {
        let input: PostInput = serde_json::from_str(r#"{"id":5,"title":"x"}"#).unwrap();
        assert_eq!(input.title, "x");
    }

    #[test]
    fn post_input_rejects_missing_title() {
        let result: Result<PostInput, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }
}
