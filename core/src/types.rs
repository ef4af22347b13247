//! Domain DTOs for the posts API.
//!
//! # Design
//! The identifier is assigned by the remote service and only ever appears on
//! `Post`. Create and update payloads carry the title alone; the update
//! target is addressed through the request path. Unknown fields returned by
//! the remote service are ignored on decode.
//!
//! An absent or `null` title is accepted and forwarded as `null`; whether
//! that is acceptable is the remote service's call.

use serde::{Deserialize, Serialize};

/// A single post returned by the remote API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
}

/// Request payload for creating a new post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePostRequest {
    pub title: Option<String>,
}

/// Request payload for replacing the title of an existing post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_ignores_extra_remote_fields() {
        let post: Post =
            serde_json::from_str(r#"{"userId":1,"id":7,"title":"foo","body":"bar"}"#).unwrap();
        assert_eq!(
            post,
            Post {
                id: 7,
                title: "foo".to_string()
            }
        );
    }

    #[test]
    fn create_request_never_carries_an_id() {
        let json = serde_json::to_value(CreatePostRequest {
            title: Some("A".to_string()),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "title": "A" }));
    }

    #[test]
    fn missing_or_null_title_is_forwarded_as_null() {
        for raw in ["{}", r#"{"title":null}"#] {
            let update: UpdatePostRequest = serde_json::from_str(raw).unwrap();
            assert_eq!(update.title, None);
            let create: CreatePostRequest = serde_json::from_str(raw).unwrap();
            assert_eq!(serde_json::to_value(&create).unwrap(), serde_json::json!({ "title": null }));
        }
    }

    #[test]
    fn negative_ids_decode() {
        let post: Post = serde_json::from_str(r#"{"id":-5,"title":"t"}"#).unwrap();
        assert_eq!(post.id, -5);
    }
}
