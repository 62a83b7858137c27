//! Post handlers.

use actix_web::{HttpResponse, web};

use posts_core::domain::{Post, PostDraft};
use posts_shared::dto::{
    CreatePostRequest, CreatePostResponse, MessageResponse, PostResponse, TextField,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        name: post.name,
        surname: post.surname,
        title: post.title,
        content: post.content,
    }
}

fn to_draft(mut req: CreatePostRequest) -> PostDraft {
    let mut mistyped = Vec::new();
    let mut text = |key: &str| match req.take_text(key) {
        TextField::Text(value) => Some(value),
        TextField::Missing => None,
        TextField::NotText => {
            mistyped.push(key.to_string());
            None
        }
    };

    let name = text("name");
    let surname = text("surname");
    let title = text("title");
    let content = text("content");

    PostDraft {
        name,
        surname,
        title,
        content,
        mistyped,
        unknown: req.keys().map(str::to_string).collect(),
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post_id = state.posts.create_post(to_draft(body.into_inner())).await?;

    tracing::info!(post_id, "Post created");

    Ok(HttpResponse::Ok().json(CreatePostResponse {
        message: "Post added successfully".to_string(),
        post_id,
    }))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = state.posts.delete_post(&path.into_inner()).await?;

    tracing::info!(post_id, "Post deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}
