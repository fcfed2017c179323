//! Comment handlers.

use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};

use remark_core::domain::Comment;
use remark_core::error::DomainError;
use remark_shared::dto::{CommentResponse, CreateCommentRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

// Listing comments of an unknown post has always answered with an empty message.
const LIST_POST_NOT_FOUND_MSG: &str = "";

fn to_response(comment: Comment) -> CommentResponse {
    CommentResponse {
        id: comment.id.to_string(),
        text: comment.text,
        user: comment.user_id.to_string(),
        post: comment.post_id,
        created_at: comment.created_at.to_rfc3339(),
    }
}

/// Read the create body. A body not declared as JSON, or an empty one, reads as `{}`.
fn parse_create_body(req: &HttpRequest, body: &[u8]) -> AppResult<CreateCommentRequest> {
    let mime = req.content_type();
    let is_json = mime == "application/json" || mime.ends_with("+json");

    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateCommentRequest::default());
    }

    serde_json::from_slice(body).map_err(AppError::malformed_body)
}

/// POST /api/comments/{post_id}
pub async fn create_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let text = parse_create_body(&req, &body)?.text.unwrap_or_default();

    let comment = state
        .comments
        .create_comment(&post_id, &text, identity.user_id)
        .await?;

    tracing::info!(
        comment_id = %comment.id,
        post_id = %comment.post_id,
        user_id = %identity.user_id,
        "Comment created"
    );

    Ok(HttpResponse::Ok().json(to_response(comment)))
}

/// GET /api/comments/{post_id}
pub async fn list_comments(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    tracing::debug!(post_id = %post_id, user_id = %identity.user_id, "Listing comments");

    let comments = state
        .comments
        .list_comments(&post_id)
        .await
        .map_err(|e| match e {
            DomainError::NotFound { .. } => {
                AppError::NotFound(LIST_POST_NOT_FOUND_MSG.to_string())
            }
            other => other.into(),
        })?;

    let body: Vec<CommentResponse> = comments.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}
