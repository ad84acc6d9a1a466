//! Article request handlers.
//!
//! Reads are public; create, update, and delete require at least the
//! editor role (enforced by middleware on the router).

use axum::Json;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use tracing::info;
use uuid::Uuid;

use newsdesk_core::articles::{self, ArticleChanges, NewArticle};

use crate::error::{AppError, AppResult};
use crate::middleware::db_gate::Db;
use crate::models::{
    ArticleResponse, ArticleWithAuthorResponse, CreateArticleRequest, UpdateArticleRequest,
};

/// `GET /api/articles`: list all articles with author details.
pub async fn list_articles_handler(
    Extension(Db(pool)): Extension<Db>,
) -> AppResult<Json<Vec<ArticleWithAuthorResponse>>> {
    let rows = articles::list_articles(&pool).await?;
    Ok(Json(
        rows.into_iter().map(ArticleWithAuthorResponse::from).collect(),
    ))
}

/// `GET /api/articles/{id}`: fetch one article with author details.
pub async fn get_article_handler(
    Extension(Db(pool)): Extension<Db>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ArticleWithAuthorResponse>> {
    let row = articles::get_article(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no article with id {id}")))?;
    Ok(Json(row.into()))
}

/// `POST /api/articles`: create an article.
pub async fn create_article_handler(
    Extension(Db(pool)): Extension<Db>,
    Json(body): Json<CreateArticleRequest>,
) -> AppResult<(StatusCode, Json<ArticleResponse>)> {
    if body.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".into()));
    }
    if body.content.trim().is_empty() {
        return Err(AppError::Validation("Content is required".into()));
    }

    let article = articles::create_article(
        &pool,
        NewArticle {
            title: &body.title,
            content: &body.content,
            author: body.author,
            status: body.status,
            tags: &body.tags,
            category: &body.category,
            image: body.image.as_deref(),
        },
    )
    .await?;

    info!(article_id = %article.id, "article created");

    Ok((StatusCode::CREATED, Json(article.into())))
}

/// `PUT /api/articles/{id}`: partial update.
pub async fn update_article_handler(
    Extension(Db(pool)): Extension<Db>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateArticleRequest>,
) -> AppResult<Json<ArticleResponse>> {
    let article = articles::update_article(
        &pool,
        id,
        ArticleChanges {
            title: body.title.as_deref(),
            content: body.content.as_deref(),
            status: body.status,
            tags: body.tags.as_deref(),
            category: body.category.as_deref(),
            image: body.image.as_deref(),
        },
    )
    .await?
    .ok_or_else(|| AppError::NotFound(format!("no article with id {id}")))?;

    info!(article_id = %id, "article updated");

    Ok(Json(article.into()))
}

/// `DELETE /api/articles/{id}`: remove an article.
pub async fn delete_article_handler(
    Extension(Db(pool)): Extension<Db>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    if !articles::delete_article(&pool, id).await? {
        return Err(AppError::NotFound(format!("no article with id {id}")));
    }

    info!(article_id = %id, "article deleted");

    Ok(Json(serde_json::json!({
        "message": "Article deleted successfully"
    })))
}
