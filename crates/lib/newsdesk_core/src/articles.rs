//! Article persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::uuid::uuidv7;

/// Publication workflow states.
///
/// Stored in PostgreSQL as the `article_status` enum and serialized
/// lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "article_status", rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    Published,
    Archived,
}

impl Default for ArticleStatus {
    fn default() -> Self {
        ArticleStatus::Draft
    }
}

/// Row returned by article queries.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Uuid,
    pub status: ArticleStatus,
    pub tags: Vec<String>,
    pub category: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Article row joined with its author's display fields.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArticleWithAuthor {
    #[sqlx(flatten)]
    pub article: Article,
    pub author_first_name: String,
    pub author_last_name: String,
}

/// Field values for a new article.
#[derive(Debug)]
pub struct NewArticle<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub author: Uuid,
    pub status: ArticleStatus,
    pub tags: &'a [String],
    pub category: &'a str,
    pub image: Option<&'a str>,
}

/// Partial update of an article. `None` fields keep their current value.
#[derive(Debug, Default)]
pub struct ArticleChanges<'a> {
    pub title: Option<&'a str>,
    pub content: Option<&'a str>,
    pub status: Option<ArticleStatus>,
    pub tags: Option<&'a [String]>,
    pub category: Option<&'a str>,
    pub image: Option<&'a str>,
}

/// List all articles with author details, oldest first.
pub async fn list_articles(pool: &PgPool) -> Result<Vec<ArticleWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, ArticleWithAuthor>(
        r#"
        SELECT a.id, a.title, a.content, a.author, a.status, a.tags, a.category,
               a.image, a.created_at, a.updated_at,
               acc.first_name AS author_first_name, acc.last_name AS author_last_name
        FROM articles a
        JOIN accounts acc ON acc.id = a.author
        ORDER BY a.created_at
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Get an article by ID with author details.
pub async fn get_article(
    pool: &PgPool,
    article_id: Uuid,
) -> Result<Option<ArticleWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, ArticleWithAuthor>(
        r#"
        SELECT a.id, a.title, a.content, a.author, a.status, a.tags, a.category,
               a.image, a.created_at, a.updated_at,
               acc.first_name AS author_first_name, acc.last_name AS author_last_name
        FROM articles a
        JOIN accounts acc ON acc.id = a.author
        WHERE a.id = $1
        "#,
    )
    .bind(article_id)
    .fetch_optional(pool)
    .await
}

/// Create a new article. The ID is generated here as a UUIDv7 so listings
/// follow creation order.
pub async fn create_article(pool: &PgPool, new: NewArticle<'_>) -> Result<Article, sqlx::Error> {
    sqlx::query_as::<_, Article>(
        r#"
        INSERT INTO articles (id, title, content, author, status, tags, category, image)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, title, content, author, status, tags, category, image,
                  created_at, updated_at
        "#,
    )
    .bind(uuidv7())
    .bind(new.title)
    .bind(new.content)
    .bind(new.author)
    .bind(new.status)
    .bind(new.tags)
    .bind(new.category)
    .bind(new.image)
    .fetch_one(pool)
    .await
}

/// Apply a partial update, returning the updated row. `None` when no article
/// has the given id.
pub async fn update_article(
    pool: &PgPool,
    article_id: Uuid,
    changes: ArticleChanges<'_>,
) -> Result<Option<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(
        r#"
        UPDATE articles
        SET title = COALESCE($2, title),
            content = COALESCE($3, content),
            status = COALESCE($4, status),
            tags = COALESCE($5, tags),
            category = COALESCE($6, category),
            image = COALESCE($7, image),
            updated_at = now()
        WHERE id = $1
        RETURNING id, title, content, author, status, tags, category, image,
                  created_at, updated_at
        "#,
    )
    .bind(article_id)
    .bind(changes.title)
    .bind(changes.content)
    .bind(changes.status)
    .bind(changes.tags)
    .bind(changes.category)
    .bind(changes.image)
    .fetch_optional(pool)
    .await
}

/// Delete an article. Returns whether a row was removed.
pub async fn delete_article(pool: &PgPool, article_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM articles WHERE id = $1")
        .bind(article_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            "\"draft\"",
            serde_json::to_string(&ArticleStatus::Draft).unwrap()
        );
        assert_eq!(
            "\"published\"",
            serde_json::to_string(&ArticleStatus::Published).unwrap()
        );
        assert_eq!(
            "\"archived\"",
            serde_json::to_string(&ArticleStatus::Archived).unwrap()
        );
    }

    #[test]
    fn default_status_is_draft() {
        assert_eq!(ArticleStatus::Draft, ArticleStatus::default());
    }
}
