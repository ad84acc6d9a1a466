//! Request and response models for the HTTP API.
//!
//! Wire field names are camelCase to match the existing client contract;
//! internal domain models live in `newsdesk_core`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use newsdesk_core::articles::{Article, ArticleStatus, ArticleWithAuthor};
use newsdesk_core::models::account::{Account, Role};

/// Standard error payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// Connection state name, present on database-availability errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// `POST /api/users/login` request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/users/login` response body.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub role: Role,
    pub first_name: String,
    pub id: Uuid,
}

/// `POST /api/users` request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub gender: String,
    pub contact_number: String,
    pub email: String,
    pub username: String,
    /// Absent and empty are equivalent; both are rejected.
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Role,
    pub address: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// `PUT /api/users/{id}` request body. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}

/// Account as returned by the API. Never carries the password hash.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub gender: String,
    pub contact_number: String,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub address: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name,
            last_name: account.last_name,
            age: account.age,
            gender: account.gender,
            contact_number: account.contact_number,
            email: account.email,
            username: account.username,
            role: account.role,
            address: account.address,
            is_active: account.is_active,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// `POST /api/articles` request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub author: Uuid,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    pub image: Option<String>,
}

/// `PUT /api/articles/{id}` request body. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<ArticleStatus>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub image: Option<String>,
}

/// Article as returned by create/update, with the author as a bare ID.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
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

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            author: article.author,
            status: article.status,
            tags: article.tags,
            category: article.category,
            image: article.image,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Author details embedded in article reads.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

/// Article as returned by list/get, with author details joined in.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleWithAuthorResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: AuthorRef,
    pub status: ArticleStatus,
    pub tags: Vec<String>,
    pub category: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ArticleWithAuthor> for ArticleWithAuthorResponse {
    fn from(row: ArticleWithAuthor) -> Self {
        let article = row.article;
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            author: AuthorRef {
                id: article.author,
                first_name: row.author_first_name,
                last_name: row.author_last_name,
            },
            status: article.status,
            tags: article.tags,
            category: article.category,
            image: article.image,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
