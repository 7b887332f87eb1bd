//! # ユーザーハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/users` - ユーザー一覧（全件）
//! - `GET /api/users/paginated?page=&page_size=` - ユーザー一覧（ページネーション付き）
//! - `GET /api/users/{id}` - ユーザー詳細
//! - `POST /api/users/validate` - ユーザー登録内容の検証

use std::sync::Arc;

use axum::{
   Json,
   extract::{
      Path,
      Query,
      State,
      rejection::{JsonRejection, PathRejection, QueryRejection},
   },
   http::StatusCode,
   response::IntoResponse,
};
use envelope_shared::{FieldErrors, GlobalResponse};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, repository::UserRepository};

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;
const MAX_NAME_LENGTH: usize = 100;

/// ユーザー API の共有状態
pub struct UserState {
   pub user_repository: Arc<dyn UserRepository>,
}

// --- リクエスト型 ---

/// ページ指定クエリパラメータ
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
   /// ページ番号（1 始まり、デフォルト 1）
   pub page:      Option<i64>,
   /// 1 ページの件数（デフォルト 10、最大 100）
   pub page_size: Option<i64>,
}

impl PageQuery {
   /// 範囲外の値を丸めた `(page, page_size)`
   pub fn normalized(&self) -> (i64, i64) {
      let page = self.page.unwrap_or(1).max(1);
      let page_size = self
         .page_size
         .unwrap_or(DEFAULT_PAGE_SIZE)
         .clamp(1, MAX_PAGE_SIZE);
      (page, page_size)
   }
}

/// ユーザー登録リクエスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
   pub name:  String,
   pub email: String,
}

impl CreateUserRequest {
   /// 全フィールドを検証し、失敗したメッセージをすべて集める
   pub fn validate(&self) -> FieldErrors {
      let mut errors = FieldErrors::new();

      let name = self.name.trim();
      if name.is_empty() {
         errors.add("name", "Name is required");
      } else if name.chars().count() > MAX_NAME_LENGTH {
         errors.add(
            "name",
            format!("Name must be at most {MAX_NAME_LENGTH} characters"),
         );
      }

      let email = self.email.trim();
      if email.is_empty() {
         errors.add("email", "Email is required");
      } else if !is_valid_email(email) {
         errors.add("email", "Email format is invalid");
      }

      errors
   }
}

/// `local@domain` 形式（`@` は 1 つだけ、両側が空でない）かどうか
fn is_valid_email(email: &str) -> bool {
   match email.split_once('@') {
      Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
      None => false,
   }
}

// --- ハンドラ ---

/// GET /api/users
pub async fn list_users(
   State(state): State<Arc<UserState>>,
) -> Result<impl IntoResponse, ApiError> {
   let users = state.user_repository.find_all().await?;

   let response = GlobalResponse::success_with_data(users, Some("Users retrieved"), None);
   Ok((StatusCode::OK, Json(response)))
}

/// GET /api/users/paginated
///
/// 範囲外のページを指定した場合は空の `data` と、実際のページ情報を返す。
pub async fn list_users_paginated(
   State(state): State<Arc<UserState>>,
   query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Query(query) = query?;
   let (page, page_size) = query.normalized();

   // page, page_size はともに正。usize に収まらないオフセットは全件の後ろとみなす
   let offset = usize::try_from((page - 1).saturating_mul(page_size)).unwrap_or(usize::MAX);
   let limit = usize::try_from(page_size).unwrap_or(usize::MAX);

   let result = state.user_repository.find_page(offset, limit).await?;
   let total_items = i64::try_from(result.total)
      .map_err(|_| anyhow::anyhow!("ユーザー件数が i64 の範囲を超えています: {}", result.total))?;

   let response = GlobalResponse::success_paginated(
      result.items,
      total_items,
      page,
      page_size,
      None,
      None,
   );
   Ok((StatusCode::OK, Json(response)))
}

/// GET /api/users/{id}
pub async fn get_user(
   State(state): State<Arc<UserState>>,
   id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Path(id) = id?;

   let user = state
      .user_repository
      .find_by_id(id)
      .await?
      .ok_or_else(|| ApiError::NotFound(format!("User {id} not found")))?;

   let response = GlobalResponse::success_with_data(user, Some("User retrieved"), None);
   Ok((StatusCode::OK, Json(response)))
}

/// POST /api/users/validate
///
/// 登録内容を検証するのみで、保存は行わない。
pub async fn validate_user(
   payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(request) = payload?;

   let errors = request.validate();
   if !errors.is_empty() {
      return Err(ApiError::Validation(errors));
   }

   let response = GlobalResponse::success_with_data(request, Some("User data is valid"), None);
   Ok((StatusCode::OK, Json(response)))
}

/// 未定義ルート
pub async fn route_not_found() -> ApiError {
   ApiError::NotFound("Route not found".to_string())
}
