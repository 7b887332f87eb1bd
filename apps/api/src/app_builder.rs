//! # アプリケーション構築
//!
//! State の組み立てとルーター構築を担当する。
//! バイナリはサーバー起動に集中し、統合テストはここで作ったルーターを直接叩く。

use std::sync::Arc;

use axum::{
   Router,
   routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
   handler::{
      UserState,
      get_user,
      health_check,
      list_users,
      list_users_paginated,
      route_not_found,
      validate_user,
   },
   repository::UserRepository,
};

/// ルーターを構築する
///
/// `/api/users/paginated` と `/api/users/validate` は静的セグメントのため
/// `/api/users/{id}` より優先してマッチする。
pub fn build_app(user_repository: Arc<dyn UserRepository>) -> Router {
   let user_state = Arc::new(UserState { user_repository });

   let user_routes = Router::new()
      .route("/api/users", get(list_users))
      .route("/api/users/paginated", get(list_users_paginated))
      .route("/api/users/validate", post(validate_user))
      .route("/api/users/{id}", get(get_user))
      .with_state(user_state);

   Router::new()
      .route("/health", get(health_check))
      .merge(user_routes)
      .fallback(route_not_found)
      .layer(TraceLayer::new_for_http())
}
