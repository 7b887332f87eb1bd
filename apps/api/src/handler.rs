//! # HTTP リクエストハンドラ
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - 成功・失敗とも本文は [`GlobalResponse`](envelope_shared::GlobalResponse)。
//!   ステータスコードはハンドラ（失敗時は [`ApiError`](crate::error::ApiError)）が決める
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs   # ヘルスチェック
//!     └── user.rs     # ユーザー一覧・詳細・検証
//! ```

pub mod health;
pub mod user;

pub use health::health_check;
pub use user::{
   UserState,
   get_user,
   list_users,
   list_users_paginated,
   route_not_found,
   validate_user,
};
