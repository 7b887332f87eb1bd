//! # ヘルスチェックハンドラ
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Operation completed successfully",
//!   "data": { "status": "healthy", "version": "0.1.0" }
//! }
//! ```

use axum::Json;
use envelope_shared::GlobalResponse;
use serde::{Deserialize, Serialize};

/// ヘルスチェックの中身
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthData {
   /// 稼働状態（常に `"healthy"`）
   pub status:  String,
   /// アプリケーションバージョン（Cargo.toml から取得）
   pub version: String,
}

/// ヘルスチェックエンドポイント
///
/// 依存サービスは確認せず、アプリケーション自体の起動状態のみを返す。常に 200 OK。
pub async fn health_check() -> Json<GlobalResponse<HealthData>> {
   Json(GlobalResponse::success_with_data(
      HealthData {
         status:  "healthy".to_string(),
         version: env!("CARGO_PKG_VERSION").to_string(),
      },
      None,
      None,
   ))
}
