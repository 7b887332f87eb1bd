//! # API エラーハンドリング
//!
//! ハンドラのエラー定義と、失敗エンベロープへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! リポジトリ / 抽出器のエラー
//!        ↓ 変換（From）
//! API エラー (ApiError)
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + GlobalResponse<()>)
//! ```
//!
//! ステータスコードの選択はここで行う。`GlobalResponse` 自体はステータスを持たない。

use axum::{
   Json,
   extract::rejection::{JsonRejection, PathRejection, QueryRejection},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use envelope_shared::{FieldErrors, GlobalResponse};
use thiserror::Error;

/// バリデーション失敗時のメッセージ
pub const VALIDATION_MESSAGE: &str = "Validation failed";

/// 不正リクエストのコード
pub const BAD_REQUEST_CODE: &str = "BAD_REQUEST";

/// API 層で発生するエラー
///
/// `IntoResponse` を実装しているため、ハンドラは `Result<_, ApiError>` を返すだけでよい。
///
/// | ApiError | HTTP Status | エンベロープ |
/// |----------|-------------|--------------|
/// | NotFound | 404 | `not_found` |
/// | Validation | 422 | `validation_failure` |
/// | BadRequest | 400 | `failure` (`code = "BAD_REQUEST"`) |
/// | Internal | 500 | `server_error` |
#[derive(Debug, Error)]
pub enum ApiError {
   /// リソースが見つからない
   #[error("{0}")]
   NotFound(String),

   /// 入力値のフィールド単位の検証エラー
   #[error("バリデーションエラー: {} フィールド", .0.len())]
   Validation(FieldErrors),

   /// リクエストの形式そのものが不正（クエリ・パス・ボディの抽出失敗）
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// 内部サーバーエラー
   ///
   /// 詳細はログにのみ出力し、クライアントには既定メッセージだけを返す。
   #[error("内部サーバーエラー")]
   Internal(#[from] anyhow::Error),
}

impl ApiError {
   pub fn status_code(&self) -> StatusCode {
      match self {
         ApiError::NotFound(_) => StatusCode::NOT_FOUND,
         ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
         ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
         ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
      }
   }

   /// 失敗エンベロープに変換する
   pub fn into_envelope(self) -> GlobalResponse<()> {
      match self {
         ApiError::NotFound(message) => GlobalResponse::not_found(Some(&message)),
         ApiError::Validation(field_errors) => {
            tracing::debug!(fields = field_errors.len(), "バリデーションエラー");
            GlobalResponse::validation_failure(VALIDATION_MESSAGE, field_errors)
         }
         ApiError::BadRequest(message) => GlobalResponse::failure(message, Some(BAD_REQUEST_CODE)),
         ApiError::Internal(err) => {
            tracing::error!(
               error.category = "internal",
               error.kind = "unexpected",
               "内部エラー: {:?}",
               err
            );
            GlobalResponse::server_error(None)
         }
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let status = self.status_code();
      (status, Json(self.into_envelope())).into_response()
   }
}

impl From<QueryRejection> for ApiError {
   fn from(rejection: QueryRejection) -> Self {
      ApiError::BadRequest(rejection.body_text())
   }
}

impl From<PathRejection> for ApiError {
   fn from(rejection: PathRejection) -> Self {
      ApiError::BadRequest(rejection.body_text())
   }
}

impl From<JsonRejection> for ApiError {
   fn from(rejection: JsonRejection) -> Self {
      ApiError::BadRequest(rejection.body_text())
   }
}
