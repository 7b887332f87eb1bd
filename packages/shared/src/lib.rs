//! # Envelope 共有ライブラリ
//!
//! API レスポンスの統一エンベロープ [`GlobalResponse`] と、その付属型を提供する。
//!
//! ## 設計方針
//!
//! - 純粋なデータ構造のみを置く（`Serialize` / `Deserialize`）
//! - HTTP フレームワークには依存しない。axum の `IntoResponse` 変換は各サービスの責務
//! - OpenAPI スキーマは `openapi` feature、トレーシング初期化は `observability` feature で有効化する

pub mod field_errors;
pub mod global_response;
pub mod messages;
pub mod observability;
pub mod pagination;

pub use field_errors::FieldErrors;
pub use global_response::GlobalResponse;
pub use pagination::PaginationInfo;
