//! # Envelope API サーバー
//!
//! すべてのエンドポイントが [`GlobalResponse`](envelope_shared::GlobalResponse) で
//! 応答するリファレンス API。
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と失敗エンベロープへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`repository`] - ユーザーカタログ
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use envelope_api::{app_builder::build_app, repository::InMemoryUserRepository};
//!
//! let app = build_app(Arc::new(InMemoryUserRepository::seeded(100)));
//! ```

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod repository;
