//! # Envelope API サーバー
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run --bin envelope-api
//!
//! # JSON ログ
//! LOG_FORMAT=json API_PORT=8080 cargo run --bin envelope-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use envelope_api::{app_builder::build_app, config::ApiConfig, repository::InMemoryUserRepository};
use envelope_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   let tracing_config = TracingConfig::from_env("api");
   init_tracing(&tracing_config);
   let _tracing_guard = tracing::info_span!("app", service = %tracing_config.service_name).entered();

   let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      "API サーバーを起動します: {} (ユーザー {} 件)",
      config.bind_addr(),
      config.seed_users
   );

   let user_repository = Arc::new(InMemoryUserRepository::seeded(config.seed_users));
   let app = build_app(user_repository);

   let addr: SocketAddr = config
      .bind_addr()
      .parse()
      .with_context(|| format!("アドレスのパースに失敗しました: {}", config.bind_addr()))?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!(%addr, "API サーバーが起動しました");

   axum::serve(listener, app)
      .with_graceful_shutdown(shutdown_signal())
      .await?;

   tracing::info!("API サーバーを停止しました");
   Ok(())
}

/// Ctrl-C（Unix では SIGTERM も）を待つ
async fn shutdown_signal() {
   let ctrl_c = async {
      if let Err(e) = tokio::signal::ctrl_c().await {
         tracing::error!("Ctrl-C ハンドラの登録に失敗しました: {}", e);
         std::future::pending::<()>().await;
      }
   };

   #[cfg(unix)]
   let terminate = async {
      match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
         Ok(mut signal) => {
            signal.recv().await;
         }
         Err(e) => {
            tracing::error!("SIGTERM ハンドラの登録に失敗しました: {}", e);
            std::future::pending::<()>().await;
         }
      }
   };

   #[cfg(not(unix))]
   let terminate = std::future::pending::<()>();

   tokio::select! {
      () = ctrl_c => {},
      () = terminate => {},
   }

   tracing::info!("シャットダウンシグナルを受信しました");
}
