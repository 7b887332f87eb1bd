//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `3000` | ポート番号 |
//! | `API_SEED_USERS` | No | `100` | 起動時に投入するユーザー数 |
//! | `LOG_FORMAT` | No | `pretty` | ログ形式（`json` / `pretty`、observability 側で読む） |

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SEED_USERS: usize = 100;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   /// 値が期待する形式でない
   #[error("{name} は有効な{expected}である必要があります: {value:?}")]
   InvalidValue {
      name:     &'static str,
      expected: &'static str,
      value:    String,
   },
}

/// API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
   /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
   pub host:       String,
   pub port:       u16,
   /// インメモリのユーザーカタログに投入する件数
   pub seed_users: usize,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|key| env::var(key).ok())
   }

   /// 任意のキー検索関数から設定を読み込む
   ///
   /// テストでは環境変数を書き換えずに済むよう、こちらを直接使う。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let host = lookup("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

      let port = match lookup("API_PORT") {
         Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            name: "API_PORT",
            expected: "ポート番号",
            value,
         })?,
         None => DEFAULT_PORT,
      };

      let seed_users = match lookup("API_SEED_USERS") {
         Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            name: "API_SEED_USERS",
            expected: "件数",
            value,
         })?,
         None => DEFAULT_SEED_USERS,
      };

      Ok(Self {
         host,
         port,
         seed_users,
      })
   }

   /// `host:port` 形式のバインドアドレス
   pub fn bind_addr(&self) -> String {
      format!("{}:{}", self.host, self.port)
   }
}
