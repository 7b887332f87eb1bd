//! # ユーザーリポジトリ
//!
//! ハンドラが参照するユーザーカタログ。永続化は行わず、起動時に投入した
//! 読み取り専用のデータを返す。
//!
//! ハンドラは [`UserRepository`] トレイト経由でのみアクセスするため、
//! テストでは失敗するリポジトリに差し替えられる。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// ユーザー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
   pub id:    i64,
   pub name:  String,
   pub email: String,
}

/// 1 ページ分の取得結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPage {
   pub items: Vec<User>,
   /// ページングに関係なく全件数
   pub total: usize,
}

/// ユーザーの読み取りインターフェース
#[async_trait]
pub trait UserRepository: Send + Sync {
   /// 全件を ID 昇順で取得する
   async fn find_all(&self) -> anyhow::Result<Vec<User>>;

   /// `offset` 件目から最大 `limit` 件を取得する
   ///
   /// `offset` が全件数以上なら `items` は空になる。
   async fn find_page(&self, offset: usize, limit: usize) -> anyhow::Result<UserPage>;

   async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>>;
}

/// メモリ上の固定カタログ
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
   users: Vec<User>,
}

impl InMemoryUserRepository {
   /// 与えられたユーザーで作成する（ID 昇順に並べ替える）
   pub fn new(mut users: Vec<User>) -> Self {
      users.sort_by_key(|user| user.id);
      Self { users }
   }

   /// `User1` .. `User{count}` を投入したカタログを作成する
   pub fn seeded(count: usize) -> Self {
      let users = (1_i64..)
         .take(count)
         .map(|id| User {
            id,
            name:  format!("User{id}"),
            email: format!("user{id}@example.com"),
         })
         .collect();
      Self { users }
   }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
   async fn find_all(&self) -> anyhow::Result<Vec<User>> {
      Ok(self.users.clone())
   }

   async fn find_page(&self, offset: usize, limit: usize) -> anyhow::Result<UserPage> {
      let items = self.users.iter().skip(offset).take(limit).cloned().collect();
      Ok(UserPage {
         items,
         total: self.users.len(),
      })
   }

   async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
      Ok(self.users.iter().find(|user| user.id == id).cloned())
   }
}
