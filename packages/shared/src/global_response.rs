//! # API レスポンスエンベロープ
//!
//! 公開 API の統一レスポンス形式 `GlobalResponse<T>` を提供する。
//!
//! ## 設計
//!
//! - 成功 / 失敗フラグ、メッセージ、コード、データ、エラー詳細、ページネーションを 1 つの型で表す
//! - 値はファクトリ関数でのみ作成し、作成後は変更しない（フィールドは非公開）
//! - 未設定フィールドの省略は serde の `skip_serializing_if` で行う。
//!   コンストラクタ側で出し分けはしない
//! - HTTP ステータスコードは持たない。ステータスの選択は呼び出し側（ハンドラ）の責務
//!
//! ## レスポンスの形
//!
//! | ファクトリ | success | data | errors | pagination |
//! |------------|---------|------|--------|------------|
//! | `success` | true | - | - | - |
//! | `success_with_data` | true | ✓ | - | - |
//! | `success_paginated` | true | ✓ | - | ✓ |
//! | `failure` / `not_found` / `unauthorized` / `server_error` | false | - | - | - |
//! | `failure_with_errors` / `validation_failure` / `unexpected_error` | false | - | ✓ | - |

use std::{any, error::Error, fmt};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{FieldErrors, PaginationInfo, messages};

/// 公開 API の統一レスポンス型
///
/// ## JSON 形式
///
/// ```json
/// {
///   "success": true,
///   "message": "Data retrieved successfully",
///   "data": [...],
///   "pagination": { "totalItems": 100, "currentPage": 1, ... }
/// }
/// ```
///
/// `None` のフィールドは出力されない（`null` にはならない）。
/// `data` はキーがあれば値が `null` でも `Some` として復元する
/// （`T` 自体が `null` にシリアライズされる型でも往復で形が変わらない）。
///
/// ## 使用例
///
/// ```
/// use envelope_shared::GlobalResponse;
///
/// let response = GlobalResponse::success_with_data(vec![1, 2, 3], None, None);
/// assert!(response.is_success());
/// assert_eq!(response.data(), Some(&vec![1, 2, 3]));
///
/// let json = serde_json::to_value(&response).unwrap();
/// assert!(json.get("errors").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GlobalResponse<T> {
   success:    bool,
   #[serde(skip_serializing_if = "Option::is_none")]
   message:    Option<String>,
   #[serde(skip_serializing_if = "Option::is_none")]
   code:       Option<String>,
   #[serde(
      default,
      skip_serializing_if = "Option::is_none",
      deserialize_with = "deserialize_present"
   )]
   data:       Option<T>,
   #[serde(skip_serializing_if = "Option::is_none")]
   errors:     Option<Value>,
   #[serde(skip_serializing_if = "Option::is_none")]
   pagination: Option<PaginationInfo>,
}

impl<T> GlobalResponse<T> {
   fn failure_shape(message: String, code: Option<String>, errors: Option<Value>) -> Self {
      Self {
         success: false,
         message: Some(message),
         code,
         data: None,
         errors,
         pagination: None,
      }
   }

   // --- 成功レスポンス ---

   /// データなしの成功レスポンス
   ///
   /// `message` 省略時は [`messages::SUCCESS`]。
   pub fn success(message: Option<&str>) -> Self {
      Self {
         success:    true,
         message:    Some(message.unwrap_or(messages::SUCCESS).to_owned()),
         code:       None,
         data:       None,
         errors:     None,
         pagination: None,
      }
   }

   /// データ付きの成功レスポンス
   pub fn success_with_data(data: T, message: Option<&str>, code: Option<&str>) -> Self {
      Self {
         success:    true,
         message:    Some(message.unwrap_or(messages::SUCCESS).to_owned()),
         code:       code.map(str::to_owned),
         data:       Some(data),
         errors:     None,
         pagination: None,
      }
   }

   /// ページネーション付きの成功レスポンス
   ///
   /// ページ情報は [`PaginationInfo::new`] で導出する。
   /// `message` 省略時は [`messages::PAGINATED_SUCCESS`]。
   pub fn success_paginated(
      data: T,
      total_items: i64,
      current_page: i64,
      page_size: i64,
      message: Option<&str>,
      code: Option<&str>,
   ) -> Self {
      Self {
         success:    true,
         message:    Some(message.unwrap_or(messages::PAGINATED_SUCCESS).to_owned()),
         code:       code.map(str::to_owned),
         data:       Some(data),
         errors:     None,
         pagination: Some(PaginationInfo::new(total_items, current_page, page_size)),
      }
   }

   // --- 失敗レスポンス ---

   pub fn failure(message: impl Into<String>, code: Option<&str>) -> Self {
      Self::failure_shape(message.into(), code.map(str::to_owned), None)
   }

   /// エラー詳細付きの失敗レスポンス
   ///
   /// `errors` には任意の診断情報（JSON 値）を入れられる。
   pub fn failure_with_errors(message: impl Into<String>, errors: impl Into<Value>) -> Self {
      Self::failure_shape(message.into(), None, Some(errors.into()))
   }

   /// バリデーションエラー
   ///
   /// `errors` は `{ "フィールド名": ["メッセージ", ...] }` 形式になる。
   pub fn validation_failure(message: impl Into<String>, field_errors: FieldErrors) -> Self {
      Self::failure_with_errors(message, field_errors)
   }

   pub fn not_found(message: Option<&str>) -> Self {
      Self::failure(message.unwrap_or(messages::NOT_FOUND), None)
   }

   pub fn unauthorized(message: Option<&str>) -> Self {
      Self::failure(message.unwrap_or(messages::UNAUTHORIZED), None)
   }

   pub fn server_error(message: Option<&str>) -> Self {
      Self::failure(message.unwrap_or(messages::SERVER_ERROR), None)
   }

   /// 予期しないエラーから失敗レスポンスを作成する
   ///
   /// `errors` にはエラーの型名と `Display` 表現のみを入れる。
   /// `source()` チェーンやバックトレースは含めない（呼び出し側でログに出すこと）。
   pub fn unexpected_error<E>(error: &E) -> Self
   where
      E: Error + ?Sized,
   {
      let errors = serde_json::json!({
         "type": short_type_name::<E>(),
         "message": error.to_string(),
      });
      Self::failure_shape(messages::UNEXPECTED_ERROR.to_owned(), None, Some(errors))
   }

   // --- アクセサ ---

   pub fn is_success(&self) -> bool {
      self.success
   }

   pub fn is_failure(&self) -> bool {
      !self.success
   }

   pub fn message(&self) -> Option<&str> {
      self.message.as_deref()
   }

   pub fn code(&self) -> Option<&str> {
      self.code.as_deref()
   }

   pub fn data(&self) -> Option<&T> {
      self.data.as_ref()
   }

   /// データを取り出す（エンベロープは消費される）
   pub fn into_data(self) -> Option<T> {
      self.data
   }

   pub fn errors(&self) -> Option<&Value> {
      self.errors.as_ref()
   }

   pub fn pagination(&self) -> Option<&PaginationInfo> {
      self.pagination.as_ref()
   }
}

impl<T> Default for GlobalResponse<T> {
   /// 既定メッセージ付きの成功レスポンス
   fn default() -> Self {
      Self::success(None)
   }
}

impl<T> fmt::Display for GlobalResponse<T> {
   /// ログ出力用の 1 行要約（データ本体は含めない）
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(
         f,
         "GlobalResponse {{ success: {}, message: {:?} }}",
         self.success, self.message
      )
   }
}

/// キーが存在する値を常に `Some` で包む
///
/// キー欠落時は `#[serde(default)]` により `None` になる。
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
   D: Deserializer<'de>,
   T: Deserialize<'de>,
{
   T::deserialize(deserializer).map(Some)
}

/// モジュールパスとジェネリクスを除いた型名
///
/// `core::num::error::ParseIntError` → `ParseIntError`
fn short_type_name<E: ?Sized>() -> &'static str {
   let full = any::type_name::<E>();
   let base = full.split('<').next().unwrap_or(full);
   base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;
   use serde_json::json;

   use super::*;

   #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
   struct TestUser {
      id:   u32,
      name: String,
   }

   fn users() -> Vec<TestUser> {
      vec![
         TestUser {
            id:   1,
            name: "Juan".to_string(),
         },
         TestUser {
            id:   2,
            name: "Maria".to_string(),
         },
      ]
   }

   // ===== 成功レスポンス =====

   #[test]
   fn test_successはメッセージ省略時に既定文言になる() {
      let response: GlobalResponse<()> = GlobalResponse::success(None);

      assert!(response.is_success());
      assert_eq!(response.message(), Some(messages::SUCCESS));
      assert_eq!(
         serde_json::to_value(&response).unwrap(),
         json!({ "success": true, "message": messages::SUCCESS })
      );
   }

   #[test]
   fn test_successは指定メッセージを使う() {
      let response: GlobalResponse<()> = GlobalResponse::success(Some("Custom"));
      assert_eq!(response.message(), Some("Custom"));
   }

   #[test]
   fn test_success_with_dataでデータとコードが設定される() {
      let response = GlobalResponse::success_with_data(users(), Some("Users"), Some("USERS_OK"));

      assert!(response.is_success());
      assert_eq!(response.data(), Some(&users()));
      assert_eq!(response.code(), Some("USERS_OK"));
      assert!(response.pagination().is_none());
      assert!(response.errors().is_none());
   }

   #[test]
   fn test_success_with_dataのコード省略時はcodeが出力されない() {
      let response = GlobalResponse::success_with_data(1, None, None);
      let json = serde_json::to_value(&response).unwrap();

      assert_eq!(
         json,
         json!({ "success": true, "message": messages::SUCCESS, "data": 1 })
      );
   }

   #[test]
   fn test_success_paginatedで100件10件ずつなら10ページ() {
      let response = GlobalResponse::success_paginated(users(), 100, 1, 10, None, None);
      let json = serde_json::to_value(&response).unwrap();

      assert_eq!(response.message(), Some(messages::PAGINATED_SUCCESS));
      assert_eq!(
         json["pagination"],
         json!({
            "totalItems": 100,
            "currentPage": 1,
            "pageSize": 10,
            "totalPages": 10,
            "hasPrevious": false,
            "hasNext": true
         })
      );
      assert_eq!(json["data"][1]["name"], "Maria");
   }

   #[test]
   fn test_success_paginatedで空の一覧は0ページ() {
      let response = GlobalResponse::success_paginated(Vec::<TestUser>::new(), 0, 1, 10, None, None);
      let pagination = response.pagination().unwrap();

      assert_eq!(pagination.total_pages, 0);
      assert!(!pagination.has_previous);
      assert!(!pagination.has_next);
      assert_eq!(response.data(), Some(&Vec::new()));
   }

   #[test]
   fn test_success_paginatedでpage_sizeが0でも失敗しない() {
      let response = GlobalResponse::success_paginated(users(), 100, 1, 0, None, None);
      assert_eq!(response.pagination().unwrap().total_pages, 0);
   }

   // ===== 失敗レスポンス =====

   #[test]
   fn test_failureはdataとerrorsを出力しない() {
      let response: GlobalResponse<TestUser> = GlobalResponse::failure("bad input", None);
      let json = serde_json::to_value(&response).unwrap();

      assert!(response.is_failure());
      assert_eq!(json, json!({ "success": false, "message": "bad input" }));
   }

   #[test]
   fn test_failureでコードを指定できる() {
      let response: GlobalResponse<()> = GlobalResponse::failure("conflict", Some("CONFLICT"));
      assert_eq!(response.code(), Some("CONFLICT"));
   }

   #[test]
   fn test_failure_with_errorsで任意の診断情報を持てる() {
      let detail = json!({ "code": "DB_CONNECTION_FAILED", "detail": "connection refused" });
      let response: GlobalResponse<()> =
         GlobalResponse::failure_with_errors("Internal server error", detail.clone());

      assert_eq!(response.errors(), Some(&detail));
      assert!(response.data().is_none());
   }

   #[test]
   fn test_validation_failureのerrorsはフィールドマップになる() {
      let field_errors = FieldErrors::new().with("email", "required");
      let response: GlobalResponse<()> = GlobalResponse::validation_failure("invalid", field_errors);
      let json = serde_json::to_value(&response).unwrap();

      assert_eq!(
         json,
         json!({
            "success": false,
            "message": "invalid",
            "errors": { "email": ["required"] }
         })
      );
   }

   #[rstest]
   #[case(GlobalResponse::not_found(None), messages::NOT_FOUND)]
   #[case(GlobalResponse::unauthorized(None), messages::UNAUTHORIZED)]
   #[case(GlobalResponse::server_error(None), messages::SERVER_ERROR)]
   #[case(GlobalResponse::not_found(Some("User 999 not found")), "User 999 not found")]
   #[case(GlobalResponse::unauthorized(Some("Token expired")), "Token expired")]
   #[case(GlobalResponse::server_error(Some("Database down")), "Database down")]
   fn test_定型の失敗レスポンス(#[case] response: GlobalResponse<()>, #[case] expected: &str) {
      assert!(response.is_failure());
      assert_eq!(response.message(), Some(expected));
      assert!(response.code().is_none());
      assert!(response.errors().is_none());
   }

   #[derive(Debug, thiserror::Error)]
   #[error("operation not valid in current state")]
   struct InvalidOperation;

   #[test]
   fn test_unexpected_errorは型名とメッセージをerrorsに入れる() {
      let response: GlobalResponse<()> = GlobalResponse::unexpected_error(&InvalidOperation);

      assert_eq!(response.message(), Some(messages::UNEXPECTED_ERROR));
      assert_eq!(
         response.errors(),
         Some(&json!({
            "type": "InvalidOperation",
            "message": "operation not valid in current state"
         }))
      );
   }

   #[test]
   fn test_unexpected_errorは標準ライブラリのエラーも受け取れる() {
      let error = "abc".parse::<i32>().unwrap_err();
      let response: GlobalResponse<()> = GlobalResponse::unexpected_error(&error);

      assert_eq!(response.errors().unwrap()["type"], "ParseIntError");
   }

   // ===== トレイト実装 =====

   #[test]
   fn test_defaultは既定メッセージの成功レスポンス() {
      let response: GlobalResponse<()> = GlobalResponse::default();
      assert_eq!(response, GlobalResponse::success(None));
   }

   #[test]
   fn test_displayは成功フラグとメッセージのみを出力する() {
      let response = GlobalResponse::success_with_data(users(), Some("Users"), None);

      assert_eq!(
         response.to_string(),
         r#"GlobalResponse { success: true, message: Some("Users") }"#
      );
   }

   // ===== シリアライズ =====

   #[rstest]
   #[case(GlobalResponse::success(None))]
   #[case(GlobalResponse::success_with_data(users(), Some("Users"), Some("OK")))]
   #[case(GlobalResponse::success_paginated(users(), 50, 2, 3, None, None))]
   #[case(GlobalResponse::failure("bad input", Some("BAD_REQUEST")))]
   #[case(GlobalResponse::validation_failure("invalid", FieldErrors::new().with("name", "blank")))]
   #[case(GlobalResponse::failure_with_errors(
      "Internal server error",
      json!({ "code": "DB_CONNECTION_FAILED", "retry": { "after": 30, "hosts": ["db1", "db2"] } })
   ))]
   #[case(GlobalResponse::unexpected_error(&InvalidOperation))]
   #[case(GlobalResponse::not_found(None))]
   #[case(GlobalResponse::unauthorized(Some("Token expired")))]
   #[case(GlobalResponse::server_error(None))]
   fn test_serialize_deserializeのラウンドトリップ(#[case] original: GlobalResponse<Vec<TestUser>>) {
      let json = serde_json::to_string(&original).unwrap();
      let deserialized: GlobalResponse<Vec<TestUser>> = serde_json::from_str(&json).unwrap();

      assert_eq!(deserialized, original);
   }

   #[rstest]
   #[case(GlobalResponse::success_with_data(None, None, None))]
   #[case(GlobalResponse::success_with_data(Some(7), Some("Found"), None))]
   #[case(GlobalResponse::success_paginated(None, 0, 1, 10, None, None))]
   #[case(GlobalResponse::failure("bad input", None))]
   fn test_nullになるデータもラウンドトリップで保持される(#[case] original: GlobalResponse<Option<u32>>) {
      let json = serde_json::to_string(&original).unwrap();
      let deserialized: GlobalResponse<Option<u32>> = serde_json::from_str(&json).unwrap();

      assert_eq!(deserialized, original);
   }

   #[test]
   fn test_nullのdataキーはsome_noneとして復元される() {
      let response: GlobalResponse<Option<u32>> =
         serde_json::from_str(r#"{"success":true,"data":null}"#).unwrap();

      assert_eq!(response.data(), Some(&None));
   }

   #[test]
   fn test_未設定フィールドはnullではなく省略される() {
      let response: GlobalResponse<()> = GlobalResponse::success(None);
      let json = serde_json::to_string(&response).unwrap();

      assert!(!json.contains("null"));
      assert!(!json.contains("data"));
      assert!(!json.contains("pagination"));
      assert!(!json.contains("code"));
   }

   #[test]
   fn test_欠けたフィールドを含むjsonをデシリアライズできる() {
      let response: GlobalResponse<String> = serde_json::from_str(r#"{"success":false}"#).unwrap();

      assert!(response.is_failure());
      assert!(response.message().is_none());
      assert!(response.data().is_none());
   }
}
