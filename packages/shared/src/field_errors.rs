//! # フィールド単位のバリデーションエラー
//!
//! `validation_failure` レスポンスの `errors` に入る
//! `{ "フィールド名": ["メッセージ", ...] }` 形式のマップ。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// フィールド名 → エラーメッセージ一覧
///
/// キーは辞書順に保持されるため、シリアライズ結果は常に同じ順序になる。
/// 同一フィールドのメッセージは追加順を保つ。
/// イテレータから作る場合、メッセージが空のフィールドも `[]` として残る。
///
/// ## 使用例
///
/// ```
/// use envelope_shared::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// errors.add("email", "required");
/// errors.add("email", "must contain @");
///
/// assert_eq!(
///     serde_json::to_value(&errors).unwrap(),
///     serde_json::json!({ "email": ["required", "must contain @"] })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
   pub fn new() -> Self {
      Self::default()
   }

   /// フィールドにエラーメッセージを追加する
   pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
      self.0.entry(field.into()).or_default().push(message.into());
   }

   /// [`add`](Self::add) のメソッドチェーン版
   pub fn with(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
      self.add(field, message);
      self
   }

   pub fn is_empty(&self) -> bool {
      self.0.is_empty()
   }

   /// エラーを持つフィールドの数
   pub fn len(&self) -> usize {
      self.0.len()
   }

   pub fn get(&self, field: &str) -> Option<&[String]> {
      self.0.get(field).map(Vec::as_slice)
   }

   pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
      self.0.iter().map(|(field, messages)| (field.as_str(), messages.as_slice()))
   }
}

impl<K, V> FromIterator<(K, V)> for FieldErrors
where
   K: Into<String>,
   V: IntoIterator,
   V::Item: Into<String>,
{
   fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
      let mut errors = Self::new();
      for (field, messages) in iter {
         errors
            .0
            .entry(field.into())
            .or_default()
            .extend(messages.into_iter().map(Into::into));
      }
      errors
   }
}

impl From<FieldErrors> for Value {
   fn from(errors: FieldErrors) -> Self {
      Value::Object(
         errors
            .0
            .into_iter()
            .map(|(field, messages)| (field, Value::from(messages)))
            .collect(),
      )
   }
}
