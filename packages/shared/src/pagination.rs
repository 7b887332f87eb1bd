//! # ページネーション情報
//!
//! オフセット（ページ番号）ベースの一覧レスポンスに付与するメタデータ。
//!
//! ## JSON 形式
//!
//! ```json
//! {
//!   "totalItems": 100,
//!   "currentPage": 1,
//!   "pageSize": 10,
//!   "totalPages": 10,
//!   "hasPrevious": false,
//!   "hasNext": true
//! }
//! ```

use serde::{Deserialize, Serialize};

/// ページネーション情報
///
/// `total_pages` / `has_previous` / `has_next` は [`PaginationInfo::new`] で
/// 入力値から導出される。
///
/// - `total_pages = ceil(total_items / page_size)`
/// - `page_size <= 0` または `total_items <= 0` の場合 `total_pages = 0`
/// - `has_previous = current_page > 1`
/// - `has_next = current_page < total_pages`
///
/// ## 使用例
///
/// ```
/// use envelope_shared::PaginationInfo;
///
/// let page = PaginationInfo::new(95, 2, 10);
/// assert_eq!(page.total_pages, 10);
/// assert!(page.has_previous);
/// assert!(page.has_next);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaginationInfo {
   pub total_items:  i64,
   /// 現在のページ（1 始まり）
   pub current_page: i64,
   pub page_size:    i64,
   pub total_pages:  i64,
   pub has_previous: bool,
   pub has_next:     bool,
}

impl PaginationInfo {
   /// 件数・ページ番号・ページサイズからページネーション情報を作成する
   ///
   /// 不正な入力（`page_size <= 0` など）でも失敗せず、`total_pages = 0` として扱う。
   pub fn new(total_items: i64, current_page: i64, page_size: i64) -> Self {
      let total_pages = total_pages(total_items, page_size);

      Self {
         total_items,
         current_page,
         page_size,
         total_pages,
         has_previous: current_page > 1,
         has_next: current_page < total_pages,
      }
   }
}

/// 切り上げ除算で総ページ数を求める
///
/// 浮動小数点を経由しないため、`i64` の全域で誤差なく計算できる。
fn total_pages(total_items: i64, page_size: i64) -> i64 {
   if page_size <= 0 || total_items <= 0 {
      return 0;
   }
   total_items / page_size + i64::from(total_items % page_size != 0)
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   #[rstest]
   #[case(100, 10, 10)]
   #[case(95, 10, 10)]
   #[case(101, 10, 11)]
   #[case(1, 10, 1)]
   #[case(0, 10, 0)]
   #[case(50, 3, 17)]
   #[case(7, 1, 7)]
   fn test_total_pagesは切り上げ除算になる(
      #[case] total_items: i64,
      #[case] page_size: i64,
      #[case] expected: i64,
   ) {
      let page = PaginationInfo::new(total_items, 1, page_size);
      assert_eq!(page.total_pages, expected);
   }

   #[rstest]
   #[case(0)]
   #[case(-1)]
   #[case(i64::MIN)]
   fn test_page_sizeが0以下ならtotal_pagesは0(#[case] page_size: i64) {
      let page = PaginationInfo::new(100, 1, page_size);

      assert_eq!(page.total_pages, 0);
      assert!(!page.has_next);
   }

   #[test]
   fn test_total_itemsが負ならtotal_pagesは0() {
      let page = PaginationInfo::new(-5, 1, 10);
      assert_eq!(page.total_pages, 0);
   }

   #[test]
   fn test_最大値でもオーバーフローしない() {
      let page = PaginationInfo::new(i64::MAX, 1, 1);
      assert_eq!(page.total_pages, i64::MAX);

      let page = PaginationInfo::new(i64::MAX, 1, 2);
      assert_eq!(page.total_pages, i64::MAX / 2 + 1);
   }

   #[rstest]
   #[case(1, 10, false, true)]
   #[case(2, 10, true, true)]
   #[case(10, 10, true, false)]
   #[case(11, 10, true, false)]
   fn test_前後ページの有無(
      #[case] current_page: i64,
      #[case] expected_total_pages: i64,
      #[case] has_previous: bool,
      #[case] has_next: bool,
   ) {
      let page = PaginationInfo::new(100, current_page, 10);

      assert_eq!(page.total_pages, expected_total_pages);
      assert_eq!(page.has_previous, has_previous);
      assert_eq!(page.has_next, has_next);
   }

   #[test]
   fn test_空の一覧では前後ページともになし() {
      let page = PaginationInfo::new(0, 1, 10);

      assert_eq!(
         page,
         PaginationInfo {
            total_items:  0,
            current_page: 1,
            page_size:    10,
            total_pages:  0,
            has_previous: false,
            has_next:     false,
         }
      );
   }

   #[test]
   fn test_serializeでcamel_caseのキーになる() {
      let json = serde_json::to_value(PaginationInfo::new(100, 1, 10)).unwrap();

      assert_eq!(
         json,
         serde_json::json!({
            "totalItems": 100,
            "currentPage": 1,
            "pageSize": 10,
            "totalPages": 10,
            "hasPrevious": false,
            "hasNext": true
         })
      );
   }
}
