//! # 既定メッセージ
//!
//! メッセージ省略時に [`GlobalResponse`](crate::GlobalResponse) のファクトリが使う定型文。

/// 成功（データなし / データあり）
pub const SUCCESS: &str = "Operation completed successfully";

/// ページネーション付き一覧取得の成功
pub const PAGINATED_SUCCESS: &str = "Data retrieved successfully";

/// リソースが見つからない
pub const NOT_FOUND: &str = "Resource not found";

/// 認証されていない
pub const UNAUTHORIZED: &str = "Unauthorized";

/// 内部サーバーエラー
pub const SERVER_ERROR: &str = "Internal server error";

/// 予期しないエラー
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";
