/// カテゴリ機能モジュール
///
/// このモジュールは、支出集計に使用するカテゴリの定義を提供します：
/// - 設定時に確定するカテゴリ集合
/// - 一覧表示用のカテゴリ絞り込み条件
pub mod models;

// 公開インターフェース
pub use models::{CategoryFilter, CategorySet, DEFAULT_CATEGORY};
