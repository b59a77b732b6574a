/// 共有モジュール
///
/// アプリケーション全体で使用される共通コード（エラー型、設定、
/// データベース接続、ユーティリティ）を提供します。
pub mod config;
pub mod database;
pub mod errors;
pub mod utils;
