/// 設定モジュール
///
/// 実行環境の判定とログシステムの初期化を提供します。
pub mod environment;

pub use environment::{get_environment, initialize_logging_system, Environment, EnvironmentConfig};
