use std::path::{Path, PathBuf};

use log::info;
use rusqlite::Connection;

use crate::shared::errors::{AppError, AppResult};

/// デフォルトのデータベースファイルパスを取得する
///
/// # 戻り値
/// ユーザーデータディレクトリ配下のデータベースパス、または失敗時はエラー
pub fn default_db_path() -> AppResult<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| AppError::configuration("ユーザーデータディレクトリを特定できません"))?;
    Ok(base.join("sabukan").join("sabukan.db"))
}

/// データベース接続を開き、スキーマを初期化する
///
/// # 引数
/// * `path` - データベースファイルのパス
///
/// # 戻り値
/// データベース接続、または失敗時はエラー
///
/// # 処理内容
/// 1. 親ディレクトリを作成
/// 2. データベース接続を開く
/// 3. キーバリューストアのスキーマを初期化
pub fn open_database(path: &Path) -> AppResult<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)
        .map_err(|e| AppError::Database(format!("データベースのオープンに失敗しました: {e}")))?;

    init_schema(&conn)?;

    info!("データベースを初期化しました: {}", path.display());
    Ok(conn)
}

/// キーバリューストアのスキーマを初期化する
///
/// # 引数
/// * `conn` - データベース接続
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラー
pub fn init_schema(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}
