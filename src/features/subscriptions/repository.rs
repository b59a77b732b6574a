use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use crate::features::subscriptions::models::Subscription;
use crate::shared::errors::{AppError, AppResult};

/// 永続化に使用する固定キー
const STORE_KEY: &str = "subscriptions";

/// サブスクリプション全件をシリアライズして保存する
///
/// # 引数
/// * `conn` - データベース接続
/// * `subscriptions` - 保存するサブスクリプション一覧（登録順）
///
/// # 戻り値
/// 成功時はOk(())、書き込み失敗時はエラー
pub fn save_all(conn: &Connection, subscriptions: &[Subscription]) -> AppResult<()> {
    let value = serde_json::to_string(subscriptions)?;

    conn.execute(
        "INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)",
        params![STORE_KEY, value],
    )
    .map_err(|e| AppError::Database(format!("サブスクリプションの保存に失敗しました: {e}")))?;

    debug!("サブスクリプション{}件を保存しました", subscriptions.len());
    Ok(())
}

/// 保存済みのサブスクリプション全件を読み込む
///
/// キーが存在しない場合は空の一覧を返す。保存データが壊れている場合は
/// エラーを返し、読み込みを中断する。
///
/// # 引数
/// * `conn` - データベース接続
///
/// # 戻り値
/// サブスクリプション一覧（保存時の順序）、または失敗時はエラー
pub fn load_all(conn: &Connection) -> AppResult<Vec<Subscription>> {
    let value: Option<String> = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![STORE_KEY],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| {
            AppError::Database(format!("サブスクリプションの読み込みに失敗しました: {e}"))
        })?;

    match value {
        Some(json) => {
            let subscriptions: Vec<Subscription> = serde_json::from_str(&json)?;
            debug!(
                "サブスクリプション{}件を読み込みました",
                subscriptions.len()
            );
            Ok(subscriptions)
        }
        None => Ok(Vec::new()),
    }
}
