use log::{debug, info};
use rusqlite::Connection;

use super::models::Subscription;
use super::repository;
use crate::features::categories::models::CategoryFilter;
use crate::shared::database::connection::init_schema;
use crate::shared::errors::AppResult;

/// サブスクリプションの正本集合
///
/// メモリ上の一覧が正本で、変更のたびに全件をキーバリューストアへ書き戻す。
/// 書き込みに失敗した場合はエラーを呼び出し元へ返す（リトライはしない）。
pub struct SubscriptionStore {
    conn: Connection,
    subscriptions: Vec<Subscription>,
}

impl SubscriptionStore {
    /// 保存済みデータから復元してストアを開く
    ///
    /// # 引数
    /// * `conn` - データベース接続
    ///
    /// # 戻り値
    /// ストア、または保存データが壊れている場合はエラー
    pub fn new(conn: Connection) -> AppResult<Self> {
        init_schema(&conn)?;
        let subscriptions = repository::load_all(&conn)?;

        info!(
            "サブスクリプションストアを初期化しました: {}件",
            subscriptions.len()
        );
        Ok(Self {
            conn,
            subscriptions,
        })
    }

    /// サブスクリプションを追加して永続化する
    ///
    /// # 引数
    /// * `subscription` - 追加するサブスクリプション（バリデーション済み）
    ///
    /// # 戻り値
    /// 成功時はOk(())、書き込み失敗時はエラー
    pub fn add(&mut self, subscription: Subscription) -> AppResult<()> {
        self.subscriptions.push(subscription);
        repository::save_all(&self.conn, &self.subscriptions)
    }

    /// 指定IDのサブスクリプションを削除して永続化する
    ///
    /// 該当IDがない場合も何もせず正常終了する。
    ///
    /// # 引数
    /// * `id` - 削除するサブスクリプションのID
    ///
    /// # 戻り値
    /// 成功時はOk(())、書き込み失敗時はエラー
    pub fn remove(&mut self, id: &str) -> AppResult<()> {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);

        if self.subscriptions.len() == before {
            debug!("削除対象のサブスクリプションが見つかりません: id={id}");
        }

        repository::save_all(&self.conn, &self.subscriptions)
    }

    /// 全件を登録順で返す
    pub fn list(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// カテゴリ絞り込み条件に一致するサブスクリプションを返す
    ///
    /// # 引数
    /// * `filter` - 絞り込み条件
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<&Subscription> {
        self.subscriptions
            .iter()
            .filter(|sub| filter.matches(&sub.category))
            .collect()
    }

    /// 登録件数を返す
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// 登録が1件もないかどうかを返す
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::subscriptions::models::BillingCycle;
    use crate::shared::database::connection::open_database;

    fn subscription(name: &str, category: &str) -> Subscription {
        Subscription {
            id: format!("id-{name}"),
            name: name.to_string(),
            price: 980.0,
            cycle: BillingCycle::Monthly,
            payment_date: "毎月10日".to_string(),
            category: category.to_string(),
            created_at: "2024-01-01T00:00:00+09:00".to_string(),
        }
    }

    fn store() -> SubscriptionStore {
        SubscriptionStore::new(Connection::open_in_memory().unwrap()).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let mut store = store();

        store.add(subscription("Netflix", "動画配信")).unwrap();
        store.add(subscription("Spotify", "音楽")).unwrap();

        let names: Vec<&str> = store.list().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Netflix", "Spotify"]);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut store = store();
        store.add(subscription("Netflix", "動画配信")).unwrap();

        store.remove("存在しないID").unwrap();

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_deletes_record() {
        let mut store = store();
        store.add(subscription("Netflix", "動画配信")).unwrap();
        store.add(subscription("Spotify", "音楽")).unwrap();

        store.remove("id-Netflix").unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].name, "Spotify");
    }

    #[test]
    fn test_filtered() {
        let mut store = store();
        store.add(subscription("Netflix", "動画配信")).unwrap();
        store.add(subscription("Hulu", "動画配信")).unwrap();
        store.add(subscription("Spotify", "音楽")).unwrap();

        let all = store.filtered(&CategoryFilter::All);
        assert_eq!(all.len(), 3);

        let video = store.filtered(&CategoryFilter::Category("動画配信".to_string()));
        let names: Vec<&str> = video.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Netflix", "Hulu"]);
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");

        {
            let conn = open_database(&path).unwrap();
            let mut store = SubscriptionStore::new(conn).unwrap();
            store.add(subscription("Netflix", "動画配信")).unwrap();
            store.add(subscription("Spotify", "音楽")).unwrap();
        }

        // 開き直しても同じ内容が復元される
        let conn = open_database(&path).unwrap();
        let store = SubscriptionStore::new(conn).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].name, "Netflix");
        assert_eq!(store.list()[1].name, "Spotify");
    }
}
