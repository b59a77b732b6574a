use std::path::Path;

use chrono::NaiveDate;
use log::{debug, info};
use rusqlite::Connection;
use uuid::Uuid;

use super::models::{BillingCycle, NewSubscriptionInput, Subscription};
use super::store::SubscriptionStore;
use crate::features::categories::models::{CategoryFilter, CategorySet, DEFAULT_CATEGORY};
use crate::features::reminders::engine;
use crate::features::reminders::models::{Notification, ReminderThreshold};
use crate::features::spending::aggregator::{self, CategorySpend, SpendSummary};
use crate::shared::database::connection::open_database;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{get_current_jst_timestamp, today_jst, validate_amount,
    validate_text_length};

/// サブスクリプション管理サービス
///
/// ストアへの変更と派生ビュー（合計・カテゴリ別集計・支払い通知）の
/// 再計算をひとまとめにしたファサード。変更系の操作は永続化と再計算を
/// 終えてから呼び出し元へ戻るため、読み出しは常に最新の状態を返す。
pub struct SubscriptionService {
    store: SubscriptionStore,
    categories: CategorySet,
    reminder_threshold: ReminderThreshold,
    summary: SpendSummary,
    category_spend: Vec<CategorySpend>,
    notifications: Vec<Notification>,
}

impl SubscriptionService {
    /// 保存済みデータからサービスを初期化する
    ///
    /// # 引数
    /// * `conn` - データベース接続
    /// * `categories` - 設定されたカテゴリ集合
    ///
    /// # 戻り値
    /// 初期化済みのサービス、または保存データが壊れている場合はエラー
    pub fn new(conn: Connection, categories: CategorySet) -> AppResult<Self> {
        let store = SubscriptionStore::new(conn)?;

        let mut service = Self {
            store,
            categories,
            reminder_threshold: ReminderThreshold::default(),
            summary: SpendSummary::default(),
            category_spend: Vec::new(),
            notifications: Vec::new(),
        };
        service.recompute_at(today_jst());

        Ok(service)
    }

    /// データベースファイルを開いてサービスを初期化する
    ///
    /// # 引数
    /// * `path` - データベースファイルのパス
    /// * `categories` - 設定されたカテゴリ集合
    pub fn open(path: &Path, categories: CategorySet) -> AppResult<Self> {
        let conn = open_database(path)?;
        Self::new(conn, categories)
    }

    /// フォーム入力からサブスクリプションを登録する
    ///
    /// 必須項目（サービス名・料金・支払日）が未入力の場合は何もせず
    /// Ok(false)を返す。登録した場合は永続化とすべての派生ビューの
    /// 再計算を行ってからOk(true)を返す。
    ///
    /// # 引数
    /// * `input` - プレゼンテーション層から受け取った生のフォーム値
    ///
    /// # 戻り値
    /// 登録した場合はOk(true)、未入力によるスキップはOk(false)、
    /// 値が不正な場合はバリデーションエラー
    pub fn add_subscription(&mut self, input: NewSubscriptionInput) -> AppResult<bool> {
        if input.name.trim().is_empty()
            || input.price.trim().is_empty()
            || input.payment_date.trim().is_empty()
        {
            debug!("必須項目が未入力のため登録をスキップします");
            return Ok(false);
        }

        validate_text_length(&input.name, 100, "サービス名")?;

        let price: f64 = input
            .price
            .trim()
            .parse()
            .map_err(|_| AppError::validation("料金は数値で入力してください"))?;
        validate_amount(price)?;

        // フォームの初期値は月額
        let cycle = if input.cycle.trim().is_empty() {
            BillingCycle::Monthly
        } else {
            input.cycle.trim().parse()?
        };

        let category = if input.category.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            input.category
        };
        if !self.categories.contains(&category) {
            return Err(AppError::validation(format!(
                "未定義のカテゴリです: {category}"
            )));
        }

        let subscription = Subscription {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            price,
            cycle,
            payment_date: input.payment_date,
            category,
            created_at: get_current_jst_timestamp(),
        };

        info!(
            "サブスクリプションを登録します: name={}, price={}, cycle={}",
            subscription.name, subscription.price, subscription.cycle
        );
        self.store.add(subscription)?;
        self.recompute_at(today_jst());

        Ok(true)
    }

    /// 指定IDのサブスクリプションを削除する
    ///
    /// 該当IDがなくてもエラーにはせず、永続化と再計算は常に行う。
    ///
    /// # 引数
    /// * `id` - 削除するサブスクリプションのID
    pub fn remove_subscription(&mut self, id: &str) -> AppResult<()> {
        info!("サブスクリプションを削除します: id={id}");
        self.store.remove(id)?;
        self.recompute_at(today_jst());
        Ok(())
    }

    /// カテゴリ絞り込み付きの一覧を返す
    ///
    /// # 引数
    /// * `filter` - 絞り込み条件
    pub fn list(&self, filter: &CategoryFilter) -> Vec<&Subscription> {
        self.store.filtered(filter)
    }

    /// 登録件数を返す
    pub fn subscription_count(&self) -> usize {
        self.store.len()
    }

    /// 現在の合計（月額・年額）を返す
    pub fn spend_summary(&self) -> SpendSummary {
        self.summary
    }

    /// 現在のカテゴリ別集計を返す
    pub fn spend_by_category(&self) -> &[CategorySpend] {
        &self.category_spend
    }

    /// 現在の支払い通知一覧を返す
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// 現在の通知しきい値を返す
    pub fn reminder_threshold(&self) -> ReminderThreshold {
        self.reminder_threshold
    }

    /// 通知しきい値を変更し、リマインダーを再計算する
    ///
    /// 定期チェックのタイマー位相には影響しない。
    ///
    /// # 引数
    /// * `threshold` - 新しいしきい値
    pub fn set_reminder_threshold(&mut self, threshold: ReminderThreshold) {
        info!("通知しきい値を変更します: {}日前", threshold.days());
        self.reminder_threshold = threshold;
        self.recompute_reminders_at(today_jst());
    }

    /// 表示中の通知を取り下げる
    ///
    /// 現在保持している一覧から取り除くだけで、条件が続く限り次回の
    /// 再計算で同じ内容の通知が再び作られる。
    ///
    /// # 引数
    /// * `notification_id` - 取り下げる通知のID
    pub fn dismiss_notification(&mut self, notification_id: &str) {
        self.notifications
            .retain(|note| note.id != notification_id);
    }

    /// 今日（JST）を基準にリマインダーを再計算する
    pub fn recompute_reminders(&mut self) {
        self.recompute_reminders_at(today_jst());
    }

    /// 基準日を指定してリマインダーを再計算する
    ///
    /// # 引数
    /// * `today` - 基準日
    pub fn recompute_reminders_at(&mut self, today: NaiveDate) {
        self.notifications = engine::check_payment_dates(
            self.store.list(),
            today,
            self.reminder_threshold.days(),
        );
    }

    /// すべての派生ビューを再計算する
    fn recompute_at(&mut self, today: NaiveDate) {
        self.summary = aggregator::totals(self.store.list());
        self.category_spend = aggregator::by_category(self.store.list(), &self.categories);
        self.recompute_reminders_at(today);
    }
}
