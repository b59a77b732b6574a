use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{error, info};
use tokio::task::JoinHandle;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

use crate::features::subscriptions::service::SubscriptionService;

/// 既定のチェック間隔（24時間ごと）
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// 支払い通知の定期チェックタスク
///
/// 開始直後に一度リマインダーを再計算し、以後は指定間隔で再計算を続ける。
/// stop()の呼び出しまたはドロップでタスクは停止する。しきい値の変更は
/// タイマーの位相に影響しない（次回の計算結果が変わるだけ）。
pub struct ReminderScheduler {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl ReminderScheduler {
    /// 定期チェックタスクを開始する
    ///
    /// # 引数
    /// * `service` - 共有するサブスクリプションサービス
    /// * `period` - チェック間隔
    ///
    /// # 戻り値
    /// 起動済みのスケジューラ
    pub fn start(service: Arc<Mutex<SubscriptionService>>, period: Duration) -> Self {
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        info!(
            "支払い通知の定期チェックを開始します: 間隔={}秒",
            period.as_secs()
        );

        let handle = tokio::spawn(async move {
            // 最初のtickは即時に発火する（起動時の初回実行）
            let mut ticker = interval(period);

            loop {
                tokio::select! {
                    _ = task_cancel.cancelled() => {
                        info!("支払い通知の定期チェックを停止します");
                        break;
                    }
                    _ = ticker.tick() => {
                        match service.lock() {
                            Ok(mut service) => service.recompute_reminders(),
                            Err(e) => error!("サービスのロック取得に失敗しました: {e}"),
                        }
                    }
                }
            }
        });

        Self { cancel, handle }
    }

    /// 既定の24時間間隔でタスクを開始する
    ///
    /// # 引数
    /// * `service` - 共有するサブスクリプションサービス
    pub fn start_daily(service: Arc<Mutex<SubscriptionService>>) -> Self {
        Self::start(service, DEFAULT_CHECK_INTERVAL)
    }

    /// タスクに停止を要求する
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// タスクが終了しているかどうかを返す
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
