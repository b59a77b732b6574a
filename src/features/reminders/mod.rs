/// リマインダー機能モジュール
///
/// このモジュールは、支払い通知に関連するすべての機能を提供します：
/// - 支払日テキストからの日付抽出
/// - 次回支払いまでの日数計算（月またぎを考慮）
/// - しきい値以内の支払いに対する通知の組み立て
/// - 24時間ごとの定期チェックタスク
pub mod engine;
pub mod models;
pub mod scheduler;

// 公開インターフェース
pub use engine::{check_payment_dates, days_until_payment, extract_payment_day, last_day_of_month};
pub use models::{Notification, ReminderThreshold};
pub use scheduler::{ReminderScheduler, DEFAULT_CHECK_INTERVAL};
