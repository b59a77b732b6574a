use serde::Serialize;
use uuid::Uuid;

use crate::features::subscriptions::models::{BillingCycle, Subscription};
use crate::shared::errors::AppError;

/// 通知しきい値（支払い何日前から通知するか）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderThreshold(u32);

impl ReminderThreshold {
    /// 選択可能な日数
    pub const ALLOWED: [u32; 4] = [1, 3, 5, 7];

    /// しきい値の日数を返す
    pub fn days(self) -> u32 {
        self.0
    }
}

impl Default for ReminderThreshold {
    /// 既定は3日前
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u32> for ReminderThreshold {
    type Error = AppError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        if Self::ALLOWED.contains(&days) {
            Ok(Self(days))
        } else {
            Err(AppError::validation(format!(
                "通知日数は1・3・5・7のいずれかである必要があります: {days}"
            )))
        }
    }
}

/// 支払い通知
///
/// 再計算のたびに全件が作り直される一時データ。IDは計算ごとに新しく採番され、
/// 再計算をまたいで安定しない。
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub subscription_id: String,
    pub subscription_name: String,
    pub price: f64,
    pub cycle: BillingCycle,
    pub days_remaining: u32,
    pub message: String,
}

impl Notification {
    /// サブスクリプションと残日数から通知を組み立てる
    ///
    /// # 引数
    /// * `subscription` - 対象のサブスクリプション
    /// * `days_remaining` - 次回支払いまでの日数
    pub fn for_payment(subscription: &Subscription, days_remaining: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            subscription_id: subscription.id.clone(),
            subscription_name: subscription.name.clone(),
            price: subscription.price,
            cycle: subscription.cycle,
            days_remaining,
            message: format!(
                "「{}」の支払いがあと{}日後に予定されています。",
                subscription.name, days_remaining
            ),
        }
    }
}
