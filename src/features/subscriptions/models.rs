use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::errors::AppError;

/// 請求サイクル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    /// 月額
    Monthly,
    /// 年額
    Yearly,
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingCycle::Monthly => write!(f, "monthly"),
            BillingCycle::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for BillingCycle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(BillingCycle::Monthly),
            "yearly" => Ok(BillingCycle::Yearly),
            _ => Err(AppError::validation(
                "支払いサイクルは'monthly'または'yearly'である必要があります",
            )),
        }
    }
}

/// サブスクリプションデータモデル
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Subscription {
    pub id: String,           // UUID v4、作成時に採番
    pub name: String,         // サービス名
    pub price: f64,           // 正の数値
    pub cycle: BillingCycle,  // "monthly" または "yearly"
    pub payment_date: String, // 支払日の自由記述（「毎月15日」など）
    pub category: String,     // カテゴリ名
    pub created_at: String,   // RFC3339形式（JST）、参考情報
}

/// サブスクリプション登録用の生入力
///
/// プレゼンテーション層のフォーム値をそのまま受け取るためのDTO。
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct NewSubscriptionInput {
    pub name: String,
    pub price: String,
    pub cycle: String,
    pub payment_date: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_serialization() {
        let subscription = Subscription {
            id: "5b7f2c1a-90ab-4cde-8123-456789abcdef".to_string(),
            name: "Netflix".to_string(),
            price: 1490.0,
            cycle: BillingCycle::Monthly,
            payment_date: "毎月15日".to_string(),
            category: "動画配信".to_string(),
            created_at: "2024-01-01T00:00:00+09:00".to_string(),
        };

        let json = serde_json::to_string(&subscription).unwrap();
        assert!(json.contains("\"name\":\"Netflix\""));
        assert!(json.contains("\"cycle\":\"monthly\""));
        assert!(json.contains("\"payment_date\":\"毎月15日\""));

        let deserialized: Subscription = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, subscription);
    }

    #[test]
    fn test_billing_cycle_serialization() {
        // 小文字の文字列として直列化されることを確認
        assert_eq!(
            serde_json::to_string(&BillingCycle::Monthly).unwrap(),
            "\"monthly\""
        );
        assert_eq!(
            serde_json::to_string(&BillingCycle::Yearly).unwrap(),
            "\"yearly\""
        );
    }

    #[test]
    fn test_billing_cycle_from_str() {
        assert_eq!(
            "monthly".parse::<BillingCycle>().unwrap(),
            BillingCycle::Monthly
        );
        assert_eq!(
            "yearly".parse::<BillingCycle>().unwrap(),
            BillingCycle::Yearly
        );

        // 未知の値はバリデーションエラー
        assert!("annual".parse::<BillingCycle>().is_err());
        assert!("".parse::<BillingCycle>().is_err());
    }

    #[test]
    fn test_billing_cycle_display() {
        assert_eq!(BillingCycle::Monthly.to_string(), "monthly");
        assert_eq!(BillingCycle::Yearly.to_string(), "yearly");
    }
}
