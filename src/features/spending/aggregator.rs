use serde::Serialize;

use crate::features::billing::{to_monthly, to_yearly};
use crate::features::categories::models::CategorySet;
use crate::features::subscriptions::models::Subscription;

/// 月額・年額の合計
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct SpendSummary {
    pub monthly_total: f64,
    pub yearly_total: f64,
}

/// カテゴリ別の月額換算支出
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub category: String,
    pub monthly_amount: f64,
}

/// 全サブスクリプションの月額・年額合計を計算する
///
/// # 引数
/// * `subscriptions` - サブスクリプション一覧
///
/// # 戻り値
/// カテゴリを問わない月額換算・年額換算の合計（空の場合はともに0）
pub fn totals(subscriptions: &[Subscription]) -> SpendSummary {
    subscriptions
        .iter()
        .fold(SpendSummary::default(), |mut acc, sub| {
            acc.monthly_total += to_monthly(sub.price, sub.cycle);
            acc.yearly_total += to_yearly(sub.price, sub.cycle);
            acc
        })
}

/// カテゴリ別の月額換算支出を集計する
///
/// # 引数
/// * `subscriptions` - サブスクリプション一覧
/// * `categories` - 設定されたカテゴリ集合
///
/// # 戻り値
/// カテゴリの定義順で並んだ集計結果。合計が0のカテゴリは含まれない。
pub fn by_category(subscriptions: &[Subscription], categories: &CategorySet) -> Vec<CategorySpend> {
    categories
        .iter()
        .map(|category| {
            let monthly_amount = subscriptions
                .iter()
                .filter(|sub| sub.category == category)
                .map(|sub| to_monthly(sub.price, sub.cycle))
                .sum();
            CategorySpend {
                category: category.to_string(),
                monthly_amount,
            }
        })
        .filter(|entry| entry.monthly_amount > 0.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::subscriptions::models::BillingCycle;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn subscription(name: &str, price: f64, cycle: BillingCycle, category: &str) -> Subscription {
        Subscription {
            id: format!("id-{name}"),
            name: name.to_string(),
            price,
            cycle,
            payment_date: "毎月1日".to_string(),
            category: category.to_string(),
            created_at: "2024-01-01T00:00:00+09:00".to_string(),
        }
    }

    #[test]
    fn test_totals_empty() {
        let summary = totals(&[]);
        assert_eq!(summary.monthly_total, 0.0);
        assert_eq!(summary.yearly_total, 0.0);
    }

    #[test]
    fn test_totals_mixed_cycles() {
        let subscriptions = vec![
            subscription("Netflix", 1490.0, BillingCycle::Monthly, "動画配信"),
            subscription("Adobe", 24000.0, BillingCycle::Yearly, "ソフトウェア"),
        ];

        let summary = totals(&subscriptions);
        assert_eq!(summary.monthly_total, 1490.0 + 2000.0);
        assert_eq!(summary.yearly_total, 1490.0 * 12.0 + 24000.0);
    }

    #[test]
    fn test_by_category_skips_zero_and_keeps_order() {
        let categories = CategorySet::default();
        let subscriptions = vec![
            subscription("YouTube Premium", 1280.0, BillingCycle::Monthly, "動画配信"),
            subscription("Spotify", 980.0, BillingCycle::Monthly, "音楽"),
        ];

        let breakdown = by_category(&subscriptions, &categories);

        // 該当のない「エンターテイメント」などは現れず、定義順で並ぶ
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, "音楽");
        assert_eq!(breakdown[0].monthly_amount, 980.0);
        assert_eq!(breakdown[1].category, "動画配信");
        assert_eq!(breakdown[1].monthly_amount, 1280.0);
    }

    #[test]
    fn test_by_category_sums_match_monthly_total() {
        let categories = CategorySet::default();
        let subscriptions = vec![
            subscription("Netflix", 1490.0, BillingCycle::Monthly, "動画配信"),
            subscription("Hulu", 1026.0, BillingCycle::Monthly, "動画配信"),
            subscription("Adobe", 24000.0, BillingCycle::Yearly, "ソフトウェア"),
        ];

        let breakdown = by_category(&subscriptions, &categories);
        let breakdown_total: f64 = breakdown.iter().map(|entry| entry.monthly_amount).sum();
        let summary = totals(&subscriptions);

        assert!((breakdown_total - summary.monthly_total).abs() < 1e-9);
    }

    #[test]
    fn test_by_category_empty_input() {
        let categories = CategorySet::default();
        assert!(by_category(&[], &categories).is_empty());
    }

    #[quickcheck]
    fn prop_totals_additive_over_disjoint_union(prices_a: Vec<u32>, prices_b: Vec<u32>) -> TestResult {
        // 価格を整数から作り、2つの集合の合計と連結した集合の合計を比較する
        let build = |prices: &[u32], offset: usize| -> Vec<Subscription> {
            prices
                .iter()
                .enumerate()
                .map(|(i, &p)| {
                    let cycle = if (p % 2) == 0 {
                        BillingCycle::Monthly
                    } else {
                        BillingCycle::Yearly
                    };
                    subscription(&format!("s{}", offset + i), f64::from(p % 100_000) + 1.0, cycle, "その他")
                })
                .collect()
        };

        let set_a = build(&prices_a, 0);
        let set_b = build(&prices_b, prices_a.len());
        let mut combined = set_a.clone();
        combined.extend(set_b.clone());

        let total_a = totals(&set_a);
        let total_b = totals(&set_b);
        let total_combined = totals(&combined);

        let monthly_diff =
            (total_combined.monthly_total - (total_a.monthly_total + total_b.monthly_total)).abs();
        let yearly_diff =
            (total_combined.yearly_total - (total_a.yearly_total + total_b.yearly_total)).abs();

        TestResult::from_bool(monthly_diff < 1e-6 && yearly_diff < 1e-6)
    }
}
