use chrono::{Datelike, NaiveDate};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::features::reminders::models::Notification;
use crate::features::subscriptions::models::Subscription;

/// 支払日テキストから日付部分を抜き出すパターン（「毎月15日」→ 15）
static PAYMENT_DAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)日").expect("支払日パターンの構築に失敗しました"));

/// 支払日テキストから日付（1〜31）を抽出する
///
/// # 引数
/// * `payment_date` - 支払日の自由記述（「毎月15日」など）
///
/// # 戻り値
/// 抽出した日付。パターンに一致しない場合や1〜31の範囲外はNone
pub fn extract_payment_day(payment_date: &str) -> Option<u32> {
    let captures = PAYMENT_DAY_PATTERN.captures(payment_date)?;
    let day: u32 = captures.get(1)?.as_str().parse().ok()?;

    if (1..=31).contains(&day) {
        Some(day)
    } else {
        None
    }
}

/// 指定した日付が属する月の日数を返す
///
/// # 引数
/// * `date` - 基準日
///
/// # 戻り値
/// その月の日数（うるう年を考慮）
pub fn last_day_of_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// 次回支払いまでの日数を計算する
///
/// 支払日が今日より後ならその差を、今日以前なら来月の支払いとみなして
/// 「今月の残り日数 + 支払日」を返す。支払日が翌月の日数を超える場合でも
/// 値は補正しない。
///
/// # 引数
/// * `payment_day` - 支払日（1〜31）
/// * `today` - 基準日
///
/// # 戻り値
/// 次回支払いまでの日数
pub fn days_until_payment(payment_day: u32, today: NaiveDate) -> u32 {
    let today_day = today.day();

    if payment_day > today_day {
        // 今月の支払い
        payment_day - today_day
    } else {
        // 来月の支払い
        (last_day_of_month(today) - today_day) + payment_day
    }
}

/// サブスクリプション一覧から支払い通知を組み立てる
///
/// 通知は毎回すべて作り直される。支払日を抽出できないレコードは対象外
/// （想定内のスキップであり、エラーにはしない）。
///
/// # 引数
/// * `subscriptions` - サブスクリプション一覧（登録順）
/// * `today` - 基準日
/// * `reminder_days` - 通知しきい値（この日数以内なら通知）
///
/// # 戻り値
/// しきい値以内の支払いに対する通知の一覧（登録順）
pub fn check_payment_dates(
    subscriptions: &[Subscription],
    today: NaiveDate,
    reminder_days: u32,
) -> Vec<Notification> {
    let mut notifications = Vec::new();

    for subscription in subscriptions {
        let payment_day = match extract_payment_day(&subscription.payment_date) {
            Some(day) => day,
            None => {
                debug!(
                    "支払日を抽出できないためスキップします: name={}, payment_date={}",
                    subscription.name, subscription.payment_date
                );
                continue;
            }
        };

        let days = days_until_payment(payment_day, today);
        if days <= reminder_days {
            notifications.push(Notification::for_payment(subscription, days));
        }
    }

    notifications
}
