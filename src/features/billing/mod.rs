/// 請求サイクル換算モジュール
///
/// 月額と年額を相互に換算する純粋関数を提供します。丸めは行いません
/// （表示形式はプレゼンテーション層の責務）。
use crate::features::subscriptions::models::BillingCycle;

/// 料金を月額換算する
///
/// # 引数
/// * `price` - 請求サイクル単位の料金
/// * `cycle` - 請求サイクル
///
/// # 戻り値
/// 月額換算した料金（月額はそのまま、年額は12で割る）
pub fn to_monthly(price: f64, cycle: BillingCycle) -> f64 {
    match cycle {
        BillingCycle::Monthly => price,
        BillingCycle::Yearly => price / 12.0,
    }
}

/// 料金を年額換算する
///
/// # 引数
/// * `price` - 請求サイクル単位の料金
/// * `cycle` - 請求サイクル
///
/// # 戻り値
/// 年額換算した料金（月額は12倍、年額はそのまま）
pub fn to_yearly(price: f64, cycle: BillingCycle) -> f64 {
    match cycle {
        BillingCycle::Monthly => price * 12.0,
        BillingCycle::Yearly => price,
    }
}
