use chrono::NaiveDate;
use chrono_tz::Asia::Tokyo;

use crate::shared::errors::{AppError, AppResult};

/// 金額のバリデーション
///
/// # 引数
/// * `amount` - 金額
///
/// # 戻り値
/// 有効な金額の場合はOk(())、無効な場合はエラー
///
/// # バリデーション規則
/// - 正の数値であること
/// - 10桁以内であること（9,999,999,999円まで）
pub fn validate_amount(amount: f64) -> AppResult<()> {
    // 無限大・NaNチェック
    if !amount.is_finite() {
        return Err(AppError::validation("無効な金額です"));
    }

    // 正の数値チェック
    if amount <= 0.0 {
        return Err(AppError::validation("金額は正の数値で入力してください"));
    }

    // 上限チェック（10桁以内）
    if amount >= 10_000_000_000.0 {
        return Err(AppError::validation("金額は10桁以内で入力してください"));
    }

    Ok(())
}

/// 文字列の長さバリデーション
///
/// # 引数
/// * `text` - 検証対象の文字列
/// * `max_length` - 最大文字数
/// * `field_name` - フィールド名（エラーメッセージ用）
///
/// # 戻り値
/// 有効な長さの場合はOk(())、無効な場合はエラー
pub fn validate_text_length(text: &str, max_length: usize, field_name: &str) -> AppResult<()> {
    let char_count = text.chars().count();
    if char_count > max_length {
        return Err(AppError::validation(format!(
            "{field_name}は{max_length}文字以内で入力してください（現在: {char_count}文字）"
        )));
    }
    Ok(())
}

/// 現在の日時をJST（日本標準時）で取得
///
/// # 戻り値
/// JST形式のRFC3339文字列
pub fn get_current_jst_timestamp() -> String {
    let now_jst = chrono::Utc::now().with_timezone(&Tokyo);
    now_jst.to_rfc3339()
}

/// 今日の日付をJST基準で取得
///
/// # 戻り値
/// 今日の日付
pub fn today_jst() -> NaiveDate {
    chrono::Utc::now().with_timezone(&Tokyo).date_naive()
}
