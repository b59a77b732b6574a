/// サブスクリプション機能モジュール
///
/// このモジュールは、サブスクリプション管理に関連するすべての機能を提供します：
/// - サブスクリプションの登録・削除・一覧（カテゴリ絞り込み付き）
/// - キーバリューストアへの永続化と復元
/// - 変更後の派生ビュー（合計・カテゴリ別集計・支払い通知）の再計算
pub mod models;
pub mod repository;
pub mod service;
pub mod store;

// 公開インターフェース
pub use models::{BillingCycle, NewSubscriptionInput, Subscription};
pub use repository::{load_all, save_all};
pub use service::SubscriptionService;
pub use store::SubscriptionStore;
