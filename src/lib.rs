pub mod features;
pub mod shared;

pub use features::billing::{to_monthly, to_yearly};
pub use features::categories::{CategoryFilter, CategorySet, DEFAULT_CATEGORY};
pub use features::reminders::{
    Notification, ReminderScheduler, ReminderThreshold, DEFAULT_CHECK_INTERVAL,
};
pub use features::spending::{by_category, totals, CategorySpend, SpendSummary};
pub use features::subscriptions::{
    BillingCycle, NewSubscriptionInput, Subscription, SubscriptionService, SubscriptionStore,
};
pub use shared::config::initialize_logging_system;
pub use shared::database::{default_db_path, open_database};
pub use shared::errors::{AppError, AppResult, ErrorSeverity};
