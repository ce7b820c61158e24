//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod checkin_repo;
pub mod daily_metric_repo;
pub mod notification_repo;
pub mod profile_repo;
pub mod settings_repo;
pub mod supplement_repo;
pub mod workout_repo;

pub use checkin_repo::CheckinRepo;
pub use daily_metric_repo::DailyMetricRepo;
pub use notification_repo::NotificationRepo;
pub use profile_repo::ProfileRepo;
pub use settings_repo::SettingsRepo;
pub use supplement_repo::SupplementRepo;
pub use workout_repo::WorkoutRepo;
