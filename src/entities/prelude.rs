pub use super::activity_log::Entity as ActivityLog;
pub use super::profiles::Entity as Profiles;
pub use super::time_limits::Entity as TimeLimits;
pub use super::whitelist_entries::Entity as WhitelistEntries;
