pub mod catalog;
pub mod notifier;
pub mod status;

pub use catalog::{Catalog, CatalogView, ReloadOutcome, SubmitError};
pub use notifier::{Notification, Notifier, Severity};
pub use status::{Reachability, StatusReflector};
