//! Report rendering and delivery for swasrush
//!
//! Delivery is an explicit capability chosen from the config file:
//!
//! - `log` (default): the report only goes to the log
//! - `webhook`: JSON POST to a URL
//! - `command`: an external program receives title and body as arguments
//!
//! A failed delivery is logged and never aborts the run.

pub mod command;
pub mod error;
pub mod notifier;
pub mod report;
pub mod webhook;

pub use command::CommandNotifier;
pub use error::{DeliveryError, Result};
pub use notifier::{LogNotifier, Notifier, dispatch, notifier_from_config};
pub use report::{NO_FAILURE, NO_SUCCESS, REPORT_TITLE, Report};
pub use webhook::WebhookNotifier;
