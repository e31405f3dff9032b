pub mod add_app_form;
pub mod api_config;
pub mod applications;
pub mod error;
pub mod ids;
pub mod notifications;
pub mod store;

pub use add_app_form::{AddAppForm, DialogState};
pub use api_config::{ApiConfig, DEFAULT_API_PORT};
pub use applications::{seed_applications, Application, ApplicationId, ApplicationRegistry};
pub use error::ValidationError;
pub use ids::{ClockIds, IdGenerator, SequentialIds};
pub use notifications::{Notification, NotificationLevel};
pub use store::{Store, StoreAction};
