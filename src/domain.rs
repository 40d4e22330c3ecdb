mod new_subscription;
mod price;
mod report_date;
mod report_filter;
mod service_name;
mod subscription_id;
mod user_reference;
mod validation;

pub use new_subscription::*;
pub use price::*;
pub use report_date::*;
pub use report_filter::*;
pub use service_name::*;
pub use subscription_id::*;
pub use user_reference::*;
pub use validation::*;
