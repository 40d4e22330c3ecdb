mod report_queries;
mod subscription_queries;
mod user_queries;

pub use report_queries::*;
pub use subscription_queries::*;
pub use user_queries::*;
