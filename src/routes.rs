mod ping;
mod subscriptions;

pub use ping::*;
pub use subscriptions::*;
