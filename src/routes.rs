mod health_check;
mod helpers;
mod signups;

pub use health_check::health_check;
pub use signups::*;
