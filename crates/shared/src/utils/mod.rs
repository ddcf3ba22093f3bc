mod logs;
mod metrics;
mod query_params;
mod shutdown;

pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status};
pub use self::query_params::replace_query_params;
pub use self::shutdown::shutdown_signal;
