pub mod errors;
pub mod keys;
pub mod logging;
pub mod utils;
pub mod watch;

pub use errors::Error;
pub use keys::{KeyDeriver, format_identity};
