// Adapters layer: concrete exercise sources for the remote database and offline tables.

pub mod remote;
pub mod static_table;

pub use remote::{RemoteSource, DEFAULT_ENDPOINT};
pub use static_table::StaticSource;
