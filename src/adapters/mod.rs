// Adapters layer: concrete implementations of the domain ports for external
// systems (remote HTTP stores, local filesystem, log-based notifications,
// phrase catalogues).

pub mod http;
pub mod notify;
pub mod phrases;
pub mod storage;
