pub mod connect;
pub mod local;
pub mod serve;

/// Address used by `serve` and `connect` when none is given
pub const DEFAULT_ADDR: &str = "127.0.0.1:7878";
