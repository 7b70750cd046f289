pub mod config;
pub use config::*;

pub mod rpc;
pub use rpc::*;

pub mod pool;
pub use pool::*;

pub mod prices;
pub use prices::*;
