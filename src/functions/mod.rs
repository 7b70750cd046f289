pub mod supply_rate;
pub use supply_rate::*;
