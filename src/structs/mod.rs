pub mod chain;
pub use chain::*;

pub mod transaction;
pub use transaction::*;

pub mod position;
pub use position::*;

pub mod wallet;
pub use wallet::*;

pub mod portfolio;
pub use portfolio::*;
