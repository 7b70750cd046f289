pub mod portfolio;
pub use portfolio::*;

pub mod api;
pub use api::*;

pub mod ledger;
pub use ledger::*;
