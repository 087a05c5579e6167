mod ledger;
mod norm;
mod rounding;
mod trip;

pub use ledger::*;
pub use norm::*;
pub use rounding::*;
pub use trip::*;
