pub mod backend;
pub use backend::*;

pub mod enumerator;
pub use enumerator::*;

pub mod equity;
pub use equity::*;

pub mod tally;
pub use tally::*;
