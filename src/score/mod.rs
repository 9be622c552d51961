pub mod best;
pub use best::*;

pub mod category;
pub use category::*;

pub mod description;
pub use description::*;

pub mod evaluator;
pub use evaluator::*;

pub(crate) mod lookup;

pub mod oracle;
pub use oracle::*;

pub mod score;
pub use score::*;

pub mod scorer;
pub use scorer::*;
