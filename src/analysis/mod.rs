pub mod analyzer;
pub use analyzer::*;

pub mod outs;
pub use outs::*;

pub mod player;
pub use player::*;

pub mod settings;
pub use settings::*;

pub mod standing;
pub use standing::*;

pub mod table;
pub use table::*;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub use cli::*;

#[cfg(feature = "cli")]
pub mod query;
#[cfg(feature = "cli")]
pub use query::*;
