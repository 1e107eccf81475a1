#[cfg(feature = "cli")]
pub mod cli;
pub mod roster;

#[cfg(feature = "cli")]
pub use cli::OutputArgs;
pub use roster::Roster;
