//! Reference state encoders.

pub mod cached;
pub mod single_state;

pub use cached::CachedStateEncoder;
pub use single_state::SingleStateEncoder;
