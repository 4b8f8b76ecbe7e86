pub mod keys;
pub mod types;
mod core;

// Re-export cache types
pub use types::*;
// Re-export key builders
pub use keys::*;
// Re-export the cache itself
pub use self::core::*;
