//! Pass Forge - password generation and strength scoring
//!
//! A small policy engine that builds a charset from character-class toggles,
//! samples a password from it and labels the result Weak, Medium or Strong,
//! plus the session, clipboard and configuration plumbing the CLI uses.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod policy;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use error::{PassForgeError, Result};
pub use types::{
    CharacterClass, GenerationOptions, GenerationReport, RandomSource, StrengthLevel,
    DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH,
};

// Re-export main functionality
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use config::AppConfig;
pub use policy::{adjust_length, build_charset, generate, score_strength};
pub use session::GeneratorSession;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
