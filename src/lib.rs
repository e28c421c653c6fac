pub mod catalog;
pub mod config;
pub mod error;
pub mod recommend;
pub mod requirements;

pub use error::{ArchitectError, Result};
pub use recommend::{ArchitectureSpec, Recommendation, analyze, generate_architecture_spec};
pub use requirements::{Constraints, Preferences, Requirements, Task};

// Load env from a simple, standardized location resolution.
// Loads .env if present and silently ignores if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
