pub mod config;
pub mod constants;
pub mod debounce;
pub mod error;
pub mod layout;
pub mod state;
pub mod swipe;

pub use config::*;
pub use constants::*;
pub use debounce::*;
pub use error::*;
pub use layout::*;
pub use state::*;
pub use swipe::*;
