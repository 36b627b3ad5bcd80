pub mod config;
pub mod errors;
pub mod filter;
pub mod io;
pub mod render;
pub mod text;

// Re-export commonly used types
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use filter::{register, WrapTextHelper, DEFAULT_FILTER_NAME};
pub use render::Renderer;
pub use text::{TextWrapper, WrapError, DEFAULT_WORDS_PER_LINE, LINE_BREAK};
