// Adapters layer: concrete implementations of the domain ports (console, terminal, http).

pub mod emitter;
pub mod http_teacher;
pub mod prompt;

pub use emitter::ConsoleEmitter;
pub use http_teacher::{HttpTeacherFactory, RestClient};
pub use prompt::TerminalPrompter;
