// Post composition engine.
// Pure and synchronous: no I/O, no shared state. Handlers call it directly.

pub mod brief;
pub mod budget;
pub mod engine;
pub mod format;
pub mod goal;
pub mod handlers;
pub mod hashtags;
pub mod options;
pub mod render;
pub mod request;
pub mod tone;

pub use engine::{PostComposer, TemplateComposer};
pub use options::ComposeError;
