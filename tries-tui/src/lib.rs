pub mod app;
pub mod buffer;
pub mod keymap;
pub mod render;
pub mod template;
pub mod terminal;
pub mod theme;

pub use app::{KeySource, Screen, ScriptedKeys, run, run_interactive};
pub use buffer::RenderBuffer;
pub use render::View;
pub use theme::Theme;
