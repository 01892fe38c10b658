//! Timeline composition: the builder, the renderer boundary, sessions, and
//! an in-memory recorder.

mod builder;
mod recorder;
mod renderer;
mod session;


pub use builder::{every_other_bar, TimelineBuilder};
pub use recorder::TimelineRecorder;
pub use renderer::{RenderCommand, Renderer};
pub use session::Session;
