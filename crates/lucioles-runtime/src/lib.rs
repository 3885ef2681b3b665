//! Lucioles Runtime - Tick loop infrastructure
//!
//! Provides the building blocks the simulation is driven by:
//! - `Timer` - normalized looping / one-shot progress tracker
//! - `GameClock` - tick pacing, delta time and rolling FPS
//! - `InputState` / `InputFrame` - event collection and the per-tick input snapshot
//! - `Surface` / `DrawList` - the drawing collaborator
//! - `CuePlayer` - the sound cue collaborator

mod audio;
mod clock;
mod event;
mod input;
mod surface;
mod timer;

pub use audio::{CuePlayer, SilentCues};
pub use clock::GameClock;
pub use event::{InputEvent, MouseButton};
pub use input::{InputFrame, InputState};
pub use surface::{DrawCommand, DrawList, FontId, Surface};
pub use timer::Timer;

pub use winit::keyboard::KeyCode;
