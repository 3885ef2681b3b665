//! Lucioles Swarm - The firefly simulation
//!
//! Everything that moves on screen, driven one tick at a time:
//! - `Firefly` - seek-and-arrive particle with a pulsing glow
//! - `Lantern` - pointer-bound area that scatters nearby fireflies
//! - `FadingMessage` - timed text that slides in and out
//! - `Simulation` - owns all of the above and runs the per-tick order

pub mod firefly;
pub mod lantern;
pub mod message;
pub mod rand;
mod sim;

pub use firefly::{Firefly, Target};
pub use lantern::Lantern;
pub use message::{FadingMessage, MessageConfig, MessageState};
pub use crate::rand::SwarmRng;
pub use sim::{LoopControl, Simulation};
