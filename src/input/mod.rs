//! Pointer-facing half of the engine.
//!
//! ## Modules
//!
//! - `coords` - Pixel <-> cell conversion and frame geometry
//! - `resize` - Resize gesture state machine
//! - `events` - Serializable external signals (container size, drag, resize)

pub mod coords;
pub mod events;
pub mod resize;

pub use coords::CoordinateConverter;
pub use events::GridEvent;
pub use resize::{ResizeCommit, ResizeGesture};
