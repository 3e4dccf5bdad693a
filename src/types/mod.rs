//! Shared primitive types.
mod contracts;
pub use contracts::*;

mod leaf;
pub use leaf::*;

mod merkle;
pub use merkle::*;

mod payload;
pub use payload::*;

mod batch;
pub use batch::*;

mod event;
pub use event::*;
