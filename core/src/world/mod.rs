pub mod candidate;
pub mod source;

pub use candidate::{Candidate, EntityHandle, LocalPlayer, RawStatus};
pub use source::{WorldEvent, WorldSource};
