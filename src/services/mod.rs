// Service exports
pub mod vision;

pub use vision::{VisionClient, VisionError, VisionObservations};
