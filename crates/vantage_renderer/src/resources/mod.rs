pub mod buffer;
pub mod instance_buffer;
pub mod texture;

pub use instance_buffer::{InstanceBuffer, MAX_BATCH_INSTANCES};
