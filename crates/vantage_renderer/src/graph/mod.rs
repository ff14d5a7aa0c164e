pub mod frame_packet;
pub mod pass_trait;

pub use frame_packet::{BatchCommand, CameraPacket, FramePacket};
pub use pass_trait::RenderPass;
