pub mod postprocess_pass;
pub mod skybox_pass;
pub mod transparent_pass;
pub mod world_pass;

pub use postprocess_pass::PostProcessPass;
pub use skybox_pass::SkyboxPass;
pub use transparent_pass::TransparentPass;
pub use world_pass::WorldPass;
