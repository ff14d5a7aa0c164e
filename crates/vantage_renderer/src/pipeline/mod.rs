pub mod layout;
pub mod postprocess;
pub mod skybox;
pub mod world;

pub use layout::PipelineLayouts;
pub use postprocess::PostProcessPipeline;
pub use skybox::SkyboxPipeline;
pub use world::WorldPipeline;
