pub mod collection;
pub mod compact;
pub mod culling;
pub mod instance;
pub mod sort;

pub use collection::{Blend, ObjectCollection};
pub use compact::{compact, compact_windows, BatchSlice};
pub use culling::{Aabb, Frustum};
pub use instance::{Instance, InstanceRecord, Material};
pub use sort::sort_back_to_front;
