pub mod bone_role;
pub mod rig;

pub use bone_role::BoneRole;
pub use rig::{Humanoid, HumanoidRig, SchemaVersion};
