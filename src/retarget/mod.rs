pub mod corrector;
pub mod retargeter;
pub mod rig_map;

pub use corrector::{POSITION_UNIT_SCALE, correct_rotation, correct_translation};
pub use retargeter::{
    MIXAMO_CLIP_NAME, RETARGET_OUTPUT_NAME, RetargetStats, retarget, retarget_by_name,
    retarget_with_stats,
};
pub use rig_map::resolve_role;
