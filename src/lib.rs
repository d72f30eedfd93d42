#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod errors;
pub mod humanoid;
pub mod retarget;

pub use animation::{
    AnimationClip, InterpolationMode, KeyframeTrack, TargetPath, Track, TrackData, TrackMeta,
};
pub use errors::{RetargetError, Result};
pub use humanoid::{BoneRole, Humanoid, HumanoidRig, SchemaVersion};
pub use retarget::{
    MIXAMO_CLIP_NAME, RETARGET_OUTPUT_NAME, RetargetStats, resolve_role, retarget,
    retarget_by_name, retarget_with_stats,
};
