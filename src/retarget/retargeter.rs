//! Track-level retargeting of a source-rig clip onto a target humanoid rig.

use crate::animation::{AnimationClip, KeyframeTrack, TargetPath, Track, TrackData, TrackMeta};
use crate::errors::{RetargetError, Result};
use crate::humanoid::HumanoidRig;
use crate::retarget::corrector::{correct_rotation, correct_translation};
use crate::retarget::rig_map::resolve_role;

/// The clip name Mixamo exporters assign to every animation.
pub const MIXAMO_CLIP_NAME: &str = "mixamo.com";

/// The fixed name of every retargeted output clip.
pub const RETARGET_OUTPUT_NAME: &str = "vrmAnimation";

/// Per-call diagnostics: how the source tracks were disposed of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetargetStats {
    /// Number of tracks in the source clip.
    pub total: usize,
    /// Tracks rewritten into the output clip.
    pub retargeted: usize,
    /// Tracks dropped because the source bone has no humanoid role.
    pub unmapped: usize,
    /// Tracks dropped because the target skeleton lacks the mapped bone.
    pub missing_target: usize,
}

/// Retargets `source_clip` onto `rig`.
///
/// Each track is resolved source bone → canonical role → runtime node name;
/// tracks that fail either resolution are dropped (routine, not an error).
/// Surviving tracks keep their time stamps verbatim and have their values
/// corrected for the rig's schema version. The output clip is a new value
/// named [`RETARGET_OUTPUT_NAME`] with the source clip's duration.
///
/// # Errors
///
/// [`RetargetError::NoUsableTracks`] when every track was dropped.
pub fn retarget(source_clip: &AnimationClip, rig: &impl HumanoidRig) -> Result<AnimationClip> {
    retarget_with_stats(source_clip, rig).map(|(clip, _)| clip)
}

/// [`retarget`], additionally reporting per-track disposition counts.
pub fn retarget_with_stats(
    source_clip: &AnimationClip,
    rig: &impl HumanoidRig,
) -> Result<(AnimationClip, RetargetStats)> {
    let version = rig.schema_version();
    let mut stats = RetargetStats {
        total: source_clip.tracks.len(),
        ..RetargetStats::default()
    };
    let mut tracks = Vec::with_capacity(source_clip.tracks.len());

    for track in &source_clip.tracks {
        let source_bone = &track.meta.node_name;

        let Some(role) = resolve_role(source_bone) else {
            log::debug!("dropping track for unmapped bone {source_bone:?}");
            stats.unmapped += 1;
            continue;
        };
        let Some(node_name) = rig.node_for_role(role) else {
            log::debug!("dropping track for {role}: bone absent from target skeleton");
            stats.missing_target += 1;
            continue;
        };

        let data = match (&track.meta.target, &track.data) {
            (TargetPath::Rotation, TrackData::Quaternion(t)) => {
                TrackData::Quaternion(KeyframeTrack::new(
                    t.times.clone(),
                    t.values.iter().map(|&q| correct_rotation(q, version)).collect(),
                    t.interpolation,
                ))
            }
            (TargetPath::Translation, TrackData::Vector3(t)) => {
                TrackData::Vector3(KeyframeTrack::new(
                    t.times.clone(),
                    t.values
                        .iter()
                        .map(|&v| correct_translation(v, version))
                        .collect(),
                    t.interpolation,
                ))
            }
            // Scale tracks and any other pairing have no correction policy
            (_, data) => data.clone(),
        };

        tracks.push(Track {
            meta: TrackMeta::new(node_name, track.meta.target),
            data,
        });
        stats.retargeted += 1;
    }

    if tracks.is_empty() {
        return Err(RetargetError::NoUsableTracks);
    }

    log::trace!(
        "retargeted {}/{} tracks ({} unmapped, {} missing target bone)",
        stats.retargeted,
        stats.total,
        stats.unmapped,
        stats.missing_target
    );

    Ok((
        AnimationClip::with_duration(RETARGET_OUTPUT_NAME, source_clip.duration, tracks),
        stats,
    ))
}

/// Looks up `clip_name` in a loader-produced animation set, then retargets it.
///
/// # Errors
///
/// [`RetargetError::ClipNotFound`] when the set has no clip of that name;
/// otherwise as [`retarget`].
pub fn retarget_by_name(
    clips: &[AnimationClip],
    clip_name: &str,
    rig: &impl HumanoidRig,
) -> Result<AnimationClip> {
    let clip = AnimationClip::find_by_name(clips, clip_name)
        .ok_or_else(|| RetargetError::ClipNotFound(clip_name.to_string()))?;
    retarget(clip, rig)
}
