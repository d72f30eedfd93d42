//! Retargets a hand-built Mixamo-style clip onto a legacy-schema rig and
//! prints the resulting tracks. Run with `RUST_LOG=debug` to see which
//! tracks get dropped and why.

use glam::{Quat, Vec3};
use rig_retarget::{
    AnimationClip, BoneRole, Humanoid, InterpolationMode, KeyframeTrack, SchemaVersion, TargetPath,
    Track, TrackData, TrackMeta, retarget_with_stats,
};

fn main() {
    env_logger::init();

    let clip = AnimationClip::new(
        "mixamo.com",
        vec![
            Track {
                meta: TrackMeta::new("mixamorigHips", TargetPath::Translation),
                data: TrackData::Vector3(KeyframeTrack::new(
                    vec![0.0, 0.5, 1.0],
                    vec![
                        Vec3::new(0.0, 95.0, 0.0),
                        Vec3::new(2.0, 98.0, 12.0),
                        Vec3::new(0.0, 95.0, 24.0),
                    ],
                    InterpolationMode::Linear,
                )),
            },
            Track {
                meta: TrackMeta::new("mixamorigHips", TargetPath::Rotation),
                data: TrackData::Quaternion(KeyframeTrack::new(
                    vec![0.0, 1.0],
                    vec![Quat::IDENTITY, Quat::from_rotation_y(0.3)],
                    InterpolationMode::Linear,
                )),
            },
            // A control bone with no humanoid role; this one gets dropped.
            Track {
                meta: TrackMeta::new("Armature", TargetPath::Rotation),
                data: TrackData::Quaternion(KeyframeTrack::new(
                    vec![0.0],
                    vec![Quat::IDENTITY],
                    InterpolationMode::Step,
                )),
            },
        ],
    );

    let rig = Humanoid::new(SchemaVersion::Legacy)
        .with_node(BoneRole::Hips, "J_Bip_C_Hips")
        .with_node(BoneRole::Spine, "J_Bip_C_Spine");

    match retarget_with_stats(&clip, &rig) {
        Ok((out, stats)) => {
            println!(
                "retargeted clip {:?}: {} of {} tracks kept ({} unmapped, {} missing)",
                out.name, stats.retargeted, stats.total, stats.unmapped, stats.missing_target
            );
            for track in &out.tracks {
                println!("  {} ({} keys)", track.meta.track_name(), track.data.len());
            }
        }
        Err(err) => eprintln!("retargeting failed: {err}"),
    }
}
