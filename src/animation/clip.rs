use glam::{Quat, Vec3};

use crate::animation::binding::TargetPath;
use crate::animation::tracks::KeyframeTrack;

/// Identifies what a track drives: a node by name, and one of its
/// transform properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMeta {
    pub node_name: String,
    pub target: TargetPath,
}

impl TrackMeta {
    #[must_use]
    pub fn new(node_name: impl Into<String>, target: TargetPath) -> Self {
        Self {
            node_name: node_name.into(),
            target,
        }
    }

    /// Parses a loader-style track name of the form `<node>.<property>`,
    /// split on the first separator. Returns `None` when the separator is
    /// missing or the property is outside the closed set.
    #[must_use]
    pub fn parse(track_name: &str) -> Option<Self> {
        let (node_name, property) = track_name.split_once('.')?;
        let target = TargetPath::from_property_name(property)?;
        Some(Self::new(node_name, target))
    }

    /// The full track name, `<node>.<property>`.
    #[must_use]
    pub fn track_name(&self) -> String {
        format!("{}.{}", self.node_name, self.target.property_name())
    }
}

/// Keyframe payload, tagged by value type.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackData {
    Vector3(KeyframeTrack<Vec3>),
    Quaternion(KeyframeTrack<Quat>),
    Scalar(KeyframeTrack<f32>),
}

impl TrackData {
    /// Time stamp of the last keyframe, or 0.0 for an empty track.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        match self {
            TrackData::Vector3(track) => track.end_time(),
            TrackData::Quaternion(track) => track.end_time(),
            TrackData::Scalar(track) => track.end_time(),
        }
    }

    /// Number of keyframes.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            TrackData::Vector3(track) => track.times.len(),
            TrackData::Quaternion(track) => track.times.len(),
            TrackData::Scalar(track) => track.times.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A complete track: metadata plus keyframe data.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub meta: TrackMeta,
    pub data: TrackData,
}

/// A named, immutable set of keyframe tracks.
///
/// Clips are value objects: retargeting reads a clip and builds a new one,
/// it never rewrites tracks in place.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    pub tracks: Vec<Track>,
}

impl AnimationClip {
    /// Builds a clip whose duration is the maximum end time of its tracks.
    #[must_use]
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        let duration = tracks
            .iter()
            .map(|t| t.data.end_time())
            .fold(0.0_f32, f32::max);

        Self {
            name: name.into(),
            duration,
            tracks,
        }
    }

    /// Builds a clip with an explicit duration, e.g. to carry over a source
    /// clip's duration after tracks were dropped.
    #[must_use]
    pub fn with_duration(name: impl Into<String>, duration: f32, tracks: Vec<Track>) -> Self {
        Self {
            name: name.into(),
            duration,
            tracks,
        }
    }

    /// Looks up a clip by name in a loader-produced animation set.
    #[must_use]
    pub fn find_by_name<'a>(clips: &'a [AnimationClip], name: &str) -> Option<&'a AnimationClip> {
        clips.iter().find(|clip| clip.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::tracks::InterpolationMode;

    fn scalar_track(times: Vec<f32>) -> TrackData {
        let values = vec![0.0_f32; times.len()];
        TrackData::Scalar(KeyframeTrack::new(times, values, InterpolationMode::Linear))
    }

    #[test]
    fn test_parse_track_name() {
        let meta = TrackMeta::parse("mixamorigHips.position").unwrap();
        assert_eq!(meta.node_name, "mixamorigHips");
        assert_eq!(meta.target, TargetPath::Translation);
        assert_eq!(meta.track_name(), "mixamorigHips.position");
    }

    #[test]
    fn test_parse_rejects_malformed_names() {
        assert!(TrackMeta::parse("mixamorigHips").is_none());
        assert!(TrackMeta::parse("mixamorigHips.visibility").is_none());
    }

    #[test]
    fn test_parse_splits_on_first_separator() {
        // Node names may themselves contain dots; the property is everything
        // after the first one, so this is not a valid property.
        assert!(TrackMeta::parse("a.b.rotation").is_none());
    }

    #[test]
    fn test_clip_duration_is_max_track_end() {
        let clip = AnimationClip::new(
            "walk",
            vec![
                Track {
                    meta: TrackMeta::new("a", TargetPath::Rotation),
                    data: scalar_track(vec![0.0, 1.0]),
                },
                Track {
                    meta: TrackMeta::new("b", TargetPath::Rotation),
                    data: scalar_track(vec![0.0, 2.5]),
                },
            ],
        );
        assert!((clip.duration - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_find_by_name() {
        let clips = vec![
            AnimationClip::new("idle", vec![]),
            AnimationClip::new("walk", vec![]),
        ];
        assert!(AnimationClip::find_by_name(&clips, "walk").is_some());
        assert!(AnimationClip::find_by_name(&clips, "run").is_none());
    }
}
