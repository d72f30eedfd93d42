//! Fixed source-rig bone name table.
//!
//! Maps Mixamo rig bone names to canonical humanoid bone roles. The table
//! is static and total over every humanoid bone a valid Mixamo clip can
//! reference; auxiliary bones (root, IK controls, props) are simply absent
//! and resolve to `None`.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::humanoid::BoneRole;

const MIXAMO_RIG_TABLE: &[(&str, BoneRole)] = &[
    ("mixamorigHips", BoneRole::Hips),
    ("mixamorigSpine", BoneRole::Spine),
    ("mixamorigSpine1", BoneRole::Chest),
    ("mixamorigSpine2", BoneRole::UpperChest),
    ("mixamorigNeck", BoneRole::Neck),
    ("mixamorigHead", BoneRole::Head),
    ("mixamorigLeftShoulder", BoneRole::LeftShoulder),
    ("mixamorigLeftArm", BoneRole::LeftUpperArm),
    ("mixamorigLeftForeArm", BoneRole::LeftLowerArm),
    ("mixamorigLeftHand", BoneRole::LeftHand),
    ("mixamorigLeftHandThumb1", BoneRole::LeftThumbMetacarpal),
    ("mixamorigLeftHandThumb2", BoneRole::LeftThumbProximal),
    ("mixamorigLeftHandThumb3", BoneRole::LeftThumbDistal),
    ("mixamorigLeftHandIndex1", BoneRole::LeftIndexProximal),
    ("mixamorigLeftHandIndex2", BoneRole::LeftIndexIntermediate),
    ("mixamorigLeftHandIndex3", BoneRole::LeftIndexDistal),
    ("mixamorigLeftHandMiddle1", BoneRole::LeftMiddleProximal),
    ("mixamorigLeftHandMiddle2", BoneRole::LeftMiddleIntermediate),
    ("mixamorigLeftHandMiddle3", BoneRole::LeftMiddleDistal),
    ("mixamorigLeftHandRing1", BoneRole::LeftRingProximal),
    ("mixamorigLeftHandRing2", BoneRole::LeftRingIntermediate),
    ("mixamorigLeftHandRing3", BoneRole::LeftRingDistal),
    ("mixamorigLeftHandPinky1", BoneRole::LeftLittleProximal),
    ("mixamorigLeftHandPinky2", BoneRole::LeftLittleIntermediate),
    ("mixamorigLeftHandPinky3", BoneRole::LeftLittleDistal),
    ("mixamorigRightShoulder", BoneRole::RightShoulder),
    ("mixamorigRightArm", BoneRole::RightUpperArm),
    ("mixamorigRightForeArm", BoneRole::RightLowerArm),
    ("mixamorigRightHand", BoneRole::RightHand),
    ("mixamorigRightHandPinky1", BoneRole::RightLittleProximal),
    ("mixamorigRightHandPinky2", BoneRole::RightLittleIntermediate),
    ("mixamorigRightHandPinky3", BoneRole::RightLittleDistal),
    ("mixamorigRightHandRing1", BoneRole::RightRingProximal),
    ("mixamorigRightHandRing2", BoneRole::RightRingIntermediate),
    ("mixamorigRightHandRing3", BoneRole::RightRingDistal),
    ("mixamorigRightHandMiddle1", BoneRole::RightMiddleProximal),
    ("mixamorigRightHandMiddle2", BoneRole::RightMiddleIntermediate),
    ("mixamorigRightHandMiddle3", BoneRole::RightMiddleDistal),
    ("mixamorigRightHandIndex1", BoneRole::RightIndexProximal),
    ("mixamorigRightHandIndex2", BoneRole::RightIndexIntermediate),
    ("mixamorigRightHandIndex3", BoneRole::RightIndexDistal),
    ("mixamorigRightHandThumb1", BoneRole::RightThumbMetacarpal),
    ("mixamorigRightHandThumb2", BoneRole::RightThumbProximal),
    ("mixamorigRightHandThumb3", BoneRole::RightThumbDistal),
    ("mixamorigLeftUpLeg", BoneRole::LeftUpperLeg),
    ("mixamorigLeftLeg", BoneRole::LeftLowerLeg),
    ("mixamorigLeftFoot", BoneRole::LeftFoot),
    ("mixamorigLeftToeBase", BoneRole::LeftToes),
    ("mixamorigRightUpLeg", BoneRole::RightUpperLeg),
    ("mixamorigRightLeg", BoneRole::RightLowerLeg),
    ("mixamorigRightFoot", BoneRole::RightFoot),
    ("mixamorigRightToeBase", BoneRole::RightToes),
];

static MIXAMO_RIG_MAP: LazyLock<FxHashMap<&'static str, BoneRole>> =
    LazyLock::new(|| MIXAMO_RIG_TABLE.iter().copied().collect());

/// Resolves a source-rig bone name to its canonical humanoid role.
///
/// `None` is a routine outcome, not an error: clips regularly carry tracks
/// for bones outside the humanoid vocabulary.
#[must_use]
pub fn resolve_role(source_bone: &str) -> Option<BoneRole> {
    MIXAMO_RIG_MAP.get(source_bone).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_bones() {
        assert_eq!(resolve_role("mixamorigHips"), Some(BoneRole::Hips));
        assert_eq!(resolve_role("mixamorigSpine2"), Some(BoneRole::UpperChest));
        assert_eq!(
            resolve_role("mixamorigRightHandPinky3"),
            Some(BoneRole::RightLittleDistal)
        );
        assert_eq!(resolve_role("mixamorigLeftToeBase"), Some(BoneRole::LeftToes));
    }

    #[test]
    fn test_resolve_unknown_bones() {
        // Auxiliary bones with no humanoid-role equivalent
        assert_eq!(resolve_role("mixamorigLeftToe_End"), None);
        assert_eq!(resolve_role("Armature"), None);
        assert_eq!(resolve_role(""), None);
    }

    #[test]
    fn test_table_covers_every_role() {
        // Each of the 52 canonical roles is reachable from exactly one
        // source bone name.
        let mut roles: Vec<BoneRole> = MIXAMO_RIG_TABLE.iter().map(|&(_, role)| role).collect();
        assert_eq!(roles.len(), BoneRole::ALL.len());
        roles.sort_unstable_by_key(|role| role.name());
        roles.dedup();
        assert_eq!(roles.len(), BoneRole::ALL.len());
    }
}
