use std::fmt;
use std::str::FromStr;

/// A rig-agnostic humanoid bone identity, the common vocabulary between
/// source and target rigs. Names follow the VRM humanoid bone naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoneRole {
    // Torso
    Hips,
    Spine,
    Chest,
    UpperChest,
    Neck,
    Head,

    // Left arm
    LeftShoulder,
    LeftUpperArm,
    LeftLowerArm,
    LeftHand,
    LeftThumbMetacarpal,
    LeftThumbProximal,
    LeftThumbDistal,
    LeftIndexProximal,
    LeftIndexIntermediate,
    LeftIndexDistal,
    LeftMiddleProximal,
    LeftMiddleIntermediate,
    LeftMiddleDistal,
    LeftRingProximal,
    LeftRingIntermediate,
    LeftRingDistal,
    LeftLittleProximal,
    LeftLittleIntermediate,
    LeftLittleDistal,

    // Right arm
    RightShoulder,
    RightUpperArm,
    RightLowerArm,
    RightHand,
    RightThumbMetacarpal,
    RightThumbProximal,
    RightThumbDistal,
    RightIndexProximal,
    RightIndexIntermediate,
    RightIndexDistal,
    RightMiddleProximal,
    RightMiddleIntermediate,
    RightMiddleDistal,
    RightRingProximal,
    RightRingIntermediate,
    RightRingDistal,
    RightLittleProximal,
    RightLittleIntermediate,
    RightLittleDistal,

    // Left leg
    LeftUpperLeg,
    LeftLowerLeg,
    LeftFoot,
    LeftToes,

    // Right leg
    RightUpperLeg,
    RightLowerLeg,
    RightFoot,
    RightToes,
}

impl BoneRole {
    /// Every role, in declaration order.
    pub const ALL: [BoneRole; 52] = [
        BoneRole::Hips,
        BoneRole::Spine,
        BoneRole::Chest,
        BoneRole::UpperChest,
        BoneRole::Neck,
        BoneRole::Head,
        BoneRole::LeftShoulder,
        BoneRole::LeftUpperArm,
        BoneRole::LeftLowerArm,
        BoneRole::LeftHand,
        BoneRole::LeftThumbMetacarpal,
        BoneRole::LeftThumbProximal,
        BoneRole::LeftThumbDistal,
        BoneRole::LeftIndexProximal,
        BoneRole::LeftIndexIntermediate,
        BoneRole::LeftIndexDistal,
        BoneRole::LeftMiddleProximal,
        BoneRole::LeftMiddleIntermediate,
        BoneRole::LeftMiddleDistal,
        BoneRole::LeftRingProximal,
        BoneRole::LeftRingIntermediate,
        BoneRole::LeftRingDistal,
        BoneRole::LeftLittleProximal,
        BoneRole::LeftLittleIntermediate,
        BoneRole::LeftLittleDistal,
        BoneRole::RightShoulder,
        BoneRole::RightUpperArm,
        BoneRole::RightLowerArm,
        BoneRole::RightHand,
        BoneRole::RightThumbMetacarpal,
        BoneRole::RightThumbProximal,
        BoneRole::RightThumbDistal,
        BoneRole::RightIndexProximal,
        BoneRole::RightIndexIntermediate,
        BoneRole::RightIndexDistal,
        BoneRole::RightMiddleProximal,
        BoneRole::RightMiddleIntermediate,
        BoneRole::RightMiddleDistal,
        BoneRole::RightRingProximal,
        BoneRole::RightRingIntermediate,
        BoneRole::RightRingDistal,
        BoneRole::RightLittleProximal,
        BoneRole::RightLittleIntermediate,
        BoneRole::RightLittleDistal,
        BoneRole::LeftUpperLeg,
        BoneRole::LeftLowerLeg,
        BoneRole::LeftFoot,
        BoneRole::LeftToes,
        BoneRole::RightUpperLeg,
        BoneRole::RightLowerLeg,
        BoneRole::RightFoot,
        BoneRole::RightToes,
    ];

    /// The canonical camelCase bone name, as VRM humanoid descriptors spell it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BoneRole::Hips => "hips",
            BoneRole::Spine => "spine",
            BoneRole::Chest => "chest",
            BoneRole::UpperChest => "upperChest",
            BoneRole::Neck => "neck",
            BoneRole::Head => "head",
            BoneRole::LeftShoulder => "leftShoulder",
            BoneRole::LeftUpperArm => "leftUpperArm",
            BoneRole::LeftLowerArm => "leftLowerArm",
            BoneRole::LeftHand => "leftHand",
            BoneRole::LeftThumbMetacarpal => "leftThumbMetacarpal",
            BoneRole::LeftThumbProximal => "leftThumbProximal",
            BoneRole::LeftThumbDistal => "leftThumbDistal",
            BoneRole::LeftIndexProximal => "leftIndexProximal",
            BoneRole::LeftIndexIntermediate => "leftIndexIntermediate",
            BoneRole::LeftIndexDistal => "leftIndexDistal",
            BoneRole::LeftMiddleProximal => "leftMiddleProximal",
            BoneRole::LeftMiddleIntermediate => "leftMiddleIntermediate",
            BoneRole::LeftMiddleDistal => "leftMiddleDistal",
            BoneRole::LeftRingProximal => "leftRingProximal",
            BoneRole::LeftRingIntermediate => "leftRingIntermediate",
            BoneRole::LeftRingDistal => "leftRingDistal",
            BoneRole::LeftLittleProximal => "leftLittleProximal",
            BoneRole::LeftLittleIntermediate => "leftLittleIntermediate",
            BoneRole::LeftLittleDistal => "leftLittleDistal",
            BoneRole::RightShoulder => "rightShoulder",
            BoneRole::RightUpperArm => "rightUpperArm",
            BoneRole::RightLowerArm => "rightLowerArm",
            BoneRole::RightHand => "rightHand",
            BoneRole::RightThumbMetacarpal => "rightThumbMetacarpal",
            BoneRole::RightThumbProximal => "rightThumbProximal",
            BoneRole::RightThumbDistal => "rightThumbDistal",
            BoneRole::RightIndexProximal => "rightIndexProximal",
            BoneRole::RightIndexIntermediate => "rightIndexIntermediate",
            BoneRole::RightIndexDistal => "rightIndexDistal",
            BoneRole::RightMiddleProximal => "rightMiddleProximal",
            BoneRole::RightMiddleIntermediate => "rightMiddleIntermediate",
            BoneRole::RightMiddleDistal => "rightMiddleDistal",
            BoneRole::RightRingProximal => "rightRingProximal",
            BoneRole::RightRingIntermediate => "rightRingIntermediate",
            BoneRole::RightRingDistal => "rightRingDistal",
            BoneRole::RightLittleProximal => "rightLittleProximal",
            BoneRole::RightLittleIntermediate => "rightLittleIntermediate",
            BoneRole::RightLittleDistal => "rightLittleDistal",
            BoneRole::LeftUpperLeg => "leftUpperLeg",
            BoneRole::LeftLowerLeg => "leftLowerLeg",
            BoneRole::LeftFoot => "leftFoot",
            BoneRole::LeftToes => "leftToes",
            BoneRole::RightUpperLeg => "rightUpperLeg",
            BoneRole::RightLowerLeg => "rightLowerLeg",
            BoneRole::RightFoot => "rightFoot",
            BoneRole::RightToes => "rightToes",
        }
    }
}

impl fmt::Display for BoneRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoneRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoneRole::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for role in BoneRole::ALL {
            assert_eq!(role.name().parse::<BoneRole>(), Ok(role));
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = BoneRole::ALL.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BoneRole::ALL.len());
    }

    #[test]
    fn test_unknown_name() {
        assert!("root".parse::<BoneRole>().is_err());
        assert!("Hips".parse::<BoneRole>().is_err());
    }
}
