use rustc_hash::FxHashMap;

use crate::humanoid::BoneRole;

/// The target rig's authoring convention generation.
///
/// Two historically divergent conventions exist: `Legacy` rigs (VRM 0.x)
/// were authored with flipped X/Z handedness and need sign correction on
/// rotation and translation channels; `Current` rigs (VRM 1.0) need none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVersion {
    Legacy,
    Current,
}

impl SchemaVersion {
    #[must_use]
    pub fn is_legacy(self) -> bool {
        matches!(self, SchemaVersion::Legacy)
    }
}

/// Live query interface over a target humanoid skeleton.
///
/// Implementations map canonical bone roles to the runtime node names of a
/// particular skeleton instance. Instances may omit optional bones (e.g.
/// upper chest); `node_for_role` returns `None` for those, which the
/// retargeter treats as "drop the track", never as an error.
pub trait HumanoidRig {
    /// Runtime node name for `role`, if this skeleton has that bone.
    fn node_for_role(&self, role: BoneRole) -> Option<&str>;

    /// Which authoring convention this skeleton was built against.
    fn schema_version(&self) -> SchemaVersion;
}

/// A plain map-backed humanoid rig.
///
/// Engine skeletons can implement [`HumanoidRig`] directly over their node
/// storage; `Humanoid` covers consumers (and tests) that already hold a
/// role → node-name table, e.g. decoded from a VRM humanoid descriptor.
#[derive(Debug, Clone)]
pub struct Humanoid {
    nodes: FxHashMap<BoneRole, String>,
    version: SchemaVersion,
}

impl Humanoid {
    #[must_use]
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            nodes: FxHashMap::default(),
            version,
        }
    }

    /// Registers the runtime node name for a bone role.
    pub fn set_node(&mut self, role: BoneRole, node_name: impl Into<String>) {
        self.nodes.insert(role, node_name.into());
    }

    /// Builder-style variant of [`set_node`](Self::set_node).
    #[must_use]
    pub fn with_node(mut self, role: BoneRole, node_name: impl Into<String>) -> Self {
        self.set_node(role, node_name);
        self
    }

    /// Number of bones present in this instance.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl HumanoidRig for Humanoid {
    fn node_for_role(&self, role: BoneRole) -> Option<&str> {
        self.nodes.get(&role).map(String::as_str)
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_lookup() {
        let rig = Humanoid::new(SchemaVersion::Current)
            .with_node(BoneRole::Hips, "J_Bip_C_Hips")
            .with_node(BoneRole::Head, "J_Bip_C_Head");

        assert_eq!(rig.node_for_role(BoneRole::Hips), Some("J_Bip_C_Hips"));
        // Optional bone absent from this instance
        assert_eq!(rig.node_for_role(BoneRole::UpperChest), None);
        assert_eq!(rig.schema_version(), SchemaVersion::Current);
    }

    #[test]
    fn test_is_legacy() {
        assert!(SchemaVersion::Legacy.is_legacy());
        assert!(!SchemaVersion::Current.is_legacy());
    }
}
