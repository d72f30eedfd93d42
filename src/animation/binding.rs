/// The transform property a track drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPath {
    Translation, // Maps to transform.position
    Rotation,    // Maps to transform.rotation
    Scale,       // Maps to transform.scale
}

impl TargetPath {
    /// Parses a property name as it appears in loader-produced track names
    /// (`"position"`, `"rotation"`, `"scale"`).
    #[must_use]
    pub fn from_property_name(name: &str) -> Option<Self> {
        match name {
            "position" => Some(Self::Translation),
            "rotation" => Some(Self::Rotation),
            "scale" => Some(Self::Scale),
            _ => None,
        }
    }

    /// The property name used when re-keying tracks (`<node>.<property>`).
    #[must_use]
    pub fn property_name(self) -> &'static str {
        match self {
            Self::Translation => "position",
            Self::Rotation => "rotation",
            Self::Scale => "scale",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_name_round_trip() {
        for path in [TargetPath::Translation, TargetPath::Rotation, TargetPath::Scale] {
            assert_eq!(TargetPath::from_property_name(path.property_name()), Some(path));
        }
    }

    #[test]
    fn test_unknown_property() {
        assert_eq!(TargetPath::from_property_name("morphTargetInfluences"), None);
        assert_eq!(TargetPath::from_property_name(""), None);
    }
}
