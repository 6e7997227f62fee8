// The three version values propagated from CMakeLists.txt into util.cmake

/// The three version-related values read from the source file.
///
/// Each value starts at the literal default `"0"` and is set at most once:
/// the first matching line wins, later matches are ignored. Fields that are
/// never found keep the default; that is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTriple {
    pub version: String,
    pub version2: String,
    pub soversion: String,
    version_found: bool,
    version2_found: bool,
    soversion_found: bool,
}

impl Default for VersionTriple {
    fn default() -> Self {
        Self {
            version: "0".to_string(),
            version2: "0".to_string(),
            soversion: "0".to_string(),
            version_found: false,
            version2_found: false,
            soversion_found: false,
        }
    }
}

impl VersionTriple {
    /// Record the VERSION value unless one was already found.
    pub fn set_version(&mut self, value: String) {
        if !self.version_found {
            self.version = value;
            self.version_found = true;
        }
    }

    /// Record the VERSION2 value unless one was already found.
    pub fn set_version2(&mut self, value: String) {
        if !self.version2_found {
            self.version2 = value;
            self.version2_found = true;
        }
    }

    /// Record the SOVERSION value unless one was already found.
    pub fn set_soversion(&mut self, value: String) {
        if !self.soversion_found {
            self.soversion = value;
            self.soversion_found = true;
        }
    }

    /// True once all three fields have been found, allowing the scan to
    /// stop early.
    pub fn is_complete(&self) -> bool {
        self.version_found && self.version2_found && self.soversion_found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_zero() {
        let triple = VersionTriple::default();

        assert_eq!(triple.version, "0");
        assert_eq!(triple.version2, "0");
        assert_eq!(triple.soversion, "0");
        assert!(!triple.is_complete());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut triple = VersionTriple::default();

        triple.set_version("2017".to_string());
        triple.set_version("2018".to_string());

        assert_eq!(triple.version, "2017");
    }

    #[test]
    fn test_fields_are_independent() {
        let mut triple = VersionTriple::default();

        triple.set_version2("2017.1".to_string());

        assert_eq!(triple.version, "0");
        assert_eq!(triple.version2, "2017.1");
        assert_eq!(triple.soversion, "0");
    }

    #[test]
    fn test_is_complete_after_all_three() {
        let mut triple = VersionTriple::default();

        triple.set_version("2017".to_string());
        triple.set_version2("2017.1".to_string());
        assert!(!triple.is_complete());

        triple.set_soversion("8".to_string());
        assert!(triple.is_complete());
    }
}
