use serde::Serialize;

/// Version label reported by the service.
///
/// Each tutorial checkpoint bumps this value through the `VERSION`
/// environment variable so a rollout is visible in responses. The label
/// is free text but never empty; blank input falls back to the default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AppVersion(String);

impl AppVersion {
    /// Version reported when none is configured.
    pub const DEFAULT: &'static str = "3.0";

    /// Creates a version label, trimming surrounding whitespace.
    ///
    /// Returns the default version when the trimmed input is empty.
    pub fn new(label: impl AsRef<str>) -> Self {
        let trimmed = label.as_ref().trim();
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Builds a version from an optional raw value, as read from the environment.
    pub fn from_optional(raw: Option<&str>) -> Self {
        raw.map(Self::new).unwrap_or_default()
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when this is the built-in default label.
    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }
}

impl Default for AppVersion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl std::fmt::Display for AppVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
