use serde::{Deserialize, Serialize};

/// Restricts which live windows a capture keeps, by executable name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureFilter {
    #[default]
    All,
    /// Keep only windows whose executable name contains the fragment.
    OnlyExe(String),
    /// Keep only windows whose executable name does not contain the fragment.
    ExcludeExe(String),
}

impl CaptureFilter {
    pub fn keeps(&self, exe: &str) -> bool {
        match self {
            CaptureFilter::All => true,
            CaptureFilter::OnlyExe(fragment) => contains_ignore_case(exe, fragment),
            CaptureFilter::ExcludeExe(fragment) => !contains_ignore_case(exe, fragment),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureOptions {
    pub filter: CaptureFilter,
    /// Annotate each persisted window with its stacking rank and order the
    /// window list front-to-back.
    pub tag_z_order: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            filter: CaptureFilter::All,
            tag_z_order: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestoreOptions {
    /// Minimum fuzzy match score (0-100, inclusive) for a window to be
    /// restored.
    pub threshold: u32,
    /// Switch back to the desktop that was active when the restore began.
    pub return_to_origin: bool,
    /// Skip windows whose recorded top-left corner falls outside the current
    /// display topology.
    pub validate_bounds: bool,
    /// Grab margin for the bounds check, in physical pixels.
    pub margin_px: i32,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        Self {
            threshold: 85,
            return_to_origin: true,
            validate_bounds: true,
            margin_px: 20,
        }
    }
}
