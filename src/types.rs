//! Option value types for the project wizard
//!
//! Every enum's `Display` string is the exact identifier the generation
//! backend keys on (e.g. "net8.0", "mvux", "xaml") - case matters, so the
//! strings live here and nowhere else. Human-readable labels for the form are
//! separate `label()` methods.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// Coarse configuration profile applied across all blocks.
///
/// `Custom` is a sentinel: it carries no fixed values and means "the current
/// values were reached via independent edits". It serializes to the empty
/// string because the generator has no key for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Preset {
    #[strum(serialize = "blank")]
    Blank,
    #[default]
    #[strum(serialize = "recommended")]
    Recommended,
    #[strum(serialize = "")]
    Custom,
}

impl Preset {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Blank => "Blank",
            Self::Recommended => "Recommended",
            Self::Custom => "Custom",
        }
    }
}

/// Target framework version.
///
/// `Net80` is the lowest supported version; WASM multi-threading is only
/// available on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Framework {
    #[default]
    #[strum(serialize = "net8.0")]
    Net80,
    #[strum(serialize = "net9.0")]
    Net90,
}

impl Framework {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Net80 => ".NET 8.0",
            Self::Net90 => ".NET 9.0",
        }
    }
}

/// Presentation architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Architecture {
    None,
    Mvvm,
    #[default]
    Mvux,
}

impl Architecture {
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Mvvm => "MVVM",
            Self::Mvux => "MVUX",
        }
    }
}

/// UI markup language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Markup {
    #[default]
    #[strum(serialize = "xaml")]
    Xaml,
    #[strum(serialize = "csharp")]
    CSharp,
}

impl Markup {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Xaml => "XAML",
            Self::CSharp => "C# Markup",
        }
    }
}

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Material,
    Fluent,
    Cupertino,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Material => "Material",
            Self::Fluent => "Fluent",
            Self::Cupertino => "Cupertino",
        }
    }

    /// Only Material ships a design-system import; the other themes force the
    /// DSP flag off.
    pub fn supports_dsp(&self) -> bool {
        matches!(self, Self::Material)
    }
}

/// Navigation style provided by the extensions stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Navigation {
    #[default]
    Regions,
    Blank,
}

impl Navigation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Regions => "Regions",
            Self::Blank => "Blank",
        }
    }
}

/// Logging stack.
///
/// `Console` maps to the generator value "none" (plain console output, no
/// logging extension).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Logging {
    #[strum(serialize = "none")]
    Console,
    #[default]
    #[strum(serialize = "default")]
    Default,
    #[strum(serialize = "serilog")]
    Serilog,
}

impl Logging {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Console => "Console",
            Self::Default => "Default",
            Self::Serilog => "Serilog",
        }
    }
}

/// Authentication provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Auth {
    #[default]
    #[strum(serialize = "none")]
    None,
    #[strum(serialize = "custom")]
    Custom,
    #[strum(serialize = "msal")]
    Msal,
    #[strum(serialize = "oidc")]
    Oidc,
    // The generator key is capital-W "Web"; keep the exact string.
    #[strum(serialize = "Web")]
    Web,
}

impl Auth {
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Custom => "Custom",
            Self::Msal => "MSAL",
            Self::Oidc => "OIDC",
            Self::Web => "Web",
        }
    }
}

/// Continuous integration pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Ci {
    #[default]
    None,
    Azure,
    Github,
}

impl Ci {
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Azure => "Azure Pipelines",
            Self::Github => "GitHub Actions",
        }
    }
}

/// Target platform flag set.
///
/// Serializes to a pipe-delimited list of the enabled flags in the fixed
/// order android, ios, wasm, maccatalyst, windows, desktop; the empty
/// selection serializes to an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSelection {
    pub android: bool,
    pub ios: bool,
    pub wasm: bool,
    pub maccatalyst: bool,
    pub windows: bool,
    pub desktop: bool,
}

impl PlatformSelection {
    pub const ALL: Self = Self {
        android: true,
        ios: true,
        wasm: true,
        maccatalyst: true,
        windows: true,
        desktop: true,
    };

    pub const NONE: Self = Self {
        android: false,
        ios: false,
        wasm: false,
        maccatalyst: false,
        windows: false,
        desktop: false,
    };

    /// Flag names and states in serialization order.
    pub fn flags(&self) -> [(&'static str, bool); 6] {
        [
            ("android", self.android),
            ("ios", self.ios),
            ("wasm", self.wasm),
            ("maccatalyst", self.maccatalyst),
            ("windows", self.windows),
            ("desktop", self.desktop),
        ]
    }

    /// Number of enabled platform flags.
    pub fn enabled_count(&self) -> usize {
        self.flags().iter().filter(|(_, on)| *on).count()
    }
}

impl Default for PlatformSelection {
    fn default() -> Self {
        Self::ALL
    }
}

impl fmt::Display for PlatformSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let enabled: Vec<&str> = self
            .flags()
            .iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| *name)
            .collect();
        write!(f, "{}", enabled.join("|"))
    }
}

/// Test project flag set.
///
/// Serializes like [`PlatformSelection`] but falls back to the literal
/// "none" when both flags are off, because the generator expects a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSelection {
    pub unit: bool,
    pub ui: bool,
}

impl TestSelection {
    pub const BOTH: Self = Self { unit: true, ui: true };
    pub const NONE: Self = Self {
        unit: false,
        ui: false,
    };
}

impl Default for TestSelection {
    fn default() -> Self {
        Self::BOTH
    }
}

impl fmt::Display for TestSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.unit, self.ui) {
            (true, true) => write!(f, "unit|ui"),
            (true, false) => write!(f, "unit"),
            (false, true) => write!(f, "ui"),
            (false, false) => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_identifiers_are_exact() {
        assert_eq!(Framework::Net80.to_string(), "net8.0");
        assert_eq!(Framework::Net90.to_string(), "net9.0");
        assert_eq!(Architecture::Mvux.to_string(), "mvux");
        assert_eq!(Markup::Xaml.to_string(), "xaml");
        assert_eq!(Theme::Fluent.to_string(), "fluent");
        assert_eq!(Logging::Console.to_string(), "none");
        assert_eq!(Auth::Web.to_string(), "Web");
        assert_eq!(Ci::Github.to_string(), "github");
    }

    #[test]
    fn test_preset_custom_serializes_empty() {
        assert_eq!(Preset::Blank.to_string(), "blank");
        assert_eq!(Preset::Recommended.to_string(), "recommended");
        assert_eq!(Preset::Custom.to_string(), "");
    }

    #[test]
    fn test_platform_selection_display_order() {
        let sel = PlatformSelection {
            android: true,
            ios: false,
            wasm: true,
            maccatalyst: false,
            windows: false,
            desktop: false,
        };
        assert_eq!(sel.to_string(), "android|wasm");
        assert_eq!(
            PlatformSelection::ALL.to_string(),
            "android|ios|wasm|maccatalyst|windows|desktop"
        );
        assert_eq!(PlatformSelection::NONE.to_string(), "");
    }

    #[test]
    fn test_test_selection_none_fallback() {
        assert_eq!(TestSelection::BOTH.to_string(), "unit|ui");
        assert_eq!(TestSelection::NONE.to_string(), "none");
        assert_eq!(
            TestSelection {
                unit: true,
                ui: false
            }
            .to_string(),
            "unit"
        );
        assert_eq!(
            TestSelection {
                unit: false,
                ui: true
            }
            .to_string(),
            "ui"
        );
    }

    #[test]
    fn test_defaults_match_recommended_profile() {
        assert_eq!(Preset::default(), Preset::Recommended);
        assert_eq!(Framework::default(), Framework::Net80);
        assert_eq!(Architecture::default(), Architecture::Mvux);
        assert_eq!(Theme::default(), Theme::Material);
        assert_eq!(Navigation::default(), Navigation::Regions);
        assert_eq!(Logging::default(), Logging::Default);
        assert_eq!(Auth::default(), Auth::None);
        assert_eq!(Ci::default(), Ci::None);
        assert_eq!(PlatformSelection::default(), PlatformSelection::ALL);
        assert_eq!(TestSelection::default(), TestSelection::BOTH);
    }
}
