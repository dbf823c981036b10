use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Landscape,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Portrait => "9:16",
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape => "16:9",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named advertising format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputPreset {
    pub id: &'static str,
    pub display_name: &'static str,
    pub aspect_ratio: AspectRatio,
}

/// Every supported format. The first entry is the default selection.
pub static PRESETS: [OutputPreset; 3] = [
    OutputPreset {
        id: "story",
        display_name: "Instagram Story / TikTok",
        aspect_ratio: AspectRatio::Portrait,
    },
    OutputPreset {
        id: "square",
        display_name: "Instagram Post",
        aspect_ratio: AspectRatio::Square,
    },
    OutputPreset {
        id: "landscape",
        display_name: "Facebook / X Banner",
        aspect_ratio: AspectRatio::Landscape,
    },
];

impl OutputPreset {
    pub fn find(id: &str) -> Option<&'static OutputPreset> {
        PRESETS.iter().find(|preset| preset.id == id)
    }

    pub fn default_preset() -> &'static OutputPreset {
        &PRESETS[0]
    }

    pub fn ids() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|preset| preset.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_is_first_preset() {
        assert_eq!(OutputPreset::default_preset().id, "story");
        assert_eq!(
            OutputPreset::default_preset().aspect_ratio,
            AspectRatio::Portrait
        );
    }

    #[test]
    fn test_find_by_id() {
        let square = OutputPreset::find("square").unwrap();
        assert_eq!(square.aspect_ratio.as_str(), "1:1");
        assert_eq!(
            OutputPreset::find("landscape").unwrap().aspect_ratio,
            AspectRatio::Landscape
        );
        assert!(OutputPreset::find("billboard").is_none());
    }

    #[test]
    fn test_aspect_ratio_serializes_as_ratio_string() {
        let json = serde_json::to_string(&AspectRatio::Landscape).unwrap();
        assert_eq!(json, "\"16:9\"");
    }

    #[test]
    fn test_preset_ids_are_unique() {
        let ids: HashSet<_> = OutputPreset::ids().collect();
        assert_eq!(ids.len(), PRESETS.len());
        assert_eq!(ids.len(), 3);
    }
}
