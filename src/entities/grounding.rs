use serde::{Deserialize, Serialize};

/// A citation attached to a generated answer. Only map citations are used.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingChunk {
    #[serde(default)]
    pub maps: Option<MapsSource>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapsSource {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_id: Option<String>,
}

impl GroundingChunk {
    pub fn maps(uri: &str, title: &str) -> Self {
        Self {
            maps: Some(MapsSource {
                uri: Some(uri.into()),
                title: Some(title.into()),
                place_id: None,
            }),
        }
    }

    /// The map link, if present and non-blank.
    pub fn maps_uri(&self) -> Option<&str> {
        self.maps
            .as_ref()?
            .uri
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
    }

    pub fn maps_title(&self) -> Option<&str> {
        self.maps.as_ref()?.title.as_deref()
    }
}
