//! Country catalog records.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_ROTATION;

/// One entry of the static country catalog.
///
/// `id` matches the identifier of the corresponding boundary feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    /// ISO alpha code used to query country statistics.
    #[serde(default)]
    pub alpha: Option<String>,
    /// Preferred camera rotation as `[longitude, latitude]` in degrees.
    #[serde(default)]
    pub rotation: Option<[f64; 2]>,
    /// Encyclopedia article title when the display name is ambiguous.
    #[serde(default)]
    pub article: Option<String>,
}

impl Country {
    /// Title used to look up the encyclopedia summary.
    pub fn article_title(&self) -> &str {
        self.article.as_deref().unwrap_or(&self.name)
    }

    /// Rotation the camera should settle on when this country is selected.
    pub fn camera_rotation(&self) -> [f64; 2] {
        self.rotation.unwrap_or(DEFAULT_ROTATION)
    }
}
