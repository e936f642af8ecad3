use serde::{Deserialize, Serialize};

pub type LibraryId = i64;
pub type MediaId = i64;
pub type MediaFileId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Movie,
    Tv,
}

impl MediaType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movies",
            Self::Tv => "TV Shows",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub id: LibraryId,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub media_type: MediaType,
}

/// Body of `POST /api/v1/library`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NewLibrary {
    pub name: String,
    pub location: String,
    pub media_type: MediaType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    pub id: MediaFileId,
    pub target_file: String,
    #[serde(default)]
    pub media_id: Option<MediaId>,
    #[serde(default)]
    pub library_id: Option<LibraryId>,
}

impl MediaFile {
    /// File name portion of `target_file`, accepting either separator.
    pub fn file_name(&self) -> &str {
        self.target_file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.target_file.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSummary {
    pub id: MediaId,
    pub name: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub library_id: Option<LibraryId>,
}

impl MediaSummary {
    /// Absolute poster URL. Relative paths are served by the API host.
    pub fn poster_url(&self, server_url: &str) -> Option<String> {
        let path = self.poster_path.as_deref()?.trim();
        if path.is_empty() {
            None
        } else if path.starts_with("http://") || path.starts_with("https://") {
            Some(path.to_string())
        } else {
            Some(format!(
                "{}/{}",
                server_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            ))
        }
    }
}
