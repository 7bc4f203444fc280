use serde::Deserialize;

/// Envelope every JSON media-server response arrives in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaContainerResponse {
    #[serde(rename = "MediaContainer")]
    pub media_container: MediaContainer,
}

/// Response of the media server root (`GET /`).
pub type PlexStatus = MediaContainerResponse;

/// Generic Plex container. Which lists are populated depends on the endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaContainer {
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub total_size: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub title1: Option<String>,
    #[serde(default)]
    pub title2: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub machine_identifier: Option<String>,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, rename = "librarySectionID")]
    pub library_section_id: Option<i64>,
    #[serde(default)]
    pub library_section_title: Option<String>,
    #[serde(default, rename = "Metadata")]
    pub metadata: Vec<Metadata>,
    #[serde(default, rename = "Directory")]
    pub directory: Vec<Directory>,
    #[serde(default, rename = "Hub")]
    pub hub: Vec<Hub>,
    #[serde(default, rename = "Meta")]
    pub meta: Option<Meta>,
}

/// Movies, shows, seasons, episodes, collections and session items.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub rating_key: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub guid: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub title_sort: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content_rating: Option<String>,
    #[serde(default)]
    pub year: Option<i64>,
    #[serde(default)]
    pub index: Option<i64>,
    #[serde(default)]
    pub parent_index: Option<i64>,
    #[serde(default)]
    pub parent_rating_key: Option<String>,
    #[serde(default)]
    pub grandparent_rating_key: Option<String>,
    #[serde(default)]
    pub grandparent_title: Option<String>,
    #[serde(default)]
    pub child_count: Option<i64>,
    #[serde(default)]
    pub leaf_count: Option<i64>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub added_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default)]
    pub originally_available_at: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub art: Option<String>,
    #[serde(default, rename = "librarySectionID")]
    pub library_section_id: Option<i64>,
    #[serde(default, rename = "Guid")]
    pub guids: Vec<Tag>,
    #[serde(default, rename = "Genre")]
    pub genres: Vec<Tag>,
    #[serde(default, rename = "Collection")]
    pub collections: Vec<Tag>,
    #[serde(default, rename = "Media")]
    pub media: Vec<Media>,
}

/// A tag-like child such as `Genre`, `Collection` or `Guid`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub video_resolution: Option<String>,
    #[serde(default)]
    pub video_codec: Option<String>,
    #[serde(default)]
    pub audio_codec: Option<String>,
    #[serde(default)]
    pub container: Option<String>,
    #[serde(default, rename = "Part")]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub size: Option<i64>,
}

/// Library sections, folders, filters and filter values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directory {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub scanner: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub filter_type: Option<String>,
    #[serde(default)]
    pub fast_key: Option<String>,
    #[serde(default)]
    pub refreshing: bool,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default)]
    pub scanned_at: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hub {
    #[serde(default)]
    pub hub_identifier: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub size: i64,
    #[serde(default, rename = "Metadata")]
    pub metadata: Vec<Metadata>,
    #[serde(default, rename = "Directory")]
    pub directory: Vec<Directory>,
}

/// Field-type catalogue returned with `includeMeta=1`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    #[serde(default, rename = "FieldType")]
    pub field_types: Vec<FieldType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldType {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, rename = "Operator")]
    pub operators: Vec<Operator>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operator {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
}
