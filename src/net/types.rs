//! Gallery document schema as served from the storage endpoint.
//!
//! DESIGN
//! ======
//! Field names mirror the camelCase JSON written by the gallery editor.
//! Nested records decode leniently (missing fields fall back to defaults,
//! unknown fields are ignored) because the viewer performs no validation.
//! Explicit `null` in a non-optional field reads as its default too.
//! Only the three top-level sections of [`GalleryDocument`] are required.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Read an explicit `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /storage/{gallery_id}/data.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryDocument {
    pub gallery_data: GalleryData,
    pub room: Room,
    pub all_contents: Vec<ContentData>,
}

/// Gallery metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryData {
    /// Unique gallery identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub uid: String,
    /// URL-friendly alias; also names the gallery's storage directory.
    #[serde(deserialize_with = "null_as_default")]
    pub alias: String,
    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub synopsis: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Creation timestamp as written by the editor (ISO 8601).
    #[serde(deserialize_with = "null_as_default")]
    pub date_created: String,
    /// Last update timestamp as written by the editor (ISO 8601).
    #[serde(deserialize_with = "null_as_default")]
    pub date_updated: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gallery_tags: Vec<String>,
    /// When set, asset files are served from `/storage/{alias}/` instead of
    /// the absolute URLs stored in the document.
    #[serde(deserialize_with = "null_as_default")]
    pub local_storage: bool,
}

/// A ceiling/floor pair of settings (colors, background images, patterns).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfacePair {
    #[serde(deserialize_with = "null_as_default")]
    pub ceiling: String,
    #[serde(deserialize_with = "null_as_default")]
    pub floor: String,
}

/// Display options applied to the whole room.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoomOptions {
    #[serde(deserialize_with = "null_as_default")]
    pub resolution_quality: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub initial_zoom: f64,
    /// Hide the human silhouette used as a scale reference.
    #[serde(deserialize_with = "null_as_default")]
    pub disable_human_ref: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub hide_logo: bool,
}

/// 3D layout container for one gallery.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Room {
    /// Walls in display order.
    #[serde(deserialize_with = "null_as_default")]
    pub walls: Vec<Wall>,
    #[serde(deserialize_with = "null_as_default")]
    pub colors: SurfacePair,
    pub background: Option<SurfacePair>,
    pub patterns: Option<SurfacePair>,
    /// Ambient audio URL played for the whole room.
    pub general_audio: Option<String>,
    /// Frame styles referenced by [`WallContent::frame_index`].
    pub frames: Option<Vec<Frame>>,
    pub has_walls_preview: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub options: RoomOptions,
}

impl Room {
    /// Resolve the frame style applied to a placement, if any.
    ///
    /// Returns `None` when the placement has no frame, the index is negative,
    /// or the room defines no frame at that index.
    pub fn frame_for(&self, placement: &WallContent) -> Option<&Frame> {
        let index = usize::try_from(placement.frame_index?).ok()?;
        self.frames.as_ref()?.get(index)
    }

    /// Iterate every placement across all walls, in wall order.
    pub fn placements(&self) -> impl Iterator<Item = (&Wall, &WallContent)> {
        self.walls
            .iter()
            .flat_map(|wall| wall.contents.iter().map(move |placement| (wall, placement)))
    }
}

/// A flat surface in the room.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Wall {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub height: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub width: f64,
    /// Rotation around the vertical axis, in degrees.
    #[serde(deserialize_with = "null_as_default")]
    pub angle: f64,
    /// Overrides for the room-level surface settings; `null` inherits.
    pub color: Option<String>,
    pub background_image: Option<String>,
    pub background_pattern: Option<String>,
    pub audio: Option<String>,
    /// Placements in stacking order.
    #[serde(deserialize_with = "null_as_default")]
    pub contents: Vec<WallContent>,
}

/// Drop shadow drawn behind a placement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Shadow {
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub spread: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub h_shadow: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub v_shadow: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub blur: f64,
}

/// Placement of a content item on a wall.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WallContent {
    /// References [`ContentData::id`].
    #[serde(deserialize_with = "null_as_default")]
    pub content_id: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub width: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub height: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub top: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub left: f64,
    /// Index into [`Room::frames`].
    pub frame_index: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub shadow: Shadow,
    /// Disabled placements stay in the layout but are not shown.
    #[serde(deserialize_with = "null_as_default")]
    pub disable: bool,
}

/// Physical size of the original work.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealDimensions {
    #[serde(deserialize_with = "null_as_default")]
    pub height: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub width: f64,
    /// Whether the dimensions are shown next to the work.
    #[serde(deserialize_with = "null_as_default")]
    pub show: bool,
}

/// Reference to an uploaded asset file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRef {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Size in bytes.
    #[serde(deserialize_with = "null_as_default")]
    pub size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Reference to a video hosted by a third-party provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoRef {
    /// Hosting provider (e.g. `"youtube"`, `"vimeo"`).
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    /// Provider-specific video id.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "loop")]
    pub looping: Option<bool>,
    pub autoplay: Option<bool>,
}

/// A displayable asset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentData {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    /// Display group used by the editor to bucket assets.
    #[serde(deserialize_with = "null_as_default")]
    pub group: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub info: Option<String>,
    pub real_dimensions: Option<RealDimensions>,
    pub file: Option<FileRef>,
    pub video: Option<VideoRef>,
}

/// Borrowed view of the media backing a content item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentMedia<'a> {
    File(&'a FileRef),
    Video(&'a VideoRef),
}

impl ContentData {
    /// The media backing this item. A file reference takes precedence when a
    /// malformed item carries both.
    pub fn media(&self) -> Option<ContentMedia<'_>> {
        match (&self.file, &self.video) {
            (Some(file), _) => Some(ContentMedia::File(file)),
            (None, Some(video)) => Some(ContentMedia::Video(video)),
            (None, None) => None,
        }
    }
}

/// Reusable border/mat style.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Frame {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub frame_width: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub frame_image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub frame_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mat_width: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub mat_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_glassed: bool,
}
