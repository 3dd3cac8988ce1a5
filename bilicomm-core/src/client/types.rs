use serde::{Deserialize, Serialize};

/// A part (`P`) of a video.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoPage {
    pub cid: i64,
    /// 1-based part number.
    pub page: i32,
    /// Source, `vupload` for user uploads.
    pub from: String,
    /// Part title.
    pub part: String,
    /// Seconds.
    pub duration: i64,
    pub vid: String,
    pub weblink: String,
    pub dimension: Dimension,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimension {
    pub width: i32,
    pub height: i32,
    /// `1` if width and height are swapped.
    pub rotate: i32,
}
