use serde::{Deserialize, Serialize};

/// A single danmaku (on-screen comment).
///
/// Numeric fields hold the literal wire values. In particular `color`, `mode` and `attr` are not
/// mapped to enums since new bits and values are introduced upstream from time to time.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DanmakuElement {
    pub id: i64,
    /// Playback time offset in milliseconds.
    pub progress: i32,
    pub mode: i32,
    pub font_size: i32,
    /// RGB color, e.g. `16777215` for white.
    pub color: u32,
    /// Obfuscated sender id.
    pub mid_hash: String,
    pub content: String,
    /// Unix timestamp of creation.
    pub ctime: i64,
    pub weight: i32,
    pub action: String,
    pub pool: i32,
    /// `id` as a string, for consumers lacking 64-bit integer precision.
    pub id_str: String,
    /// Bit flags.
    pub attr: i32,
}

/// Field numbers of `DanmakuElem` in bilibili's `dm.proto`.
pub(crate) mod field {
    pub const ID: u32 = 1;
    pub const PROGRESS: u32 = 2;
    pub const MODE: u32 = 3;
    pub const FONT_SIZE: u32 = 4;
    pub const COLOR: u32 = 5;
    pub const MID_HASH: u32 = 6;
    pub const CONTENT: u32 = 7;
    pub const CTIME: u32 = 8;
    pub const WEIGHT: u32 = 9;
    pub const ACTION: u32 = 10;
    pub const POOL: u32 = 11;
    pub const ID_STR: u32 = 12;
    pub const ATTR: u32 = 13;

    /// `repeated DanmakuElem elems` of `DmSegMobileReply`.
    pub const ELEMS: u32 = 1;
}
