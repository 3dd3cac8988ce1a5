use std::num::NonZeroU32;

use crate::danmaku::{self, DanmakuElement};
use crate::envelope::DecodeOptions;
use crate::errors::Result;
use crate::transport::{Method, Params, Requester};

use super::{CommClient, VideoPage, BILI_API_URL};

impl<H: Requester> CommClient<H> {
    /// Fetch one danmaku segment through the protobuf api.
    ///
    /// * `tp`: `1` for videos.
    /// * `oid`: cid of the video part.
    /// * `segment_index`: 1-based, each segment covers six minutes of playback.
    ///
    /// # Errors
    /// Returns an error when the request fails or the body is not a valid segment.
    pub fn danmaku_get_by_pb(
        &self,
        tp: u32,
        oid: i64,
        segment_index: NonZeroU32,
    ) -> Result<Vec<DanmakuElement>> {
        let raw = self.raw(
            BILI_API_URL,
            "x/v2/dm/web/seg.so",
            Method::Get,
            Params::new()
                .with("type", tp)
                .with("oid", oid)
                .with("segment_index", segment_index),
        )?;
        Ok(danmaku::decode(&raw)?)
    }

    /// Latest few danmaku of a video. Empty when there's none.
    ///
    /// # Errors
    /// Returns an error when the request fails.
    pub fn danmaku_get_shot(&self, aid: i64) -> Result<Vec<String>> {
        self.fetch(
            BILI_API_URL,
            "x/v2/dm/ajax",
            Method::Get,
            Params::new().with("aid", aid),
            &DecodeOptions::collection(),
        )
    }

    /// Parts of a video. Empty when there's none.
    ///
    /// # Errors
    /// Returns an error when the request fails.
    pub fn video_get_page_list(&self, aid: i64) -> Result<Vec<VideoPage>> {
        self.fetch(
            BILI_API_URL,
            "x/player/pagelist",
            Method::Get,
            Params::new().with("aid", aid),
            &DecodeOptions::collection(),
        )
    }
}
