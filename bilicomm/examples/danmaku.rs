use std::env;
use std::num::NonZeroU32;

use anyhow::Context;
use log::info;

use bilicomm::{ClientConfig, CommClient, ReqwestClient};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cid: i64 = env::args()
        .nth(1)
        .context("usage: danmaku <cid> [segment]")?
        .parse()?;
    let segment = env::args()
        .nth(2)
        .map_or(Ok(1), |s| s.parse())
        .context("invalid segment index")?;
    let segment = NonZeroU32::new(segment).context("segment index starts at 1")?;

    let client = CommClient::new(ReqwestClient::default(), ClientConfig::new());
    let elems = client.danmaku_get_by_pb(1, cid, segment)?;
    info!("{} danmaku in segment {}", elems.len(), segment);

    for elem in elems {
        println!("[{:>8}ms] {}", elem.progress, elem.content);
    }
    Ok(())
}
