use std::thread::sleep;
use std::time::Duration;

use log::{info, warn};

use bilicomm::core::qrcode::PollOutcome;
use bilicomm::{ClientConfig, CommClient, ReqwestClient};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let http = ReqwestClient::with_timeout(Duration::from_secs(10))?;
    let client = CommClient::new(http, ClientConfig::new().debug(true));

    let qrcode = client.web_qrcode_generate()?;
    info!("scan this url with the mobile app: {}", qrcode.url);

    for _ in 0..90 {
        match client.web_qrcode_poll(&qrcode.token)? {
            PollOutcome::Success(login) => {
                info!("uid: {:?}", login.cookie.dede_user_id());
                info!("refresh_token: {}", login.refresh_token);
                println!("{}", login.cookie.cookie_header());
                return Ok(());
            }
            PollOutcome::Pending(_) => {}
            PollOutcome::Scanned(_) => info!("scanned, waiting for confirmation"),
            outcome => {
                warn!("login aborted: {:?}", outcome);
                return Ok(());
            }
        }
        sleep(Duration::from_secs(2));
    }

    warn!("gave up waiting for the qrcode to be scanned");
    Ok(())
}
