//! Check in with a token and cookie copied from a logged-in browser
//! session instead of logging in with a password.
//!
//! Reads `USER_TOKEN` and `USER_COOKIE`, plus the optional settings shared
//! with the main binary (`PUSHPLUS_TOKEN`, `AIRPORT_BASE_URL`, ...).

use std::process::ExitCode;

use airport_checkin::{Config, Profile, logging, workflow};
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    logging::init();

    let succeeded = workflow::launch(Config::from_env(Profile::Session)).await?;
    Ok(workflow::exit_code(succeeded))
}
