use std::process::ExitCode;

use airport_checkin::{Config, Profile, logging, workflow};
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    logging::init();

    let succeeded = workflow::launch(Config::from_env(Profile::Password)).await?;
    Ok(workflow::exit_code(succeeded))
}
