use std::time::Duration;

use codecrafts_client_lib::config::ClientConfig;

fn main() -> anyhow::Result<()> {
    codecrafts_client_lib::init_tracing();

    let config = ClientConfig::from_env();
    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(codecrafts_client_lib::run(config));

    // the stdin reader may still be parked in a blocking read after `quit`
    runtime.shutdown_timeout(Duration::from_millis(100));
    result
}
