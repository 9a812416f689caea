use paddlex_core::logging_facility;
use paddlex_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    logging_facility::init(config.log_format);
    config.log_startup();

    paddlex_server::serve(config).await
}
