use district_mapgen::prelude::*;
use district_mapgen::service::{generate_service::run_pipeline, var_service::load_config};
use district_mapgen::util::log_service::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let config = load_config().await?;
    tracing::info!(
        "Extracting districts from {} into {}",
        config.source_path.display(),
        config.output_path.display()
    );

    let report = run_pipeline(&config).await?;
    tracing::info!("Districts emitted: {}/{}", report.found, report.expected);

    Ok(())
}
