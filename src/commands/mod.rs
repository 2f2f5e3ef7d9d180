use anyhow::Result;

use crate::{
    application::{BuildOptions, BuildUseCase},
    runtime::Runtime,
};

pub mod config;
pub mod services;

use config::Config;
use services::build_provider;

/// Fetch releases, build the catalog and write it to `config.output`.
///
/// Page fetch failures are reported on stderr and do not fail the command.
#[tracing::instrument(skip(runtime, config))]
pub async fn build<R: Runtime>(runtime: R, config: Config) -> Result<()> {
    let provider = build_provider(&config)?;
    let options = BuildOptions {
        pages: config.pages,
        output: config.output,
    };

    let count = BuildUseCase::new(&runtime, &provider).run(&options).await?;
    println!("Wrote {} entries to {}", count, options.output.display());

    Ok(())
}
