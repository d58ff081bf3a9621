use anyhow::{bail, Context, Result};

use readme_gen::config::Config;

fn main() -> Result<()> {
    // Parse configuration from command line
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if config.check {
        let fresh = readme_gen::check(&config).context("README check failed")?;
        if !fresh {
            bail!(
                "{} is out of date with {}",
                config.destination.display(),
                config.source.display()
            );
        }
        log::info!("{} is up to date", config.destination.display());
        return Ok(());
    }

    readme_gen::generate(&config).context("README generation failed")?;

    Ok(())
}
