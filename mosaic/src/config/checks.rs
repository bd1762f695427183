use super::Config;
use anyhow::{bail, Result};
use tracing_subscriber::EnvFilter;

impl Config {
    /// Validates the values a config file can get wrong.
    ///
    /// # Errors
    ///
    /// Describes the first invalid value found.
    pub fn check(&self) -> Result<()> {
        self.check_spacing()?;
        self.check_timings()?;
        self.check_log_level()
    }

    fn check_spacing(&self) -> Result<()> {
        if self.window_spacing < 0 {
            bail!(
                "window_spacing must not be negative, got {}",
                self.window_spacing
            );
        }
        Ok(())
    }

    fn check_timings(&self) -> Result<()> {
        if self.drag_tick_ms == 0 {
            bail!("drag_tick_ms must be greater than zero");
        }
        if self.sweep_interval_secs == 0 {
            bail!("sweep_interval_secs must be greater than zero");
        }
        Ok(())
    }

    fn check_log_level(&self) -> Result<()> {
        if let Err(err) = EnvFilter::builder().parse(&self.log_level) {
            bail!("log_level is invalid: {err}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass() {
        assert!(Config::default().check().is_ok());
    }

    #[test]
    fn negative_spacing_is_rejected() {
        let config = Config {
            window_spacing: -4,
            ..Config::default()
        };
        assert!(config.check().is_err());
    }

    #[test]
    fn zero_tick_is_rejected() {
        let config = Config {
            drag_tick_ms: 0,
            ..Config::default()
        };
        let err = config.check().unwrap_err();
        assert!(err.to_string().contains("drag_tick_ms"));
    }

    #[test]
    fn unparsable_log_level_is_rejected() {
        let config = Config {
            log_level: "mosaic=loud".to_owned(),
            ..Config::default()
        };
        assert!(config.check().is_err());
    }
}
