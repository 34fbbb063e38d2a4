use log::LevelFilter;

/// Installs the global logger. Call once at application startup.
pub fn init_logging(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::init_logging;

    #[test]
    fn test_init_logging_installs_once() {
        init_logging(LevelFilter::Debug).unwrap();
        log::debug!("logger installed");

        // a second install must be rejected by the log facade
        assert!(init_logging(LevelFilter::Debug).is_err());
    }
}
