use std::sync::Once;

static LOGGER: Once = Once::new();

pub fn init_logger() {
    LOGGER.call_once(|| {
        let result = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} [{} : {}] {}",
                    chrono::Local::now().format("%H:%M:%S"),
                    &record.target()[record.target().find(':').map_or(0, |i| i + 2)..],
                    record.level(),
                    message
                ))
            })
            .level(log::LevelFilter::Trace)
            .chain(std::io::stdout())
            .apply();

        // Another test binary harness may already own the global logger
        if let Err(e) = result {
            eprintln!("Logger not installed: {e}");
        }
    });
}
