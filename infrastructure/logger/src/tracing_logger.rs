use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business log lines to `tracing` under a fixed target.
pub struct TracingLogger;

const TARGET: &str = "translator";

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn should_log_under_translator_target() {
        TracingLogger.info("Translating text from English into Italian");

        assert!(logs_contain("INFO"));
        assert!(logs_contain("translator"));
        assert!(logs_contain("Translating text from English into Italian"));
    }

    #[test]
    #[traced_test]
    fn should_forward_each_level() {
        let logger = TracingLogger;
        logger.warn("warn line");
        logger.error("error line");
        logger.debug("debug line");

        assert!(logs_contain("WARN"));
        assert!(logs_contain("warn line"));
        assert!(logs_contain("ERROR"));
        assert!(logs_contain("error line"));
        assert!(logs_contain("DEBUG"));
        assert!(logs_contain("debug line"));
    }
}
