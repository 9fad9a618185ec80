use super::DiscoveryResult;
use crate::{
    error::Result,
    interfaces::{Discoverer, Logger, MessageDisplay},
    notify::EventStream,
};

/// Turns the outcome of one discovery into exactly one publish.
pub struct DiscoveryCoordinator<'a> {
    logger: &'a dyn Logger,
    display: &'a dyn MessageDisplay,
    results: &'a EventStream<Vec<String>>,
}

impl<'a> DiscoveryCoordinator<'a> {
    pub fn new(
        logger: &'a dyn Logger,
        display: &'a dyn MessageDisplay,
        results: &'a EventStream<Vec<String>>,
    ) -> Self {
        Self {
            logger,
            display,
            results,
        }
    }

    /// Runs `discoverer` and publishes its outcome. If the discoverer never
    /// completes, nothing is published.
    pub async fn discover<D: Discoverer>(&self, discoverer: &D, directory: Option<&str>, options: &str) {
        tracing::debug!("Discovering tests in {:?} with options {:?}", directory, options);
        let outcome = discoverer.discover_tests(directory, options).await;
        self.complete(outcome);
    }

    /// A warning is logged and displayed before the names are published; a
    /// failure is logged and published as an empty list.
    pub fn complete(&self, outcome: Result<DiscoveryResult>) {
        match outcome {
            Ok(result) => {
                if let Some(warning) = &result.warning_message {
                    self.logger.log_warning(&warning.text);
                    self.display.show_warning(warning);
                }
                tracing::debug!("Discovered {} tests", result.test_names.len());
                self.results.publish(&result.test_names);
            }
            Err(e) => {
                self.logger.log_error("Error while executing test discovery", &e);
                self.results.publish(&Vec::new());
            }
        }
    }
}
