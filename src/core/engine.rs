use crate::core::document;
use crate::core::entropy::OsEntropy;
use crate::core::generator::generate_unique_pins;
use crate::domain::model::{LengthRequest, OutputDocument};
use crate::domain::ports::{ConfigProvider, EntropySource, Storage};
use crate::utils::error::{PinError, Result};
use crate::utils::monitor::ResourceMonitor;
use crate::utils::validation::validate_count;

/// Runs one generation pass: every requested length, then a single write.
pub struct PinEngine<S: Storage, C: ConfigProvider, E: EntropySource = OsEntropy> {
    storage: S,
    config: C,
    entropy: E,
    monitor: ResourceMonitor,
}

impl<S: Storage, C: ConfigProvider> PinEngine<S, C, OsEntropy> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_entropy(storage, config, OsEntropy)
    }

    pub fn new_with_monitoring(storage: S, config: C, monitor_enabled: bool) -> Self {
        let mut engine = Self::new(storage, config);
        engine.monitor = ResourceMonitor::new(monitor_enabled);
        engine
    }
}

impl<S: Storage, C: ConfigProvider, E: EntropySource> PinEngine<S, C, E> {
    pub fn with_entropy(storage: S, config: C, entropy: E) -> Self {
        Self {
            storage,
            config,
            entropy,
            monitor: ResourceMonitor::default(),
        }
    }

    /// Generate every requested group and write the output file.
    ///
    /// Nothing is written unless every group was generated.
    pub fn run(&mut self) -> Result<String> {
        tracing::info!("Starting PIN generation run");
        self.monitor.log_phase("Start");

        let document = self.generate()?;

        let output_path = self.config.output_path().to_string();
        tracing::info!(
            "Writing {} PINs in {} group(s) to {}",
            document.total_pins(),
            document.groups.len(),
            output_path
        );
        let rendered = document::render(&document);
        self.storage.write_file(&output_path, rendered.as_bytes())?;
        self.monitor.log_phase("Write");

        self.monitor.log_summary();
        Ok(output_path)
    }

    /// Generate all non-empty groups without touching storage.
    pub fn generate(&mut self) -> Result<OutputDocument> {
        let requests = self.checked_requests()?;

        let mut groups = Vec::with_capacity(requests.len());
        for request in requests.into_iter().filter(|r| r.count > 0) {
            tracing::info!(
                "Generating {} {}-digit PINs",
                request.count,
                request.length
            );
            let set = generate_unique_pins(&mut self.entropy, request.length, request.count)?;
            self.monitor
                .log_phase(&format!("{}-digit PINs", request.length));
            groups.push(set);
        }

        Ok(OutputDocument {
            generated_at: chrono::Local::now().naive_local(),
            groups,
        })
    }

    /// Validate every request before any entropy is drawn, sorted by length.
    fn checked_requests(&self) -> Result<Vec<LengthRequest>> {
        let mut requests = self.config.requests();
        requests.sort_by_key(|r| r.length);

        for request in &requests {
            validate_count(request.length, request.count)?;
        }

        if let Some(pair) = requests.windows(2).find(|w| w[0].length == w[1].length) {
            return Err(PinError::ConfigError {
                message: format!("length {} requested more than once", pair[0].length),
            });
        }

        Ok(requests)
    }
}
