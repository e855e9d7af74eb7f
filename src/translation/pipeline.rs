/*!
 * End-to-end document translation pipeline.
 *
 * One run covers: load the document, extract its text units, translate
 * them concurrently, rewrite the units in place, and persist the result.
 * Load and save failures abort the run; per-unit translation failures do
 * not.
 */

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use log::info;

use crate::app_config::Config;
use crate::document::extract::extract_units;
use crate::document::store;
use crate::errors::AppError;
use crate::translation::coordinator::{TranslationCoordinator, TranslationOutcome};
use crate::translation::core::{TranslationService, Translator};

/// Pipeline tying document I/O to the translation coordinator.
pub struct DocumentTranslationPipeline {
    /// The translator backing this pipeline
    translator: Arc<dyn Translator>,

    /// Target language for every run of this pipeline
    target_language: String,

    /// Maximum number of in-flight translation calls
    max_concurrent_requests: usize,

    /// Per-call timeout
    request_timeout: Duration,
}

impl DocumentTranslationPipeline {
    /// Create a pipeline around an existing translator.
    pub fn new(
        translator: Arc<dyn Translator>,
        target_language: impl Into<String>,
        max_concurrent_requests: usize,
        request_timeout: Duration,
    ) -> Self {
        Self {
            translator,
            target_language: target_language.into(),
            max_concurrent_requests,
            request_timeout,
        }
    }

    /// Create a pipeline from the application configuration, backed by
    /// the configured provider.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let service = TranslationService::new(config.translation.clone())?;

        Ok(Self::new(
            Arc::new(service),
            config.target_language.clone(),
            config.translation.optimal_concurrent_requests(),
            Duration::from_secs(config.translation.get_timeout_secs()),
        ))
    }

    /// The pipeline's target language.
    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// Translate one document from `input` to `output`.
    ///
    /// The progress callback is monotonic and reaches 100 when every unit
    /// has settled. On a fatal error (load or save) it is reset to 0 and
    /// the error is returned; the output file is not written.
    pub async fn run(
        &self,
        input: &Path,
        output: &Path,
        progress_callback: impl Fn(u8),
    ) -> Result<TranslationOutcome, AppError> {
        let mut document = match store::open(input) {
            Ok(document) => document,
            Err(e) => {
                progress_callback(0);
                return Err(e.into());
            }
        };

        let units = extract_units(&document);
        info!(
            "Extracted {} translatable units from {}",
            units.len(),
            input.display()
        );

        let coordinator = TranslationCoordinator::new(
            Arc::clone(&self.translator),
            self.max_concurrent_requests,
            self.request_timeout,
        );
        let outcome = coordinator
            .translate_document(&mut document, units, &self.target_language, &progress_callback)
            .await;

        if let Err(e) = store::save(&document, output) {
            progress_callback(0);
            return Err(e.into());
        }

        info!(
            "Translated {}/{} units ({} failed) into {}",
            outcome.translated,
            outcome.total,
            outcome.failed,
            output.display()
        );

        Ok(outcome)
    }

    /// Test the connection to the underlying provider.
    pub async fn test_connection(&self) -> Result<(), AppError> {
        self.translator.test_connection().await.map_err(Into::into)
    }
}
