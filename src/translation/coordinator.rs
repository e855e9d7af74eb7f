/*!
 * Concurrent translation of extracted text units.
 *
 * Translation calls fan out over a bounded set of in-flight requests;
 * document rewrites stay serialized on the driving task, which is the
 * only holder of the mutable document. Each unit gets exactly one
 * translation attempt (transport-level retries live inside the provider
 * clients); a failed unit keeps its original text and the run continues.
 */

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use log::{debug, warn};

use crate::document::model::{Document, TextUnit};
use crate::document::rewrite::apply_translation;
use crate::errors::TranslationError;
use crate::language_utils::is_serbian_latin;
use crate::transliteration;

use super::core::Translator;

/// Outcome of one coordinated translation run.
#[derive(Debug, Clone, Default)]
pub struct TranslationOutcome {
    /// Total number of translatable units
    pub total: usize,

    /// Units successfully translated and rewritten
    pub translated: usize,

    /// Units that failed and kept their original text
    pub failed: usize,

    /// Human-readable descriptions of per-unit failures
    pub issues: Vec<String>,
}

/// Coordinates concurrent unit translation against a single document.
pub struct TranslationCoordinator {
    /// The translator to fan requests out to
    translator: Arc<dyn Translator>,

    /// Maximum number of in-flight translation calls
    max_concurrent_requests: usize,

    /// Per-call timeout
    request_timeout: Duration,
}

impl TranslationCoordinator {
    /// Create a new coordinator.
    pub fn new(
        translator: Arc<dyn Translator>,
        max_concurrent_requests: usize,
        request_timeout: Duration,
    ) -> Self {
        Self {
            translator,
            max_concurrent_requests: max_concurrent_requests.max(1),
            request_timeout,
        }
    }

    /// Translate every unit and rewrite the document in place.
    ///
    /// The progress callback receives a monotonically non-decreasing
    /// percentage: completed units over total, rounded down, reaching 100
    /// exactly when the last unit settles. A document with no units
    /// reports 100 immediately.
    pub async fn translate_document(
        &self,
        document: &mut Document,
        units: Vec<TextUnit>,
        target_language: &str,
        progress_callback: impl Fn(u8),
    ) -> TranslationOutcome {
        let total = units.len();

        if total == 0 {
            progress_callback(100);
            return TranslationOutcome {
                total: 0,
                ..TranslationOutcome::default()
            };
        }

        let to_latin_script = is_serbian_latin(target_language);

        // Fan out the provider calls; buffer_unordered bounds the number
        // in flight and completion order is arbitrary.
        let mut results = stream::iter(units.into_iter())
            .map(|unit| {
                let translator = Arc::clone(&self.translator);
                let target_language = target_language.to_string();
                let request_timeout = self.request_timeout;

                async move {
                    let result = match tokio::time::timeout(
                        request_timeout,
                        translator.translate(&unit.source_text, &target_language),
                    )
                    .await
                    {
                        Ok(result) => result,
                        Err(_) => Err(TranslationError::Timeout(request_timeout.as_secs())),
                    };

                    (unit, result)
                }
            })
            .buffer_unordered(self.max_concurrent_requests);

        let mut outcome = TranslationOutcome {
            total,
            ..TranslationOutcome::default()
        };
        let mut completed = 0usize;

        // The driving task owns the document, so rewrites and progress
        // reporting are serialized here.
        while let Some((unit, result)) = results.next().await {
            match result {
                Ok(translated) => {
                    let final_text = if to_latin_script {
                        transliteration::to_latin(&translated)
                    } else {
                        translated
                    };

                    apply_translation(document, &unit, &final_text);
                    outcome.translated += 1;

                    debug!("Translated {}", unit.location);
                }
                Err(e) => {
                    // The unit keeps its original text
                    let issue = format!("Failed to translate {}: {}", unit.location, e);
                    warn!("{}", issue);
                    outcome.issues.push(issue);
                    outcome.failed += 1;
                }
            }

            completed += 1;
            progress_callback(((completed * 100) / total) as u8);
        }

        outcome
    }
}
