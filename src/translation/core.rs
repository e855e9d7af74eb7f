/*!
 * Core translation service implementation.
 *
 * This module defines the `Translator` trait that the pipeline depends on
 * and the main `TranslationService` struct that implements it by
 * dispatching to the configured machine translation provider.
 */

use anyhow::Result;
use async_trait::async_trait;

use crate::app_config::{TranslationConfig, TranslationProvider as ConfigTranslationProvider};
use crate::errors::TranslationError;
use crate::language_utils::split_script_subtag;
use crate::providers::deepl::{DeepL, DeepLRequest};
use crate::providers::google::{Google, GoogleRequest};
use crate::providers::libretranslate::{LibreTranslate, LibreTranslateRequest};
use crate::providers::Provider;
use super::cache::TranslationCache;

/// A single-text translator.
///
/// This is the seam between the document pipeline and the provider stack:
/// the pipeline only ever sees this trait, so tests can substitute stub
/// implementations without any HTTP involved.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate one text into the target language.
    ///
    /// The source language is always auto-detected. One call is made per
    /// text unit; any transport-level retries live inside the provider
    /// clients.
    async fn translate(&self, text: &str, target_language: &str)
        -> Result<String, TranslationError>;

    /// Test the connection to the underlying provider.
    async fn test_connection(&self) -> Result<(), TranslationError>;
}

/// Translation provider implementation variants
enum TranslationProviderImpl {
    /// Google Translate public endpoint
    Google {
        /// Client instance
        client: Google,
    },

    /// DeepL API service
    DeepL {
        /// Client instance
        client: DeepL,
    },

    /// LibreTranslate instance
    LibreTranslate {
        /// Client instance
        client: LibreTranslate,
    },
}

/// Main translation service for document translation
pub struct TranslationService {
    /// Provider implementation
    provider: TranslationProviderImpl,

    /// Configuration for the translation service
    pub config: TranslationConfig,

    /// Translation cache for storing and retrieving translations
    pub cache: TranslationCache,
}

impl TranslationService {
    /// Create a new translation service with the given configuration
    pub fn new(config: TranslationConfig) -> Result<Self> {
        let retry_count = config.common.retry_count;
        let retry_backoff_ms = config.common.retry_backoff_ms;

        let provider = match config.provider {
            ConfigTranslationProvider::Google => TranslationProviderImpl::Google {
                client: Google::new_with_config(
                    config.get_endpoint(),
                    retry_count,
                    retry_backoff_ms,
                    config.get_rate_limit(),
                ),
            },
            ConfigTranslationProvider::DeepL => TranslationProviderImpl::DeepL {
                client: DeepL::new_with_config(
                    config.get_api_key(),
                    config.get_endpoint(),
                    retry_count,
                    retry_backoff_ms,
                ),
            },
            ConfigTranslationProvider::LibreTranslate => TranslationProviderImpl::LibreTranslate {
                client: LibreTranslate::new_with_config(
                    config.get_endpoint(),
                    config.get_api_key(),
                    retry_count,
                    retry_backoff_ms,
                ),
            },
        };

        let cache = TranslationCache::new(config.common.cache_enabled);

        Ok(Self {
            provider,
            config,
            cache,
        })
    }

    /// The language code actually sent to the provider: the base code
    /// without any script subtag. Script handling (Serbian Latin) is a
    /// post-processing step outside the provider call.
    fn provider_language(target_language: &str) -> String {
        split_script_subtag(target_language).0
    }
}

#[async_trait]
impl Translator for TranslationService {
    async fn translate(&self, text: &str, target_language: &str)
        -> Result<String, TranslationError>
    {
        // Whitespace-only text never reaches the provider
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        // Check cache first
        if let Some(cached) = self.cache.get(text, target_language) {
            return Ok(cached);
        }

        let provider_lang = Self::provider_language(target_language);

        let translated = match &self.provider {
            TranslationProviderImpl::Google { client } => {
                let response = client
                    .translate(&GoogleRequest::new(text, provider_lang))
                    .await?;
                Google::extract_text(&response)
            }
            TranslationProviderImpl::DeepL { client } => {
                let response = client
                    .translate(&DeepLRequest::new(text, &provider_lang))
                    .await?;
                DeepL::extract_text(&response)
            }
            TranslationProviderImpl::LibreTranslate { client } => {
                let request = LibreTranslateRequest::new(text, provider_lang)
                    .api_key(self.config.get_api_key());
                let response = client.translate(&request).await?;
                LibreTranslate::extract_text(&response)
            }
        };

        if translated.is_empty() {
            return Err(TranslationError::EmptyTranslation);
        }

        self.cache.store(text, target_language, &translated);

        Ok(translated)
    }

    async fn test_connection(&self) -> Result<(), TranslationError> {
        match &self.provider {
            TranslationProviderImpl::Google { client } => {
                Provider::test_connection(client).await?
            }
            TranslationProviderImpl::DeepL { client } => {
                Provider::test_connection(client).await?
            }
            TranslationProviderImpl::LibreTranslate { client } => {
                Provider::test_connection(client).await?
            }
        }
        Ok(())
    }
}
