/*!
 * # Prevod - Format-preserving office document translator
 *
 * A Rust library for machine translation of office documents that keeps
 * the original formatting intact.
 *
 * ## Features
 *
 * - Extract translatable text units from word-processing documents,
 *   spreadsheets and presentations
 * - Translate units concurrently using public translation providers:
 *   - Google Translate (public endpoint, no API key)
 *   - DeepL API
 *   - LibreTranslate (self-hosted or public instance)
 * - Reinsert translated text with the original formatting snapshot
 * - Monotonic progress reporting per document
 * - Serbian Cyrillic to Latin transliteration for `sr-Latn` targets
 * - Batch processing of whole directories
 * - ISO 639-1 and ISO 639-3 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: Document model, extraction and rewrite:
 *   - `document::model`: Interchange document model and text units
 *   - `document::extract`: Text unit extraction
 *   - `document::rewrite`: Formatting-preserving reinsertion
 *   - `document::store`: Document load and save
 * - `translation`: Machine translation services:
 *   - `translation::core`: Core translation trait and service
 *   - `translation::coordinator`: Concurrent unit translation
 *   - `translation::pipeline`: End-to-end load/translate/save pipeline
 *   - `translation::cache`: Caching mechanisms for translations
 * - `transliteration`: Serbian Cyrillic to Latin mapping
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `providers`: Client implementations for translation providers:
 *   - `providers::google`: Google Translate public endpoint client
 *   - `providers::deepl`: DeepL API client
 *   - `providers::libretranslate`: LibreTranslate API client
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod providers;
pub mod translation;
pub mod transliteration;

// Re-export main types for easier usage
pub use app_config::Config;
pub use document::{Document, TextUnit, extract_units};
pub use translation::{DocumentTranslationPipeline, TranslationService, Translator};
pub use language_utils::{get_language_name, is_serbian_latin, language_codes_match};
pub use errors::{AppError, DocumentError, ProviderError, TranslationError};
