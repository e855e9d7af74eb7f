/*!
 * Translation service for office documents using machine translation
 * providers.
 *
 * This module contains the core functionality for translating extracted
 * text units. It is split into several submodules:
 *
 * - `core`: Core translation trait and service definition
 * - `coordinator`: Concurrent translation of extracted units
 * - `pipeline`: End-to-end load/translate/save pipeline
 * - `cache`: Caching mechanisms for translations
 */

// Re-export main types for easier usage
pub use self::coordinator::{TranslationCoordinator, TranslationOutcome};
pub use self::core::{TranslationService, Translator};
pub use self::pipeline::DocumentTranslationPipeline;

// Submodules
pub mod cache;
pub mod coordinator;
pub mod core;
pub mod pipeline;
