/*!
 * Tests for application configuration functionality
 */

use prevod::app_config::{Config, LogLevel, ProviderConfig, TranslationProvider};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    // Test default values
    assert_eq!(config.target_language, "fr");
    assert_eq!(config.translation.provider, TranslationProvider::Google);
    assert_eq!(config.log_level, LogLevel::Info);

    // Test provider config values
    let google_config = config
        .translation
        .get_provider_config(&TranslationProvider::Google)
        .expect("Google provider config should exist");

    assert_eq!(google_config.concurrent_requests, 4);
    assert_eq!(google_config.timeout_secs, 30);
    assert_eq!(google_config.endpoint, "https://translate.googleapis.com");
    assert!(google_config.api_key.is_empty());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Start with a valid config
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Invalid target language
    config.target_language = "xyzzy".to_string();
    assert!(config.validate().is_err());
    config.target_language = "".to_string();
    assert!(config.validate().is_err());
    config.target_language = "fr".to_string();

    // A script subtag is accepted
    config.target_language = "sr-Latn".to_string();
    assert!(config.validate().is_ok());
    config.target_language = "fr".to_string();

    // DeepL requires an API key
    config.translation.provider = TranslationProvider::DeepL;
    assert!(config.validate().is_err());

    if let Some(provider) = config
        .translation
        .available_providers
        .iter_mut()
        .find(|p| p.provider_type == "deepl")
    {
        provider.api_key = "00000000-aaaa-bbbb-cccc-dddddddddddd:fx".to_string();
    }
    assert!(config.validate().is_ok());

    // Google and LibreTranslate work without a key
    config.translation.provider = TranslationProvider::Google;
    assert!(config.validate().is_ok());
    config.translation.provider = TranslationProvider::LibreTranslate;
    assert!(config.validate().is_ok());
}

/// Endpoints must parse as URLs
#[test]
fn test_config_validation_malformedEndpoint_shouldFail() {
    let mut config = Config::default();
    if let Some(provider) = config
        .translation
        .available_providers
        .iter_mut()
        .find(|p| p.provider_type == "google")
    {
        provider.endpoint = "not a url".to_string();
    }

    assert!(config.validate().is_err());
}

/// Test accessors resolving through the active provider configuration
#[test]
fn test_translationConfig_accessors_shouldFollowActiveProvider() {
    let mut config = Config::default();

    assert_eq!(config.translation.get_endpoint(), "https://translate.googleapis.com");
    assert_eq!(config.translation.get_rate_limit(), Some(60));
    assert_eq!(config.translation.optimal_concurrent_requests(), 4);

    config.translation.provider = TranslationProvider::LibreTranslate;
    assert_eq!(config.translation.get_endpoint(), "http://localhost:5000");
    assert_eq!(config.translation.get_rate_limit(), None);
}

/// Concurrency must never drop to zero even with a broken provider entry
#[test]
fn test_optimalConcurrentRequests_zeroConfigured_shouldClampToOne() {
    let mut config = Config::default();
    if let Some(provider) = config
        .translation
        .available_providers
        .iter_mut()
        .find(|p| p.provider_type == "google")
    {
        provider.concurrent_requests = 0;
    }

    assert_eq!(config.translation.optimal_concurrent_requests(), 1);
}

/// Test serialization round trip through JSON
#[test]
fn test_config_serialization_shouldRoundTrip() {
    let mut config = Config::default();
    config.target_language = "de".to_string();
    config.translation.provider = TranslationProvider::LibreTranslate;

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.target_language, "de");
    assert_eq!(parsed.translation.provider, TranslationProvider::LibreTranslate);
    assert_eq!(parsed.translation.common.retry_count, 3);
}

/// Missing optional fields fall back to defaults when deserializing
#[test]
fn test_config_deserialization_minimalJson_shouldUseDefaults() {
    let json = r#"{
        "target_language": "es",
        "translation": {
            "provider": "google"
        }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.target_language, "es");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.translation.common.cache_enabled);

    // No available_providers entries means accessors fall back to defaults
    assert_eq!(config.translation.get_endpoint(), "https://translate.googleapis.com");
    assert_eq!(config.translation.get_timeout_secs(), 30);
}

/// Provider configs created by name carry the matching identifier
#[test]
fn test_providerConfig_new_shouldSetProviderType() {
    assert_eq!(ProviderConfig::new(TranslationProvider::Google).provider_type, "google");
    assert_eq!(ProviderConfig::new(TranslationProvider::DeepL).provider_type, "deepl");
    assert_eq!(
        ProviderConfig::new(TranslationProvider::LibreTranslate).provider_type,
        "libretranslate"
    );
}
