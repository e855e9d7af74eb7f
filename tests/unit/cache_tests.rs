/*!
 * Tests for the translation cache
 */

use prevod::translation::cache::TranslationCache;

#[test]
fn test_cache_sameTextDifferentLanguages_shouldBeSeparateEntries() {
    let cache = TranslationCache::new(true);
    cache.store("Hello", "fr", "Bonjour");
    cache.store("Hello", "de", "Hallo");

    assert_eq!(cache.get("Hello", "fr"), Some("Bonjour".to_string()));
    assert_eq!(cache.get("Hello", "de"), Some("Hallo".to_string()));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_cache_clear_shouldResetEntriesAndStats() {
    let cache = TranslationCache::new(true);
    cache.store("Hello", "fr", "Bonjour");
    cache.get("Hello", "fr");
    cache.get("Missing", "fr");

    cache.clear();

    assert!(cache.is_empty());
    let (hits, misses, hit_rate) = cache.stats();
    assert_eq!(hits, 0);
    assert_eq!(misses, 0);
    assert_eq!(hit_rate, 0.0);
}

#[test]
fn test_cache_clone_shouldShareStorage() {
    let cache = TranslationCache::new(true);
    let cloned = cache.clone();

    cache.store("Hello", "fr", "Bonjour");
    assert_eq!(cloned.get("Hello", "fr"), Some("Bonjour".to_string()));
}

#[test]
fn test_cache_disabled_shouldNeverStoreOrCount() {
    let cache = TranslationCache::new(false);
    assert!(!cache.is_enabled());

    cache.store("Hello", "fr", "Bonjour");
    assert_eq!(cache.get("Hello", "fr"), None);

    let (hits, misses, _) = cache.stats();
    assert_eq!(hits, 0);
    assert_eq!(misses, 0);
}
