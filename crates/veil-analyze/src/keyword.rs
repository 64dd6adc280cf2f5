use veil_rules::POETIC_KEYWORDS;
use xxhash_rust::xxh3::xxh3_64;

/// Pick the decorative keyword for a URL. xxh3 over the URL bytes keeps the
/// choice stable across processes and runs, unlike a runtime-seeded hash.
pub fn poetic_keyword(url: &str) -> &'static str {
    let index = (xxh3_64(url.as_bytes()) % POETIC_KEYWORDS.len() as u64) as usize;
    POETIC_KEYWORDS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_is_deterministic_per_url() {
        let first = poetic_keyword("https://example.com");
        for _ in 0..10 {
            assert_eq!(poetic_keyword("https://example.com"), first);
        }
    }

    #[test]
    fn keyword_comes_from_the_fixed_list() {
        for url in ["https://a.example", "https://b.example", "not even a url"] {
            assert!(POETIC_KEYWORDS.contains(&poetic_keyword(url)));
        }
    }
}
