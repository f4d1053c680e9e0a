//! Browser identification strings sent with provider requests.

use rand::seq::SliceRandom;

/// Desktop browser user agents rotated across requests.
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.2478.67",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4.1 Safari/605.1.15",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14.4; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
];

/// Sent when the configured pool is empty.
pub const FALLBACK_USER_AGENT: &str = concat!("stockscrape/", env!("CARGO_PKG_VERSION"));

/// Picks a user agent at random from the pool.
#[must_use]
pub fn random_user_agent(pool: &[String]) -> &str {
    pool.choose(&mut rand::thread_rng())
        .map_or(FALLBACK_USER_AGENT, String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_user_agent_from_pool() {
        let pool: Vec<String> = USER_AGENTS.iter().map(|s| (*s).to_string()).collect();
        for _ in 0..32 {
            let agent = random_user_agent(&pool);
            assert!(USER_AGENTS.contains(&agent));
        }
    }

    #[test]
    fn test_empty_pool_falls_back() {
        assert_eq!(random_user_agent(&[]), FALLBACK_USER_AGENT);
        assert!(FALLBACK_USER_AGENT.starts_with("stockscrape/"));
    }
}
