//! Competitor records and the fixed candidate list.

use serde::{Deserialize, Serialize};

/// Report key for the user's own company.
pub const USER_COMPANY_ID: &str = "my-company";

/// Display name for the user's own company.
pub const USER_COMPANY_NAME: &str = "Your Company";

/// A company shown in the analysis, including the user's own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: String,
    pub name: String,
    pub url: String,
    /// Avatar image reference.
    pub logo: String,
}

/// Seed candidates presented as auto-detected competitors.
const SEED_COMPETITORS: [(&str, &str, &str, &str); 5] = [
    ("c1", "Innovate Inc.", "www.innovate.com", "innovate"),
    ("c2", "Synergy Solutions", "www.synergy.com", "synergy"),
    ("c3", "Future Forward", "www.ffwd.com", "ffwd"),
    ("c4", "Quantum Leap", "www.qleap.com", "qleap"),
    ("c5", "Apex Digital", "www.apexdigital.com", "apex"),
];

impl Competitor {
    /// The fixed candidate list, in display order.
    pub fn seed_list() -> Vec<Competitor> {
        SEED_COMPETITORS
            .iter()
            .map(|(id, name, url, slug)| Competitor {
                id: (*id).to_string(),
                name: (*name).to_string(),
                url: (*url).to_string(),
                logo: avatar_url(slug),
            })
            .collect()
    }

    /// Competitor added by typing a URL.
    pub fn from_url(id: impl Into<String>, url: &str) -> Self {
        let id = id.into();
        let url = url.trim().to_string();
        Self {
            name: hostname(&url),
            logo: avatar_url(&id),
            id,
            url,
        }
    }

    /// The user's own company, keyed by [`USER_COMPANY_ID`].
    pub fn user_company(url: &str) -> Self {
        let url = url.trim().to_string();
        Self {
            id: USER_COMPANY_ID.to_string(),
            name: USER_COMPANY_NAME.to_string(),
            logo: avatar_url(&hostname(&url)),
            url,
        }
    }

    pub fn is_user_company(&self) -> bool {
        self.id == USER_COMPANY_ID
    }
}

/// Placeholder avatar reference for a seed string.
pub fn avatar_url(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/40/40")
}

/// Extract the host part of a loosely typed URL.
///
/// Accepts input with or without a scheme. Falls back to the trimmed input
/// when no host can be found.
pub fn hostname(input: &str) -> String {
    let trimmed = input.trim();
    let rest = match trimmed.find("://") {
        Some(idx) if trimmed.starts_with("http") => &trimmed[idx + 3..],
        _ => trimmed,
    };

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    let host = match host_port.rfind(':') {
        Some(idx) if host_port[idx + 1..].chars().all(|c| c.is_ascii_digit()) => &host_port[..idx],
        _ => host_port,
    };

    if host.is_empty() {
        trimmed.to_string()
    } else {
        host.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_list() {
        let seeds = Competitor::seed_list();
        assert_eq!(seeds.len(), 5);
        assert_eq!(seeds[0].id, "c1");
        assert_eq!(seeds[0].name, "Innovate Inc.");
        assert_eq!(seeds[0].logo, "https://picsum.photos/seed/innovate/40/40");
        assert_eq!(seeds[4].url, "www.apexdigital.com");
    }

    #[test]
    fn test_hostname_variants() {
        assert_eq!(hostname("https://www.example.com/pricing"), "www.example.com");
        assert_eq!(hostname("www.example.com"), "www.example.com");
        assert_eq!(hostname("http://Example.COM:8080?x=1"), "example.com");
        assert_eq!(hostname("https://user:pw@shop.example.com/#top"), "shop.example.com");
        assert_eq!(hostname("  example.org  "), "example.org");
    }

    #[test]
    fn test_hostname_fallback() {
        assert_eq!(hostname("https:///path"), "https:///path");
    }

    #[test]
    fn test_from_url() {
        let c = Competitor::from_url("manual-1", "https://www.rival.io/about");
        assert_eq!(c.id, "manual-1");
        assert_eq!(c.name, "www.rival.io");
        assert_eq!(c.url, "https://www.rival.io/about");
        assert_eq!(c.logo, "https://picsum.photos/seed/manual-1/40/40");
    }

    #[test]
    fn test_user_company() {
        let me = Competitor::user_company("mycorp.com/home");
        assert!(me.is_user_company());
        assert_eq!(me.name, USER_COMPANY_NAME);
        assert_eq!(me.logo, "https://picsum.photos/seed/mycorp.com/40/40");
    }
}
