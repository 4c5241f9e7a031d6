use std::collections::HashSet;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::{warn, Level};

/// Runtime settings read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Settings {
    pub guild_id: Option<u64>,
    pub admin_ids: HashSet<u64>,
    pub data_dir: PathBuf,
    pub knowledge_base_path: Option<PathBuf>,
    pub require_login: bool,
    pub online_search: bool,
    pub search_timeout: Duration,
    pub max_listed_programs: usize,
    pub seed_admin: Option<(String, String)>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| var(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let seed_admin = match (var("ADMIN_EMAIL"), var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some((email, password)),
            (Some(_), None) | (None, Some(_)) => {
                warn!("ADMIN_EMAIL and ADMIN_PASSWORD must be set together; no admin seeded");
                None
            }
            (None, None) => None,
        };

        Self {
            guild_id: var("DISCORD_GUILD_ID").and_then(|s| s.parse().ok()),
            admin_ids: parse_admin_ids(var("ADMIN_USER_IDS").as_deref().unwrap_or("")),
            data_dir: var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data")),
            knowledge_base_path: var("KNOWLEDGE_BASE_PATH").map(PathBuf::from),
            require_login: parse_or("REQUIRE_LOGIN", var("REQUIRE_LOGIN"), true, parse_bool),
            online_search: parse_or("ONLINE_SEARCH", var("ONLINE_SEARCH"), true, parse_bool),
            search_timeout: Duration::from_secs(parse_or(
                "SEARCH_TIMEOUT_SECS",
                var("SEARCH_TIMEOUT_SECS"),
                10,
                |s| s.parse::<u64>().ok().filter(|n| *n > 0),
            )),
            max_listed_programs: parse_or(
                "MAX_LISTED_PROGRAMS",
                var("MAX_LISTED_PROGRAMS"),
                3,
                |s| s.parse::<usize>().ok().filter(|n| *n > 0),
            ),
            seed_admin,
        }
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }

    pub fn content_path(&self) -> PathBuf {
        self.data_dir.join("content.json")
    }
}

/// `LOG_LEVEL`, read before the subscriber is installed. Unknown values mean
/// `info`.
pub fn log_level() -> Level {
    dotenv::var("LOG_LEVEL")
        .ok()
        .and_then(|s| parse_level(&s))
        .unwrap_or(Level::INFO)
}

fn parse_level(s: &str) -> Option<Level> {
    Level::from_str(s.trim()).ok()
}

pub fn parse_admin_ids(raw: &str) -> HashSet<u64> {
    raw.split(',')
        .filter_map(|s| s.trim().parse::<u64>().ok())
        .collect()
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" | "sim" | "on" => Some(true),
        "0" | "false" | "no" | "nao" | "não" | "off" => Some(false),
        _ => None,
    }
}

/// Parse `raw` when present, logging and using `default` when it is malformed.
fn parse_or<T: std::fmt::Debug>(
    key: &str,
    raw: Option<String>,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    match raw {
        None => default,
        Some(raw) => parse(&raw).unwrap_or_else(|| {
            warn!(key, value = %raw, ?default, "Malformed setting, using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let s = settings(&[]);
        assert!(s.guild_id.is_none());
        assert!(s.admin_ids.is_empty());
        assert_eq!(s.data_dir, PathBuf::from("./data"));
        assert!(s.require_login);
        assert!(s.online_search);
        assert_eq!(s.search_timeout, Duration::from_secs(10));
        assert_eq!(s.max_listed_programs, 3);
        assert!(s.seed_admin.is_none());
        assert_eq!(s.users_path(), PathBuf::from("./data/users.json"));
    }

    #[test]
    fn test_overrides() {
        let s = settings(&[
            ("DISCORD_GUILD_ID", "123"),
            ("ADMIN_USER_IDS", "1, 2,x,3"),
            ("REQUIRE_LOGIN", "false"),
            ("SEARCH_TIMEOUT_SECS", "4"),
            ("MAX_LISTED_PROGRAMS", "5"),
            ("ADMIN_EMAIL", "admin@lex.com.br"),
            ("ADMIN_PASSWORD", "segredo"),
        ]);
        assert_eq!(s.guild_id, Some(123));
        assert_eq!(s.admin_ids, HashSet::from([1, 2, 3]));
        assert!(!s.require_login);
        assert_eq!(s.search_timeout, Duration::from_secs(4));
        assert_eq!(s.max_listed_programs, 5);
        assert_eq!(
            s.seed_admin,
            Some(("admin@lex.com.br".to_string(), "segredo".to_string()))
        );
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let s = settings(&[
            ("ONLINE_SEARCH", "talvez"),
            ("SEARCH_TIMEOUT_SECS", "0"),
            ("MAX_LISTED_PROGRAMS", "-1"),
        ]);
        assert!(s.online_search);
        assert_eq!(s.search_timeout, Duration::from_secs(10));
        assert_eq!(s.max_listed_programs, 3);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_level(" WARN "), Some(Level::WARN));
        assert!(parse_level("loud").is_none());
    }

    #[test]
    fn test_admin_seed_needs_both() {
        assert!(settings(&[("ADMIN_EMAIL", "a@b.com")]).seed_admin.is_none());
    }
}
