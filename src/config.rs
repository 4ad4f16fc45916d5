use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/ratings.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("APP_DATA_PATH").ok(),
            env::var("APP_BIND").ok(),
            env::var("PORT").ok(),
        )
    }

    fn from_vars(data_path: Option<String>, bind: Option<String>, port: Option<String>) -> Self {
        let data_path = data_path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let ip = bind
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let port = port
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            data_path,
            addr: SocketAddr::new(ip, port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_loopback() {
        let config = Config::from_vars(None, None, None);
        assert_eq!(config.data_path, PathBuf::from("data/ratings.json"));
        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_vars(
            Some("/tmp/r.json".to_string()),
            Some("not-an-ip".to_string()),
            Some("99999".to_string()),
        );
        assert_eq!(config.data_path, PathBuf::from("/tmp/r.json"));
        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
    }

    #[test]
    fn explicit_values_win() {
        let config = Config::from_vars(None, Some("0.0.0.0".to_string()), Some("9000".to_string()));
        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 9000)));
    }
}
