use dotenv::dotenv;
use std::{env::current_dir, env::var, path::PathBuf, time::Duration};

pub struct Config {
    pub port: u16,
    pub root_directory: PathBuf,
    pub browser_delay: Duration,
    pub open_browser: bool,
}

impl Config {
    /// Loads `.env` and applies any `DS_*` overrides on top of the defaults.
    pub fn get() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            port: lookup("DS_PORT")
                .and_then(|port| port.trim().parse::<u16>().ok())
                .unwrap_or(defaults.port),
            root_directory: lookup("DS_ROOT")
                .map(|root| root.trim().to_string())
                .filter(|root| !root.is_empty())
                .map(|root| absolute(PathBuf::from(root)))
                .unwrap_or(defaults.root_directory),
            browser_delay: lookup("DS_BROWSER_DELAY_SECS")
                .and_then(|secs| secs.trim().parse::<u64>().ok())
                .map_or(defaults.browser_delay, Duration::from_secs),
            open_browser: lookup("DS_OPEN_BROWSER").map_or(defaults.open_browser, |open| {
                open.trim().to_lowercase() != "false"
            }),
        }
    }

    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8888,
            root_directory: absolute(PathBuf::from("dist")),
            browser_delay: Duration::from_secs(2),
            open_browser: true,
        }
    }
}

fn absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }

    current_dir().map_or(path.clone(), |cwd| cwd.join(path))
}
