use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOOKUP_URL: &str = "https://mojikiban.ipa.go.jp/mji/q";

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub storage: StoragePaths,
    #[command(flatten)]
    pub lookup: LookupSettings,
}

#[derive(Args, Debug, Clone)]
pub struct StoragePaths {
    /// History file read at startup and written on save
    #[arg(global = true, short = 'n', long = "history", default_value = "name.csv")]
    pub history: PathBuf,

    /// Stroke count cache (`char,count` lines)
    #[arg(global = true, long = "strokes", default_value = "kakusuu.csv")]
    pub strokes: PathBuf,

    /// Kana stroke table merged over the cache
    #[arg(global = true, long = "kana")]
    pub kana: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct LookupSettings {
    #[arg(global = true, long, default_value = DEFAULT_LOOKUP_URL)]
    pub lookup_url: String,

    #[arg(global = true, long, default_value_t = 10_000)]
    pub lookup_timeout_ms: u64,

    /// Never contact the remote character database
    #[arg(global = true, long, default_value_t = false)]
    pub offline: bool,
}

impl Default for StoragePaths {
    fn default() -> Self {
        Self {
            history: PathBuf::from("name.csv"),
            strokes: PathBuf::from("kakusuu.csv"),
            kana: None,
        }
    }
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            lookup_timeout_ms: 10_000,
            offline: false,
        }
    }
}

impl LookupSettings {
    pub fn timeout(&self) -> Duration {
        // ureq treats a zero timeout as "fail immediately"
        Duration::from_millis(self.lookup_timeout_ms.max(100))
    }
}
