//! Invocation settings

/// Environment variable used as the fallback region
pub const REGION_ENV: &str = "AWS_DEFAULT_REGION";

/// Options recognized for a single run
///
/// Empty `environment`/`region` mean "not specified" and drop the matching
/// levels from the file cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Environment tag (development, staging, production, ...). Default: empty
    pub environment: String,
    /// Region tag. The CLI fills it from `AWS_DEFAULT_REGION` when `--region` is absent
    pub region: String,
    /// Pretty output and settings echo. Default: false
    pub debug: bool,
    /// Pretty output. Default: false
    pub format_json: bool,
    /// Accepted for compatibility; no operation waits on completion. Default: false
    pub no_wait: bool,
}

impl Settings {
    /// Whether generated output should be indented
    pub fn pretty_output(&self) -> bool {
        self.format_json || self.debug
    }
}
