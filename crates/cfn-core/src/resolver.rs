//! File name cascade
//!
//! Builds the ordered list of candidate file names for a stack, most
//! specific first:
//!
//! 1. `{base}.{environment}.{region}.{ext}`
//! 2. `{base}.{environment}.{ext}`
//! 3. `{base}.{region}.{ext}`
//! 4. `{base}.{ext}`

/// Extension for stack configs and templates
pub const CONFIG_EXTENSION: &str = "yml";

/// Extension for generated output
pub const OUTPUT_EXTENSION: &str = "json";

/// Build the candidate list for `base`.
///
/// An empty `environment` or `region` means "not specified". The result is
/// not de-duplicated; the universal fallback `{base}.{ext}` is always last.
pub fn resolve_candidates(
    base: &str,
    environment: &str,
    region: &str,
    extension: &str,
) -> Vec<String> {
    let mut names = Vec::with_capacity(4);

    if !environment.is_empty() && !region.is_empty() {
        names.push(format!("{base}.{environment}.{region}.{extension}"));
    }

    if !environment.is_empty() {
        names.push(format!("{base}.{environment}.{extension}"));
    }

    if !region.is_empty() {
        names.push(format!("{base}.{region}.{extension}"));
    }

    names.push(format!("{base}.{extension}"));

    names
}

/// The `(base, environment, region)` triple a cascade is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCascade {
    pub base: String,
    pub environment: String,
    pub region: String,
}

impl NameCascade {
    pub fn new(
        base: impl Into<String>,
        environment: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            environment: environment.into(),
            region: region.into(),
        }
    }

    pub fn candidates(&self, extension: &str) -> Vec<String> {
        resolve_candidates(&self.base, &self.environment, &self.region, extension)
    }

    /// Most specific name for `extension`; generated output is always written here.
    pub fn most_specific(&self, extension: &str) -> String {
        // resolve_candidates never returns an empty list
        self.candidates(extension).swap_remove(0)
    }
}
