#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Plain text, one field per line
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}
