use clap::Subcommand;

crate::reflect_enum! {
    #[derive(Debug)]
    pub enum HashAlgorithm {
        Fnv1a => "fnv1a",
        Hsieh => "hsieh",
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Encode or decode base64
    Base64 {
        #[command(subcommand)]
        action: Base64Action,
    },

    /// Hash a string (fnv1a or hsieh)
    Hash {
        algorithm: HashAlgorithm,
        input: String,
    },

    /// Split a string on any of the delimiter characters
    Split {
        input: String,

        #[arg(long, help = "Delimiter characters (overrides split.delimiters)")]
        delims: Option<String>,

        #[arg(long, help = "Keep empty tokens between adjacent delimiters")]
        keep_empty: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum Base64Action {
    Encode { input: String },
    Decode { input: String },
}
