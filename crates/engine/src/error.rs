use std::fmt;

#[derive(Debug)]
pub enum PlanError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (missing file name, blank source entry, etc.).
    ConfigValidation(String),
    /// A table is narrower than its column mapping requires.
    ColumnContract {
        context: String,
        required: usize,
        found: usize,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::ColumnContract { context, required, found } => {
                write!(
                    f,
                    "{context}: column mapping requires {required} column(s), table has {found}"
                )
            }
        }
    }
}

impl std::error::Error for PlanError {}
