//!
//! The run parameter source of reloaded tests.
//!

///
/// Where reloaded tests take `numjobs` and `iodepth` from.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ParameterSource {
    /// The current invocation.
    #[default]
    Invocation,
    /// The persisted document.
    Document,
}

impl std::str::FromStr for ParameterSource {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "invocation" => Ok(Self::Invocation),
            "document" => Ok(Self::Document),
            string => anyhow::bail!(
                "Unknown parameter source `{string}`. Supported sources: {}",
                vec![Self::Invocation, Self::Document]
                    .into_iter()
                    .map(|source| source.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for ParameterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invocation => write!(f, "invocation"),
            Self::Document => write!(f, "document"),
        }
    }
}
