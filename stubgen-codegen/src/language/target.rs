//! Target languages.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::Error;

/// Supported target languages for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    /// Go
    Go,
    /// JavaScript
    JavaScript,
    /// Python
    Python,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 3] = [Language::Go, Language::JavaScript, Language::Python];

    /// Returns the language selector as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::JavaScript => "js",
            Language::Python => "py",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "go" | "golang" => Ok(Language::Go),
            "js" | "javascript" => Ok(Language::JavaScript),
            "py" | "python" => Ok(Language::Python),
            _ => Err(Box::new(Error::UnsupportedTargetLanguage {
                name: s.to_string(),
            })),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = Box<Error>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Language::from_str("go").unwrap(), Language::Go);
        assert_eq!(Language::from_str("golang").unwrap(), Language::Go);
        assert_eq!(Language::from_str("js").unwrap(), Language::JavaScript);
        assert_eq!(Language::from_str("JavaScript").unwrap(), Language::JavaScript);
        assert_eq!(Language::from_str("py").unwrap(), Language::Python);
        assert_eq!(Language::from_str("Python").unwrap(), Language::Python);
    }

    #[test]
    fn test_from_str_unsupported() {
        let err = Language::from_str("cobol").unwrap_err();
        assert!(matches!(
            *err,
            Error::UnsupportedTargetLanguage { ref name } if name == "cobol"
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for lang in Language::ALL {
            assert_eq!(Language::from_str(&lang.to_string()).unwrap(), lang);
        }
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Config {
            lang: Language,
        }

        let config: Config = toml::from_str(r#"lang = "py""#).unwrap();
        assert_eq!(config.lang, Language::Python);

        assert!(toml::from_str::<Config>(r#"lang = "rust""#).is_err());
    }
}
