// src/compiler/request.rs
//! Compilation options and their form-encoded wire representation.

use crate::bundle::Bundle;
use crate::constants::{DEFAULT_LANGUAGE_OUT, OUTPUT_FORMAT, OUTPUT_INFO};
use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// How aggressively the service rewrites the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompilationLevel {
    WhitespaceOnly,
    SimpleOptimizations,
    #[default]
    AdvancedOptimizations,
}

impl CompilationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WhitespaceOnly => "WHITESPACE_ONLY",
            Self::SimpleOptimizations => "SIMPLE_OPTIMIZATIONS",
            Self::AdvancedOptimizations => "ADVANCED_OPTIMIZATIONS",
        }
    }
}

impl FromStr for CompilationLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "WHITESPACE_ONLY" => Ok(Self::WhitespaceOnly),
            "SIMPLE_OPTIMIZATIONS" => Ok(Self::SimpleOptimizations),
            "ADVANCED_OPTIMIZATIONS" => Ok(Self::AdvancedOptimizations),
            other => Err(AppError::Validation(format!(
                "Unknown compilation level '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for CompilationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target ECMAScript edition, e.g. `ECMASCRIPT_2017`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOut(String);

impl LanguageOut {
    pub fn new(value: impl Into<String>) -> Result<Self, AppError> {
        let value = value.into().to_ascii_uppercase();
        let valid_suffix = value
            .strip_prefix("ECMASCRIPT")
            .map(|rest| rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(false);
        if valid_suffix && value.len() > "ECMASCRIPT".len() {
            Ok(Self(value))
        } else {
            Err(AppError::Validation(format!(
                "Output language '{}' is not an ECMASCRIPT_* edition",
                value
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageOut {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE_OUT.to_string())
    }
}

/// Options sent alongside every bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub compilation_level: CompilationLevel,
    pub language_out: LanguageOut,
}

/// A single compile call: the bundle plus its options.
#[derive(Debug)]
pub struct CompileRequest<'a> {
    pub bundle: &'a Bundle,
    pub options: &'a CompileOptions,
}

impl<'a> CompileRequest<'a> {
    pub fn new(bundle: &'a Bundle, options: &'a CompileOptions) -> Self {
        Self { bundle, options }
    }

    /// Key/value pairs in the order the service receives them.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("js_code", self.bundle.as_str()),
            ("compilation_level", self.options.compilation_level.as_str()),
            ("language_out", self.options.language_out.as_str()),
            ("output_format", OUTPUT_FORMAT),
            ("output_info", OUTPUT_INFO),
        ]
    }

    /// Encodes the request as an `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compilation_level_parsing() {
        assert_eq!(
            "advanced_optimizations".parse::<CompilationLevel>().unwrap(),
            CompilationLevel::AdvancedOptimizations
        );
        assert_eq!(
            "SIMPLE_OPTIMIZATIONS".parse::<CompilationLevel>().unwrap(),
            CompilationLevel::SimpleOptimizations
        );
        assert!("FASTEST".parse::<CompilationLevel>().is_err());
    }

    #[test]
    fn test_language_out_validation() {
        assert_eq!(
            LanguageOut::new("ecmascript_2017").unwrap().as_str(),
            "ECMASCRIPT_2017"
        );
        assert!(LanguageOut::new("ECMASCRIPT5").is_ok());
        assert!(LanguageOut::new("ECMASCRIPT").is_err());
        assert!(LanguageOut::new("ES2017").is_err());
    }

    #[test]
    fn test_form_body_decodes_to_five_pairs() {
        let bundle = Bundle::from_text("var a = 1 + 2; // a&b=c\n");
        let options = CompileOptions::default();
        let body = CompileRequest::new(&bundle, &options).to_form_body();

        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("js_code".to_string(), "var a = 1 + 2; // a&b=c\n".to_string()),
                (
                    "compilation_level".to_string(),
                    "ADVANCED_OPTIMIZATIONS".to_string()
                ),
                ("language_out".to_string(), "ECMASCRIPT_2017".to_string()),
                ("output_format".to_string(), "text".to_string()),
                ("output_info".to_string(), "compiled_code".to_string()),
            ]
        );
    }
}
