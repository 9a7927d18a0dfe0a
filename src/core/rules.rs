//! Validation rules and format patterns
//!
//! A rule table maps wire names to [`ValidationRule`] entries. Rules are
//! declared once per endpoint and shared process-wide; the format patterns
//! compile lazily on first use and are immutable afterwards.

use regex::Regex;
use std::sync::OnceLock;

/// The semantic parameter type a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    Number,
}

/// Named string-shape constraints checked via pattern matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Email,
    Url,
    Ip,
    Date,
    HexColor,
}

impl FieldFormat {
    /// The tag used in validation messages (e.g. "must be a valid hexColor")
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldFormat::Email => "email",
            FieldFormat::Url => "url",
            FieldFormat::Ip => "ip",
            FieldFormat::Date => "date",
            FieldFormat::HexColor => "hexColor",
        }
    }

    /// Test a string value against this format's pattern
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => Self::email_pattern().is_match(value),
            FieldFormat::Url => Self::url_pattern().is_match(value),
            FieldFormat::Ip => Self::ip_pattern().is_match(value),
            FieldFormat::Date => Self::date_pattern().is_match(value),
            FieldFormat::HexColor => Self::hex_color_pattern().is_match(value),
        }
    }

    fn email_pattern() -> &'static Regex {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
    }

    fn url_pattern() -> &'static Regex {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        URL_REGEX.get_or_init(|| Regex::new(r"^https?://.+").unwrap())
    }

    fn ip_pattern() -> &'static Regex {
        static IP_REGEX: OnceLock<Regex> = OnceLock::new();
        // IPv4 dotted quad with 0-255 octets, or full 8-group IPv6
        IP_REGEX.get_or_init(|| {
            Regex::new(
                r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$|^([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$",
            )
            .unwrap()
        })
    }

    fn date_pattern() -> &'static Regex {
        static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
        // Digit shape only, no calendar validation
        DATE_REGEX.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
    }

    fn hex_color_pattern() -> &'static Regex {
        static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
        HEX_COLOR_REGEX
            .get_or_init(|| Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap())
    }
}

/// Validation constraints for a single wire parameter
///
/// Constructed with the chainable helpers:
///
/// ```rust
/// use zipdemographics::core::rules::{FieldFormat, ValidationRule};
///
/// let rule = ValidationRule::string()
///     .required()
///     .min_length(5)
///     .max_length(5);
///
/// let status = ValidationRule::string().one_of(["active", "inactive"]);
/// let contact = ValidationRule::string().format(FieldFormat::Email);
/// ```
#[derive(Debug, Clone)]
pub struct ValidationRule {
    pub param_type: ParamType,
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub format: Option<FieldFormat>,
    pub allowed: Vec<String>,
}

impl ValidationRule {
    fn new(param_type: ParamType) -> Self {
        Self {
            param_type,
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            format: None,
            allowed: Vec::new(),
        }
    }

    /// A rule for a string parameter
    pub fn string() -> Self {
        Self::new(ParamType::String)
    }

    /// A rule for an integer parameter
    pub fn integer() -> Self {
        Self::new(ParamType::Integer)
    }

    /// A rule for a floating-point parameter
    pub fn number() -> Self {
        Self::new(ParamType::Number)
    }

    /// Mark the parameter as required (zero value rejected)
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Lower numeric bound (inclusive)
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Upper numeric bound (inclusive)
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Minimum string length in bytes
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Maximum string length in bytes
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Require the value to match a named format
    pub fn format(mut self, format: FieldFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Restrict the value to a fixed set, compared by string representation
    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = values.into_iter().map(Into::into).collect();
        self
    }
}
