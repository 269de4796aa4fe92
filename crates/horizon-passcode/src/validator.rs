//! Input validation for passcode fragments.
//!
//! A validator is a pure predicate over the fragment a keystroke (or paste)
//! is about to add. Attach one through
//! [`PasscodeConfig::with_validator`](crate::PasscodeConfig::with_validator);
//! without one, every fragment is accepted.
//!
//! # Built-in Validators
//!
//! - [`DigitsValidator`]: ASCII digits only
//! - [`AlphanumericValidator`]: letters and digits in any script
//! - [`RegexValidator`]: every glyph must match a pattern
//! - [`validator_fn`]: wrap any closure
//!
//! # Example
//!
//! ```
//! use horizon_passcode::validator::{FragmentValidator, RegexValidator};
//!
//! let hex = RegexValidator::new("^[0-9A-F]$").unwrap();
//! assert!(hex.accepts("3F"));
//! assert!(!hex.accepts("3g"));
//! ```

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Error, Result};

/// Trait for fragment validators.
///
/// Validators must be `Send + Sync` so configurations can be shared.
pub trait FragmentValidator: Send + Sync {
    /// Whether `fragment` may be entered.
    fn accepts(&self, fragment: &str) -> bool;
}

// Allow using Arc<dyn FragmentValidator> as a FragmentValidator
impl<V: FragmentValidator + ?Sized> FragmentValidator for Arc<V> {
    fn accepts(&self, fragment: &str) -> bool {
        (**self).accepts(fragment)
    }
}

// Allow using Box<dyn FragmentValidator> as a FragmentValidator
impl<V: FragmentValidator + ?Sized> FragmentValidator for Box<V> {
    fn accepts(&self, fragment: &str) -> bool {
        (**self).accepts(fragment)
    }
}

/// A shared, type-erased validator.
pub type SharedValidator = Arc<dyn FragmentValidator>;

/// Accepts fragments made only of ASCII digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitsValidator;

impl FragmentValidator for DigitsValidator {
    fn accepts(&self, fragment: &str) -> bool {
        fragment.chars().all(|c| c.is_ascii_digit())
    }
}

/// Accepts fragments made only of letters and digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphanumericValidator;

impl FragmentValidator for AlphanumericValidator {
    fn accepts(&self, fragment: &str) -> bool {
        fragment.chars().all(char::is_alphanumeric)
    }
}

/// Accepts fragments whose every glyph matches a pattern.
///
/// The pattern describes a single glyph, so pasting several glyphs at once is
/// validated the same way as typing them one by one. Anchor the pattern
/// (`^...$`) to reject partial matches.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    regex: Regex,
}

impl RegexValidator {
    /// Compile a validator from a pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| Error::invalid_pattern(pattern, e))?;
        Ok(Self { regex })
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl FragmentValidator for RegexValidator {
    fn accepts(&self, fragment: &str) -> bool {
        fragment.graphemes(true).all(|g| self.regex.is_match(g))
    }
}

/// A validator backed by a closure. Build with [`validator_fn`].
pub struct FnValidator<F>(F);

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnValidator(..)")
    }
}

impl<F> FragmentValidator for FnValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn accepts(&self, fragment: &str) -> bool {
        (self.0)(fragment)
    }
}

/// Wrap a closure as a validator.
pub fn validator_fn<F>(f: F) -> FnValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    FnValidator(f)
}

/// Accepts a fragment only when every inner validator does.
#[derive(Clone, Default)]
pub struct AllOf(Vec<SharedValidator>);

impl AllOf {
    /// Combine validators.
    pub fn new(validators: Vec<SharedValidator>) -> Self {
        Self(validators)
    }
}

impl fmt::Debug for AllOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AllOf({} validators)", self.0.len())
    }
}

impl FragmentValidator for AllOf {
    fn accepts(&self, fragment: &str) -> bool {
        self.0.iter().all(|v| v.accepts(fragment))
    }
}

/// Named character sets for settings files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Charset {
    /// No restriction.
    #[default]
    Any,
    /// ASCII digits.
    Digits,
    /// Letters and digits.
    Alphanumeric,
}

impl Charset {
    /// The validator for this set, `None` for [`Charset::Any`].
    pub fn validator(self) -> Option<SharedValidator> {
        match self {
            Self::Any => None,
            Self::Digits => Some(Arc::new(DigitsValidator)),
            Self::Alphanumeric => Some(Arc::new(AlphanumericValidator)),
        }
    }
}
