//! Field configuration.
//!
//! [`PasscodeConfig`] is the value object a [`PasscodeField`](crate::PasscodeField)
//! is built from. It carries live objects (validator, style factory).
//! [`PasscodeSettings`] is its plain-data twin that can be loaded from a TOML
//! file and converted with [`PasscodeSettings::into_config`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_passcode::{ActiveIndexStrategy, PasscodeConfig, ResetPolicy};
//!
//! let config = PasscodeConfig::new(6)
//!     .with_strategy(ActiveIndexStrategy::FirstEmpty)
//!     .with_reset_policy(ResetPolicy::after_delay(Duration::from_millis(800)));
//!
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_passcode_style::styles::UnderlineStyle;
use horizon_passcode_style::theme::PasscodePalette;
use horizon_passcode_style::{CellStyleFactory, DebugFactory, style_factory};
use serde::{Deserialize, Serialize};

use crate::direction::LayoutDirection;
use crate::error::{Error, Result};
use crate::reset::ResetPolicy;
use crate::strategy::ActiveIndexStrategy;
use crate::validator::{AllOf, Charset, FragmentValidator, RegexValidator, SharedValidator};

/// Default number of cells.
pub const DEFAULT_LENGTH: usize = 4;

/// Default gap between cells, in points.
pub const DEFAULT_SPACING: f32 = 8.0;

/// Everything needed to build a [`PasscodeField`](crate::PasscodeField).
#[derive(Clone)]
pub struct PasscodeConfig {
    /// Number of cells. Must be at least 1.
    pub length: usize,
    /// Gap between adjacent cells.
    pub spacing: f32,
    /// How the active cell follows the code.
    pub strategy: ActiveIndexStrategy,
    /// Refuse all keystrokes while set.
    pub ignore_user_input: bool,
    /// Initial error flag.
    pub is_error: bool,
    /// What clears an error.
    pub reset_policy: ResetPolicy,
    /// Whether the default style pulses the selected cell.
    pub animate_selected_cell: bool,
    /// Whether entering error mode plays a shake.
    pub shake_on_error: bool,
    /// Optional fragment predicate.
    pub validator: Option<SharedValidator>,
    /// Style factory; `None` uses an [`UnderlineStyle`] built from `palette`.
    pub style_factory: Option<CellStyleFactory>,
    /// Direction override; `None` follows the system locale.
    pub layout_direction: Option<LayoutDirection>,
    /// Colors for the default style.
    pub palette: PasscodePalette,
}

impl Default for PasscodeConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            spacing: DEFAULT_SPACING,
            strategy: ActiveIndexStrategy::default(),
            ignore_user_input: false,
            is_error: false,
            reset_policy: ResetPolicy::default(),
            animate_selected_cell: true,
            shake_on_error: true,
            validator: None,
            style_factory: None,
            layout_direction: None,
            palette: PasscodePalette::default(),
        }
    }
}

impl fmt::Debug for PasscodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasscodeConfig")
            .field("length", &self.length)
            .field("spacing", &self.spacing)
            .field("strategy", &self.strategy)
            .field("ignore_user_input", &self.ignore_user_input)
            .field("is_error", &self.is_error)
            .field("reset_policy", &self.reset_policy)
            .field("animate_selected_cell", &self.animate_selected_cell)
            .field("shake_on_error", &self.shake_on_error)
            .field("has_validator", &self.validator.is_some())
            .field("style_factory", &self.style_factory.as_ref().map(DebugFactory))
            .field("layout_direction", &self.layout_direction)
            .finish_non_exhaustive()
    }
}

impl PasscodeConfig {
    /// A default configuration with `length` cells.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_strategy(mut self, strategy: ActiveIndexStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_ignore_user_input(mut self, ignore: bool) -> Self {
        self.ignore_user_input = ignore;
        self
    }

    pub fn with_error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    pub fn with_animate_selected_cell(mut self, animate: bool) -> Self {
        self.animate_selected_cell = animate;
        self
    }

    pub fn with_shake_on_error(mut self, shake: bool) -> Self {
        self.shake_on_error = shake;
        self
    }

    /// Install a fragment validator.
    pub fn with_validator(mut self, validator: impl FragmentValidator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Install a custom cell style.
    pub fn with_style_factory(mut self, factory: CellStyleFactory) -> Self {
        self.style_factory = Some(factory);
        self
    }

    /// Force a layout direction instead of following the system locale.
    pub fn with_layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = Some(direction);
        self
    }

    pub fn with_palette(mut self, palette: PasscodePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::InvalidLength(self.length));
        }
        Ok(())
    }

    /// The direction this configuration resolves to.
    pub fn resolved_direction(&self) -> LayoutDirection {
        self.layout_direction.unwrap_or_else(LayoutDirection::system)
    }
}

/// The underline style used when no factory is configured.
pub(crate) fn default_style_factory(palette: &PasscodePalette, animate: bool) -> CellStyleFactory {
    let palette = palette.clone();
    style_factory(move || UnderlineStyle::from_palette(&palette).with_animation(animate))
}

/// Named palettes for settings files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn palette(self) -> PasscodePalette {
        match self {
            Self::Light => PasscodePalette::light(),
            Self::Dark => PasscodePalette::dark(),
        }
    }
}

/// Serializable field settings.
///
/// ```
/// use horizon_passcode::PasscodeSettings;
///
/// let settings = PasscodeSettings::from_toml_str(r#"
///     length = 6
///     charset = "digits"
///
///     [reset_policy]
///     kind = "on_next_user_interaction"
/// "#).unwrap();
///
/// let config = settings.into_config().unwrap();
/// assert_eq!(config.length, 6);
/// assert!(config.validator.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasscodeSettings {
    pub length: usize,
    pub spacing: f32,
    pub strategy: ActiveIndexStrategy,
    pub ignore_user_input: bool,
    pub animate_selected_cell: bool,
    pub shake_on_error: bool,
    /// Allowed characters.
    pub charset: Charset,
    /// Regex every glyph must match, in addition to `charset`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_direction: Option<LayoutDirection>,
    pub theme: Theme,
    pub reset_policy: ResetPolicy,
}

impl Default for PasscodeSettings {
    fn default() -> Self {
        let config = PasscodeConfig::default();
        Self {
            length: config.length,
            spacing: config.spacing,
            strategy: config.strategy,
            ignore_user_input: config.ignore_user_input,
            animate_selected_cell: config.animate_selected_cell,
            shake_on_error: config.shake_on_error,
            charset: Charset::default(),
            pattern: None,
            layout_direction: None,
            theme: Theme::default(),
            reset_policy: config.reset_policy,
        }
    }
}

impl PasscodeSettings {
    /// Parse settings from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize settings to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The validator described by `charset` and `pattern`.
    pub fn validator(&self) -> Result<Option<SharedValidator>> {
        let pattern = self
            .pattern
            .as_deref()
            .map(RegexValidator::new)
            .transpose()?
            .map(|v| Arc::new(v) as SharedValidator);

        Ok(match (self.charset.validator(), pattern) {
            (None, None) => None,
            (Some(v), None) | (None, Some(v)) => Some(v),
            (Some(a), Some(b)) => Some(Arc::new(AllOf::new(vec![a, b]))),
        })
    }

    /// Build a validated [`PasscodeConfig`].
    pub fn into_config(self) -> Result<PasscodeConfig> {
        let config = PasscodeConfig {
            length: self.length,
            spacing: self.spacing,
            strategy: self.strategy,
            ignore_user_input: self.ignore_user_input,
            is_error: false,
            reset_policy: self.reset_policy,
            animate_selected_cell: self.animate_selected_cell,
            shake_on_error: self.shake_on_error,
            validator: self.validator()?,
            style_factory: None,
            layout_direction: self.layout_direction,
            palette: self.theme.palette(),
        };
        config.validate()?;
        Ok(config)
    }
}
