use crate::error::ConfigurationError;

/// Configuration for a [`Suite`].
///
/// [`Suite`]: crate::Suite
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Display one character per case instead of one line.
    pub(crate) quiet: bool,
    /// Run every case regardless of earlier failures.
    pub(crate) no_fail_fast: bool,
}

impl Config {
    /// Construct a configuration from a collection of options.
    ///
    /// ```
    /// use vouch::Config;
    ///
    /// let config = Config::from_options(["quiet", "no-fail-fast=false"])?;
    /// assert!(config.is_quiet());
    /// assert!(!config.is_no_fail_fast());
    /// # Ok::<_, vouch::ConfigurationError>(())
    /// ```
    pub fn from_options<I>(options: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut config = Self::default();

        for option in options {
            config.parse_option(option.as_ref())?;
        }

        Ok(config)
    }

    /// Parse the given option.
    pub fn parse_option(&mut self, option: &str) -> Result<(), ConfigurationError> {
        let mut it = option.splitn(2, '=');

        match it.next() {
            Some(key @ "quiet") => {
                self.quiet = parse_flag(key, it.next())?;
            }
            Some(key @ "no-fail-fast") => {
                self.no_fail_fast = parse_flag(key, it.next())?;
            }
            _ => {
                return Err(ConfigurationError::UnsupportedOption {
                    option: option.to_owned(),
                });
            }
        }

        Ok(())
    }

    /// Set quiet output.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Keep running cases after a failure.
    pub fn with_no_fail_fast(mut self, no_fail_fast: bool) -> Self {
        self.no_fail_fast = no_fail_fast;
        self
    }

    /// Test if output is quiet.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Test if every case runs regardless of failures.
    pub fn is_no_fail_fast(&self) -> bool {
        self.no_fail_fast
    }
}

/// Parse the value of a boolean flag, where a missing value means `true`.
pub(crate) fn parse_flag(option: &str, value: Option<&str>) -> Result<bool, ConfigurationError> {
    match value {
        None | Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(value) => Err(ConfigurationError::InvalidValue {
            option: option.to_owned(),
            value: value.to_owned(),
        }),
    }
}
