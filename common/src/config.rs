#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skips the banner printed at startup.
    pub no_banner: bool,
    /// Quiet level. Anything above zero hides headers and the banner.
    ///
    /// Results are always printed.
    pub quiet: u8,
}

impl Config {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }
}
