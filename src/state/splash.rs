//! Splash screen content.

/// Slogan shown under the logo
pub const SLOGAN: &str = "EXPLORA EL REALISMO MÁGICO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashState {
    pub slogan: String,
}

impl Default for SplashState {
    fn default() -> Self {
        Self {
            slogan: SLOGAN.to_string(),
        }
    }
}
