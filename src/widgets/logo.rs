//! The [`CondorLogo`] widget renders the Condor wordmark.
use crate::styles::theme;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::Widget;

/// A widget that renders the Condor wordmark
///
/// Used on the splash screen and as the small brand in screen headers.
///
/// # Examples
///
/// ```rust
/// use condor::widgets::CondorLogo;
///
/// # fn draw(frame: &mut ratatui::Frame) {
/// frame.render_widget(CondorLogo::regular(), frame.area());
/// # }
/// ```
///
/// Renders:
///
/// ```text
/// ┏━╸┏━┓┏┓╻╺┳┓┏━┓┏━┓
/// ┃  ┃ ┃┃┗┫ ┃┃┃ ┃┣┳┛
/// ┗━╸┗━┛╹ ╹╺┻┛┗━┛╹┗╸
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CondorLogo {
    size: Size,
}

/// The size of the logo
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Size {
    /// One line, for headers
    ///
    /// ```text
    /// ▲ CONDOR
    /// ```
    Small,
    /// Three lines, heavy box drawing characters
    #[default]
    Regular,
    /// Three lines, double box drawing characters
    ///
    /// ```text
    /// ╔═╗╔═╗╔╗╔╔╦╗╔═╗╦═╗
    /// ║  ║ ║║║║ ║║║ ║╠╦╝
    /// ╚═╝╚═╝╝╚╝═╩╝╚═╝╩╚═
    /// ```
    Classic,
}

impl CondorLogo {
    pub const fn new(size: Size) -> Self {
        Self { size }
    }

    pub const fn small() -> Self {
        Self::new(Size::Small)
    }

    pub const fn regular() -> Self {
        Self::new(Size::Regular)
    }

    pub const fn classic() -> Self {
        Self::new(Size::Classic)
    }

    /// Returns the width of the logo in terminal cells
    pub const fn width(&self) -> u16 {
        self.size.width()
    }

    /// Returns the height of the logo in lines
    pub const fn height(&self) -> u16 {
        self.size.height()
    }
}

impl Widget for CondorLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Text::raw(self.size.as_str())
            .style(theme().title_style())
            .render(area, buf);
    }
}

impl Size {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "▲ CONDOR",
            Self::Regular => Self::regular(),
            Self::Classic => Self::classic(),
        }
    }

    pub const fn width(self) -> u16 {
        match self {
            Self::Small => 8,
            Self::Regular | Self::Classic => 18,
        }
    }

    pub const fn height(self) -> u16 {
        match self {
            Self::Small => 1,
            Self::Regular | Self::Classic => 3,
        }
    }

    const fn regular() -> &'static str {
        indoc! {"
            ┏━╸┏━┓┏┓╻╺┳┓┏━┓┏━┓
            ┃  ┃ ┃┃┗┫ ┃┃┃ ┃┣┳┛
            ┗━╸┗━┛╹ ╹╺┻┛┗━┛╹┗╸
        "}
    }

    const fn classic() -> &'static str {
        indoc! {"
            ╔═╗╔═╗╔╗╔╔╦╗╔═╗╦═╗
            ║  ║ ║║║║ ║║║ ║╠╦╝
            ╚═╝╚═╝╝╚╝═╩╝╚═╝╩╚═
        "}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_logo_is_regular() {
        assert_eq!(CondorLogo::default(), CondorLogo::regular());
    }

    #[test]
    fn logo_dimensions_match_content() {
        for size in [Size::Small, Size::Regular, Size::Classic] {
            let lines: Vec<&str> = size.as_str().lines().collect();
            assert_eq!(lines.len() as u16, size.height(), "{:?} height mismatch", size);

            let max_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
            assert_eq!(max_width, size.width(), "{:?} width mismatch", size);
        }
    }
}
