use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Themes that can be picked in `gui.toml`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Nord,
    CatppuccinLatte,
    CatppuccinMocha,
    TokyoNight,
}

impl From<&Theme> for iced::Theme {
    fn from(value: &Theme) -> Self {
        match value {
            Theme::Light => iced::Theme::Light,
            Theme::Dark => iced::Theme::Dark,
            Theme::Nord => iced::Theme::Nord,
            Theme::CatppuccinLatte => iced::Theme::CatppuccinLatte,
            Theme::CatppuccinMocha => iced::Theme::CatppuccinMocha,
            Theme::TokyoNight => iced::Theme::TokyoNight,
        }
    }
}
