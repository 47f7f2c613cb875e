use clap::{Parser, ValueEnum};
use smithay_client_toolkit::shell::wlr_layer::Layer;

use crate::{theme::ThemeName, ticker::Cadence};

pub const DEFAULT_WIDTH: u32 = 448;

#[derive(Parser, Debug, Clone)]
#[command(name = "dialtime", version, about, long_about = None)]
pub struct Config {
    /// Color palette and face proportions.
    #[arg(short, long, value_enum, default_value_t = ThemeName::Graphite)]
    pub theme: ThemeName,

    /// Surface width in pixels, the height follows from it.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u32).range(160..=2048)
    )]
    pub width: u32,

    /// Layer shell layer to place the clock on.
    #[arg(short, long, value_enum, default_value_t = LayerName::Overlay)]
    pub layer: LayerName,

    /// Tick on wall-clock second boundaries instead of every 1000ms.
    #[arg(long)]
    pub align: bool,

    /// Locale for the date line, e.g. `de_DE`. Defaults to LC_ALL, LC_TIME or LANG.
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,
}

impl Config {
    pub fn cadence(&self) -> Cadence {
        if self.align {
            Cadence::Aligned
        } else {
            Cadence::Fixed
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerName {
    Background,
    Bottom,
    Top,
    #[default]
    Overlay,
}

impl From<LayerName> for Layer {
    fn from(name: LayerName) -> Self {
        match name {
            LayerName::Background => Self::Background,
            LayerName::Bottom => Self::Bottom,
            LayerName::Top => Self::Top,
            LayerName::Overlay => Self::Overlay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["dialtime"]).unwrap();
        assert_eq!(config.theme, ThemeName::Graphite);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.layer, LayerName::Overlay);
        assert_eq!(config.cadence(), Cadence::Fixed);
        assert!(config.locale.is_none());
    }

    #[test]
    fn flags_are_parsed() {
        let config = Config::try_parse_from([
            "dialtime", "--theme", "mocha", "-w", "600", "--layer", "top", "--align", "--locale",
            "de_DE",
        ])
        .unwrap();
        assert_eq!(config.theme, ThemeName::Mocha);
        assert_eq!(config.width, 600);
        assert_eq!(config.layer, LayerName::Top);
        assert_eq!(config.cadence(), Cadence::Aligned);
        assert_eq!(config.locale.as_deref(), Some("de_DE"));
    }

    #[test]
    fn tiny_surfaces_are_rejected() {
        assert!(Config::try_parse_from(["dialtime", "--width", "10"]).is_err());
        assert!(Config::try_parse_from(["dialtime", "--theme", "neon"]).is_err());
    }
}
