use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bgra([u8; 4]);

impl Bgra {
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);

    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self([blue, green, red, alpha])
    }

    /// From a `0xAARRGGBB` literal.
    pub const fn from_argb(argb: u32) -> Self {
        let [alpha, red, green, blue] = argb.to_be_bytes();
        Self::from_rgba(red, green, blue, alpha)
    }

    pub fn with_opacity(self, opacity: f32) -> Self {
        let alpha = (self.a() as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self::from_rgba(self.r(), self.g(), self.b(), alpha)
    }

    /// Linear interpolation towards `other`, `t` in `0.0..=1.0`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self([
            mix(self.0[0], other.0[0]),
            mix(self.0[1], other.0[1]),
            mix(self.0[2], other.0[2]),
            mix(self.0[3], other.0[3]),
        ])
    }

    pub const fn b(&self) -> u8 {
        self.0[0]
    }

    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    pub const fn r(&self) -> u8 {
        self.0[2]
    }

    pub const fn a(&self) -> u8 {
        self.0[3]
    }
}

impl AsRef<[u8]> for Bgra {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Shape of a hand, in reference units except `length` and `tail` which are
/// fractions of the dial radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandStyle {
    pub length: f32,
    pub tail: f32,
    pub width: f32,
    pub shadow_offset: f32,
    pub shadow_width: f32,
}

/// Tick radii are insets from the dial radius, in reference units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStyle {
    pub inner_inset: f32,
    pub outer_inset: f32,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    pub bezel_width: f32,
    pub rim_inset: f32,
    pub rim_width: f32,
    pub hour_tick: TickStyle,
    pub minute_tick: TickStyle,
    pub hour_hand: HandStyle,
    pub minute_hand: HandStyle,
    pub second_hand: HandStyle,
    /// Outer, middle and inner radius of the center cap.
    pub cap_radii: [f32; 3],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub name: ThemeName,
    pub backdrop: [Bgra; 2],
    pub face: [Bgra; 2],
    pub dial: [Bgra; 2],
    pub bezel: Bgra,
    pub rim: Bgra,
    pub hour_tick: Bgra,
    pub minute_tick: Bgra,
    pub hand: Bgra,
    pub hand_shadow: Bgra,
    pub accent: Bgra,
    pub card: Bgra,
    pub time_text: Bgra,
    pub date_text: Bgra,
    pub geometry: FaceGeometry,
}

impl Default for Theme {
    fn default() -> Self {
        Self::graphite()
    }
}

impl Theme {
    pub fn graphite() -> Self {
        Self {
            name: ThemeName::Graphite,
            backdrop: [Bgra::from_argb(0xFF1C1C1E), Bgra::from_argb(0xFF0D0D0D)],
            face: [Bgra::from_argb(0xFF2C2C2E), Bgra::from_argb(0xFF1C1C1E)],
            dial: [Bgra::from_argb(0xFF3A3A3C), Bgra::from_argb(0xFF2C2C2E)],
            bezel: Bgra::from_argb(0xFF48484A),
            rim: Bgra::from_argb(0xFF636366),
            hour_tick: Bgra::from_argb(0xFFE5E5E7),
            minute_tick: Bgra::from_argb(0xFF8E8E93),
            hand: Bgra::from_argb(0xFFE5E5E7),
            hand_shadow: Bgra::from_argb(0xFF000000).with_opacity(0.3),
            accent: Bgra::from_argb(0xFFFF453A),
            card: Bgra::from_argb(0xFF1C1C1E).with_opacity(0.8),
            time_text: Bgra::from_argb(0xFFE5E5E7),
            date_text: Bgra::from_argb(0xFF8E8E93),
            geometry: FaceGeometry {
                bezel_width: 4.0,
                rim_inset: 8.0,
                rim_width: 2.0,
                hour_tick: TickStyle {
                    inner_inset: 45.0,
                    outer_inset: 20.0,
                    width: 4.0,
                },
                minute_tick: TickStyle {
                    inner_inset: 30.0,
                    outer_inset: 20.0,
                    width: 1.5,
                },
                hour_hand: HandStyle {
                    length: 0.45,
                    tail: 0.0,
                    width: 8.0,
                    shadow_offset: 3.0,
                    shadow_width: 10.0,
                },
                minute_hand: HandStyle {
                    length: 0.65,
                    tail: 0.0,
                    width: 4.0,
                    shadow_offset: 2.0,
                    shadow_width: 6.0,
                },
                second_hand: HandStyle {
                    length: 0.75,
                    tail: 0.2,
                    width: 2.0,
                    shadow_offset: 0.0,
                    shadow_width: 0.0,
                },
                cap_radii: [16.0, 8.0, 4.0],
            },
        }
    }

    // Catppuccin Mocha
    pub fn mocha() -> Self {
        Self {
            name: ThemeName::Mocha,
            backdrop: [
                Bgra::from_rgba(30, 30, 46, 230),
                Bgra::from_rgba(17, 17, 27, 230),
            ],
            face: [Bgra::from_rgba(49, 50, 68, 255), Bgra::from_rgba(30, 30, 46, 255)],
            dial: [Bgra::from_rgba(69, 71, 90, 255), Bgra::from_rgba(49, 50, 68, 255)],
            bezel: Bgra::from_rgba(88, 91, 112, 255),
            rim: Bgra::from_rgba(108, 112, 134, 255),
            hour_tick: Bgra::from_rgba(205, 214, 244, 255),
            minute_tick: Bgra::from_rgba(127, 132, 156, 255),
            hand: Bgra::from_rgba(203, 166, 247, 255),
            hand_shadow: Bgra::from_rgba(17, 17, 27, 255).with_opacity(0.4),
            accent: Bgra::from_rgba(180, 190, 254, 255),
            card: Bgra::from_rgba(30, 30, 46, 210),
            time_text: Bgra::from_rgba(205, 214, 244, 255),
            date_text: Bgra::from_rgba(166, 173, 200, 255),
            geometry: FaceGeometry {
                bezel_width: 3.0,
                rim_inset: 6.0,
                rim_width: 1.5,
                hour_tick: TickStyle {
                    inner_inset: 40.0,
                    outer_inset: 18.0,
                    width: 5.0,
                },
                minute_tick: TickStyle {
                    inner_inset: 26.0,
                    outer_inset: 18.0,
                    width: 2.0,
                },
                hour_hand: HandStyle {
                    length: 0.5,
                    tail: 0.0,
                    width: 9.0,
                    shadow_offset: 2.0,
                    shadow_width: 11.0,
                },
                minute_hand: HandStyle {
                    length: 0.7,
                    tail: 0.0,
                    width: 5.0,
                    shadow_offset: 2.0,
                    shadow_width: 7.0,
                },
                second_hand: HandStyle {
                    length: 0.8,
                    tail: 0.18,
                    width: 2.0,
                    shadow_offset: 0.0,
                    shadow_width: 0.0,
                },
                cap_radii: [14.0, 7.0, 3.0],
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ThemeName {
    #[default]
    Graphite,
    Mocha,
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Graphite => Self::graphite(),
            ThemeName::Mocha => Self::mocha(),
        }
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "graphite" => Ok(Self::Graphite),
            "mocha" => Ok(Self::Mocha),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Graphite => write!(f, "graphite"),
            Self::Mocha => write!(f, "mocha"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_literals_are_stored_as_bgra() {
        let red = Bgra::from_argb(0xFFFF453A);
        assert_eq!(red.as_ref(), &[0x3A, 0x45, 0xFF, 0xFF]);
        assert_eq!((red.r(), red.g(), red.b(), red.a()), (0xFF, 0x45, 0x3A, 0xFF));
    }

    #[test]
    fn opacity_scales_alpha_only() {
        let shadow = Bgra::from_argb(0xFF000000).with_opacity(0.3);
        assert_eq!(shadow, Bgra::from_rgba(0, 0, 0, 77));
    }

    #[test]
    fn lerp_hits_both_ends() {
        let a = Bgra::from_rgba(0, 100, 200, 255);
        let b = Bgra::from_rgba(100, 0, 0, 55);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Bgra::from_rgba(50, 50, 100, 155));
    }

    #[test]
    fn theme_names_round_trip() {
        for name in [ThemeName::Graphite, ThemeName::Mocha] {
            assert_eq!(name.to_string().parse::<ThemeName>(), Ok(name));
            assert_eq!(Theme::from(name).name, name);
        }
        assert!("solarized".parse::<ThemeName>().is_err());
    }

    #[test]
    fn themes_differ_in_palette_and_geometry() {
        let (graphite, mocha) = (Theme::graphite(), Theme::mocha());
        assert_ne!(graphite.hand, mocha.hand);
        assert_ne!(graphite.geometry, mocha.geometry);
    }
}
