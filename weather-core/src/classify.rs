//! Bucketing of raw provider readings into human-readable labels.
//!
//! Both label sets are declared in ascending intensity so the derived `Ord`
//! doubles as an intensity rank. The `Unknown*` variants come last and are
//! only reachable through NaN input.

/// Feels-like temperature label, input in °F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemperatureLabel {
    SubFreezing,
    Freezing,
    Cold,
    Moderate,
    Warm,
    Hot,
    ExtremelyHot,
    Unknown,
}

impl TemperatureLabel {
    pub fn from_feels_like(temp: f64) -> Self {
        match temp {
            t if t <= 32.0 => Self::SubFreezing,
            t if t > 32.0 && t <= 40.0 => Self::Freezing,
            t if t > 40.0 && t <= 60.0 => Self::Cold,
            t if t > 60.0 && t <= 75.0 => Self::Moderate,
            t if t > 75.0 && t <= 90.0 => Self::Warm,
            t if t > 90.0 && t < 100.0 => Self::Hot,
            t if t >= 100.0 => Self::ExtremelyHot,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubFreezing => "sub-freezing",
            Self::Freezing => "freezing",
            Self::Cold => "cold",
            Self::Moderate => "moderate",
            Self::Warm => "warm",
            Self::Hot => "hot",
            Self::ExtremelyHot => "extremely hot",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TemperatureLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wind label on the Beaufort scale, input in mph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WindLabel {
    Calm,
    LightAir,
    LightBreeze,
    GentleBreeze,
    ModerateBreeze,
    FreshBreeze,
    StrongBreeze,
    NearGale,
    Gale,
    SevereGale,
    Storm,
    ViolentStorm,
    Hurricane,
    Unknown,
}

impl WindLabel {
    pub fn from_speed(speed: f64) -> Self {
        match speed {
            s if s <= 0.0 => Self::Calm,
            s if s > 0.0 && s < 4.0 => Self::LightAir,
            s if (4.0..8.0).contains(&s) => Self::LightBreeze,
            s if (8.0..13.0).contains(&s) => Self::GentleBreeze,
            s if (13.0..19.0).contains(&s) => Self::ModerateBreeze,
            s if (19.0..25.0).contains(&s) => Self::FreshBreeze,
            s if (25.0..32.0).contains(&s) => Self::StrongBreeze,
            s if (32.0..39.0).contains(&s) => Self::NearGale,
            s if (39.0..47.0).contains(&s) => Self::Gale,
            s if (47.0..55.0).contains(&s) => Self::SevereGale,
            s if (55.0..64.0).contains(&s) => Self::Storm,
            s if (64.0..73.0).contains(&s) => Self::ViolentStorm,
            s if s >= 73.0 => Self::Hurricane,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calm => "calm winds",
            Self::LightAir => "light air",
            Self::LightBreeze => "light breeze",
            Self::GentleBreeze => "gentle breeze",
            Self::ModerateBreeze => "moderate breeze",
            Self::FreshBreeze => "fresh breeze",
            Self::StrongBreeze => "strong breeze",
            Self::NearGale => "near gale winds",
            Self::Gale => "gale winds",
            Self::SevereGale => "severe gale winds",
            Self::Storm => "storm winds",
            Self::ViolentStorm => "violent storm winds",
            Self::Hurricane => "hurricane/tornado winds",
            Self::Unknown => "unknown wind",
        }
    }
}

impl std::fmt::Display for WindLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
