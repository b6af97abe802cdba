//! Detail axes - the fixed set of structural detail choices
//!
//! The five axes (button count, lapel, back vent, pocket style, lining) are
//! closed enums: a catalog may narrow which values it offers, but it cannot
//! introduce new ones. No detail value carries a price delta.

use serde::{Deserialize, Serialize};

/// Jacket front button count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ButtonCount {
    One,
    #[default]
    Two,
    Three,
}

impl ButtonCount {
    pub fn all() -> &'static [ButtonCount] {
        &[ButtonCount::One, ButtonCount::Two, ButtonCount::Three]
    }

    /// Human label for menus and summaries
    pub fn label(&self) -> &'static str {
        match self {
            ButtonCount::One => "One button",
            ButtonCount::Two => "Two button",
            ButtonCount::Three => "Three button",
        }
    }
}

impl std::fmt::Display for ButtonCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ButtonCount::One => write!(f, "one"),
            ButtonCount::Two => write!(f, "two"),
            ButtonCount::Three => write!(f, "three"),
        }
    }
}

impl std::str::FromStr for ButtonCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "one" | "1" => Ok(ButtonCount::One),
            "two" | "2" => Ok(ButtonCount::Two),
            "three" | "3" => Ok(ButtonCount::Three),
            _ => Err(format!(
                "Invalid button count: {}. Use one, two, or three",
                s
            )),
        }
    }
}

/// Lapel shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Lapel {
    #[default]
    Notch,
    Peak,
    Shawl,
}

impl Lapel {
    pub fn all() -> &'static [Lapel] {
        &[Lapel::Notch, Lapel::Peak, Lapel::Shawl]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Lapel::Notch => "Notch lapel",
            Lapel::Peak => "Peak lapel",
            Lapel::Shawl => "Shawl collar",
        }
    }
}

impl std::fmt::Display for Lapel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lapel::Notch => write!(f, "notch"),
            Lapel::Peak => write!(f, "peak"),
            Lapel::Shawl => write!(f, "shawl"),
        }
    }
}

impl std::str::FromStr for Lapel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notch" => Ok(Lapel::Notch),
            "peak" => Ok(Lapel::Peak),
            "shawl" => Ok(Lapel::Shawl),
            _ => Err(format!("Invalid lapel: {}. Use notch, peak, or shawl", s)),
        }
    }
}

/// Jacket back vent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Vent {
    #[default]
    Center,
    Side,
    None,
}

impl Vent {
    pub fn all() -> &'static [Vent] {
        &[Vent::Center, Vent::Side, Vent::None]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Vent::Center => "Center vent",
            Vent::Side => "Side vents",
            Vent::None => "No vent",
        }
    }
}

impl std::fmt::Display for Vent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vent::Center => write!(f, "center"),
            Vent::Side => write!(f, "side"),
            Vent::None => write!(f, "none"),
        }
    }
}

impl std::str::FromStr for Vent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "center" => Ok(Vent::Center),
            "side" => Ok(Vent::Side),
            "none" => Ok(Vent::None),
            _ => Err(format!("Invalid vent: {}. Use center, side, or none", s)),
        }
    }
}

/// Pocket style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Pocket {
    #[default]
    Flap,
    Jetted,
    Patch,
}

impl Pocket {
    pub fn all() -> &'static [Pocket] {
        &[Pocket::Flap, Pocket::Jetted, Pocket::Patch]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Pocket::Flap => "Flap pockets",
            Pocket::Jetted => "Jetted pockets",
            Pocket::Patch => "Patch pockets",
        }
    }
}

impl std::fmt::Display for Pocket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pocket::Flap => write!(f, "flap"),
            Pocket::Jetted => write!(f, "jetted"),
            Pocket::Patch => write!(f, "patch"),
        }
    }
}

impl std::str::FromStr for Pocket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flap" => Ok(Pocket::Flap),
            "jetted" | "besom" => Ok(Pocket::Jetted),
            "patch" => Ok(Pocket::Patch),
            _ => Err(format!(
                "Invalid pocket style: {}. Use flap, jetted, or patch",
                s
            )),
        }
    }
}

/// Jacket lining
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Lining {
    #[default]
    Full,
    Half,
    Unlined,
}

impl Lining {
    pub fn all() -> &'static [Lining] {
        &[Lining::Full, Lining::Half, Lining::Unlined]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Lining::Full => "Fully lined",
            Lining::Half => "Half lined",
            Lining::Unlined => "Unlined",
        }
    }
}

impl std::fmt::Display for Lining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lining::Full => write!(f, "full"),
            Lining::Half => write!(f, "half"),
            Lining::Unlined => write!(f, "unlined"),
        }
    }
}

impl std::str::FromStr for Lining {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Lining::Full),
            "half" => Ok(Lining::Half),
            "unlined" => Ok(Lining::Unlined),
            _ => Err(format!(
                "Invalid lining: {}. Use full, half, or unlined",
                s
            )),
        }
    }
}

/// Names one detail axis, for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAxis {
    Buttons,
    Lapel,
    Vent,
    Pocket,
    Lining,
}

impl DetailAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailAxis::Buttons => "buttons",
            DetailAxis::Lapel => "lapel",
            DetailAxis::Vent => "vent",
            DetailAxis::Pocket => "pocket",
            DetailAxis::Lining => "lining",
        }
    }
}

impl std::fmt::Display for DetailAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One offered value on a detail axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailOption {
    /// Value id; must parse as the axis's enum
    pub id: String,

    /// Display name
    pub name: String,
}

impl DetailOption {
    fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The offered values per detail axis
///
/// Fixed shape: one list per axis. A catalog may narrow an axis to a
/// subset; an omitted axis offers every value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailOptions {
    pub buttons: Vec<DetailOption>,
    pub lapels: Vec<DetailOption>,
    pub vents: Vec<DetailOption>,
    pub pockets: Vec<DetailOption>,
    pub linings: Vec<DetailOption>,
}

impl Default for DetailOptions {
    fn default() -> Self {
        Self {
            buttons: ButtonCount::all()
                .iter()
                .map(|v| DetailOption::new(v.to_string(), v.label()))
                .collect(),
            lapels: Lapel::all()
                .iter()
                .map(|v| DetailOption::new(v.to_string(), v.label()))
                .collect(),
            vents: Vent::all()
                .iter()
                .map(|v| DetailOption::new(v.to_string(), v.label()))
                .collect(),
            pockets: Pocket::all()
                .iter()
                .map(|v| DetailOption::new(v.to_string(), v.label()))
                .collect(),
            linings: Lining::all()
                .iter()
                .map(|v| DetailOption::new(v.to_string(), v.label()))
                .collect(),
        }
    }
}

impl DetailOptions {
    /// Ids that do not parse as their axis's enum
    pub fn unknown_ids(&self) -> Vec<(DetailAxis, String)> {
        let mut unknown = Vec::new();

        for opt in &self.buttons {
            if opt.id.parse::<ButtonCount>().is_err() {
                unknown.push((DetailAxis::Buttons, opt.id.clone()));
            }
        }
        for opt in &self.lapels {
            if opt.id.parse::<Lapel>().is_err() {
                unknown.push((DetailAxis::Lapel, opt.id.clone()));
            }
        }
        for opt in &self.vents {
            if opt.id.parse::<Vent>().is_err() {
                unknown.push((DetailAxis::Vent, opt.id.clone()));
            }
        }
        for opt in &self.pockets {
            if opt.id.parse::<Pocket>().is_err() {
                unknown.push((DetailAxis::Pocket, opt.id.clone()));
            }
        }
        for opt in &self.linings {
            if opt.id.parse::<Lining>().is_err() {
                unknown.push((DetailAxis::Lining, opt.id.clone()));
            }
        }

        unknown
    }

    /// Restore the full value list for any axis a catalog left empty
    pub fn fill_empty_axes(&mut self) {
        let full = DetailOptions::default();
        if self.buttons.is_empty() {
            self.buttons = full.buttons;
        }
        if self.lapels.is_empty() {
            self.lapels = full.lapels;
        }
        if self.vents.is_empty() {
            self.vents = full.vents;
        }
        if self.pockets.is_empty() {
            self.pockets = full.pockets;
        }
        if self.linings.is_empty() {
            self.linings = full.linings;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_always_valid() {
        assert_eq!(ButtonCount::default(), ButtonCount::Two);
        assert_eq!(Lapel::default(), Lapel::Notch);
        assert_eq!(Vent::default(), Vent::Center);
        assert_eq!(Pocket::default(), Pocket::Flap);
        assert_eq!(Lining::default(), Lining::Full);
    }

    #[test]
    fn test_detail_serialization_is_lowercase() {
        let yaml = serde_yml::to_string(&Lapel::Peak).unwrap();
        assert_eq!(yaml.trim(), "peak");
        let yaml = serde_yml::to_string(&ButtonCount::Three).unwrap();
        assert_eq!(yaml.trim(), "three");
    }

    #[test]
    fn test_from_str_accepts_digit_buttons() {
        assert_eq!("2".parse::<ButtonCount>().unwrap(), ButtonCount::Two);
        assert_eq!("besom".parse::<Pocket>().unwrap(), Pocket::Jetted);
    }

    #[test]
    fn test_full_menu_has_every_value() {
        let menu = DetailOptions::default();
        assert_eq!(menu.buttons.len(), 3);
        assert_eq!(menu.lapels.len(), 3);
        assert_eq!(menu.vents.len(), 3);
        assert_eq!(menu.pockets.len(), 3);
        assert_eq!(menu.linings.len(), 3);
        assert!(menu.unknown_ids().is_empty());
    }

    #[test]
    fn test_unknown_ids_reported_per_axis() {
        let mut menu = DetailOptions::default();
        menu.lapels.push(DetailOption::new("mandarin", "Mandarin collar"));
        menu.vents.push(DetailOption::new("double", "Double vent"));

        let unknown = menu.unknown_ids();
        assert_eq!(unknown.len(), 2);
        assert!(unknown.contains(&(DetailAxis::Lapel, "mandarin".to_string())));
        assert!(unknown.contains(&(DetailAxis::Vent, "double".to_string())));
    }

    #[test]
    fn test_fill_empty_axes() {
        let mut menu: DetailOptions = serde_yml::from_str(
            "buttons:\n  - id: two\n    name: Two button\n",
        )
        .unwrap();
        assert!(menu.lapels.is_empty());

        menu.fill_empty_axes();
        assert_eq!(menu.buttons.len(), 1);
        assert_eq!(menu.lapels.len(), 3);
    }
}
