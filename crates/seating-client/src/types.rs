// crates/seating-client/src/types.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use seating_core::{ChartLayout, Roster, SeatingEngine};
use serde::{Deserialize, Serialize};

/// Passenger list of the reference trip.
pub const DEFAULT_ROSTER: [&str; 46] = [
    "Said Lopez", "Manuel Alcaraz", "Alondra Tapia", "Danna Tapia", "Emiliano",
    "Vanessa", "Juan Armando Cervantes", "Nardo Cervantes", "Isaac Cervantes",
    "Fernando Villaseñor", "Darney Vázquez", "Guadalupe Gallegos", "Zamara Cervantes",
    "Arisbeth Cervantes", "Esteban Muñoz", "Tomas", "Adriana", "Samantha", "Ethan",
    "Omar", "César", "Jonathan", "Rod", "Joel García", "David", "Leonardo", "Jocelyn",
    "Nathan Marquez", "Diego De León", "Mireya Leyva", "Josué Blas", "Diana Paola",
    "Ulises López", "Edgar Martínez", "Perla Carrillo", "Diana Perez", "Fernando Lopez",
    "Lesly Vaca", "Montserrat Grana", "Fernanda Hernandez", "Ambar Scarleth Martínez",
    "Carlos Yepez", "Alfonso Cortés", "Diego Renteria", "Maestro Esli Castellanos", "Santi",
];

/// Configuration for the seating client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub title: String,
    pub total_seats: u32,
    pub seats_per_side: u32,
    /// Where `p` writes the printable chart.
    pub chart_path: PathBuf,
    pub roster: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            title: "Bus Manager".to_string(),
            total_seats: 46,
            seats_per_side: 2,
            chart_path: PathBuf::from("seating-chart.txt"),
            roster: DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ClientConfig {
    /// Read a TOML config file. Missing keys fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn layout(&self) -> ChartLayout {
        ChartLayout::new(self.seats_per_side)
    }

    /// Build a fresh engine for this trip.
    pub fn build_engine(&self, seed: Option<u64>) -> Result<SeatingEngine> {
        let roster = Roster::new(&self.roster).context("invalid roster")?;
        let engine = match seed {
            Some(seed) => SeatingEngine::with_seed(roster, self.total_seats, seed),
            None => SeatingEngine::new(roster, self.total_seats),
        }
        .context("invalid seat configuration")?;
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_the_reference_trip() {
        let config = ClientConfig::default();
        assert_eq!(config.total_seats, 46);
        assert_eq!(config.roster.len(), 46);

        let engine = config.build_engine(Some(1)).unwrap();
        assert_eq!(engine.waitlist().len(), 46);
        assert_eq!(config.layout().rows(config.total_seats).len(), 12);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            title = "Field trip"
            total_seats = 12
            roster = ["Ana", "Beto"]
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Field trip");
        assert_eq!(config.total_seats, 12);
        assert_eq!(config.seats_per_side, 2);
        assert_eq!(config.roster, vec!["Ana", "Beto"]);
        assert_eq!(config.chart_path, PathBuf::from("seating-chart.txt"));
    }

    #[test]
    fn bad_roster_is_reported() {
        let config = ClientConfig {
            roster: vec!["Ana".into(), "Ana".into()],
            ..ClientConfig::default()
        };
        let err = config.build_engine(None).unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate passenger name in roster: Ana"));
    }

    #[test]
    fn zero_seats_is_reported() {
        let config = ClientConfig {
            total_seats: 0,
            ..ClientConfig::default()
        };
        assert!(config.build_engine(None).is_err());
    }
}
