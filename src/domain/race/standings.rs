//! Race standings

use serde::Serialize;

/// Number of places announced after a race
pub const PODIUM_SIZE: usize = 3;

/// A driver's finishing place
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub position: usize,
    pub driver: String,
    pub points: f64,
}

/// Top finishers of a race, best first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceStandings {
    pub race: String,
    pub placements: Vec<Placement>,
}

impl RaceStandings {
    /// Rank scored drivers by points, highest first, and keep the podium
    ///
    /// The sort is stable, so drivers with equal points keep their input order.
    pub fn rank(race: impl Into<String>, scores: Vec<(String, f64)>) -> Self {
        let mut scores = scores;
        scores.sort_by(|a, b| b.1.total_cmp(&a.1));

        let placements = scores
            .into_iter()
            .take(PODIUM_SIZE)
            .enumerate()
            .map(|(i, (driver, points))| Placement {
                position: i + 1,
                driver,
                points,
            })
            .collect();

        Self {
            race: race.into(),
            placements,
        }
    }

    pub fn winner(&self) -> Option<&Placement> {
        self.placements.first()
    }
}

impl std::fmt::Display for RaceStandings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, placement) in self.placements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            match placement.position {
                1 => write!(f, "Driver {} wins {} race.", placement.driver, self.race)?,
                2 => write!(
                    f,
                    "Driver {} is second in {} race.",
                    placement.driver, self.race
                )?,
                3 => write!(
                    f,
                    "Driver {} is third in {} race.",
                    placement.driver, self.race
                )?,
                n => write!(
                    f,
                    "Driver {} is number {} in {} race.",
                    placement.driver, n, self.race
                )?,
            }
        }

        Ok(())
    }
}
