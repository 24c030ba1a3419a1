//! Race controller - every console use case over the three repositories

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::race::RaceStandings;
use crate::domain::{Car, CarKind, DomainError, Driver, Race, Repository};
use crate::infrastructure::storage::{CarRepository, DriverRepository, RaceRepository};

/// Drivers that must exist before any race can start
pub const MIN_PARTICIPANTS: usize = 3;

/// Orchestrates drivers, cars and races
///
/// Each use case validates first and mutates once, so a failed call leaves
/// every repository untouched.
#[derive(Debug, Default)]
pub struct Controller<C = CarRepository, D = DriverRepository, R = RaceRepository>
where
    C: Repository<Arc<Car>>,
    D: Repository<Driver>,
    R: Repository<Race>,
{
    cars: C,
    drivers: D,
    races: R,
}

impl Controller {
    /// Create a controller over empty in-memory repositories
    pub fn in_memory() -> Self {
        Self::new(
            CarRepository::new(),
            DriverRepository::new(),
            RaceRepository::new(),
        )
    }
}

impl<C, D, R> Controller<C, D, R>
where
    C: Repository<Arc<Car>>,
    D: Repository<Driver>,
    R: Repository<Race>,
{
    /// Create a controller over the given repositories
    pub fn new(cars: C, drivers: D, races: R) -> Self {
        Self {
            cars,
            drivers,
            races,
        }
    }

    pub fn cars(&self) -> &C {
        &self.cars
    }

    pub fn drivers(&self) -> &D {
        &self.drivers
    }

    pub fn races(&self) -> &R {
        &self.races
    }

    /// Create a driver
    pub fn create_driver(&mut self, name: &str) -> Result<String, DomainError> {
        let driver = Driver::new(name)?;

        if self.drivers.exists(driver.name()) {
            return Err(DomainError::already_exists(format!(
                "Driver {} is already created.",
                name
            )));
        }

        self.drivers.add(driver);
        info!(driver = %name, "Driver created");

        Ok(format!("Driver {} is created.", name))
    }

    /// Create a car; any type tag other than `Muscle` builds a sports car
    pub fn create_car(
        &mut self,
        car_type: &str,
        model: &str,
        horse_power: i32,
    ) -> Result<String, DomainError> {
        let kind = CarKind::from_tag(car_type).unwrap_or_else(|| {
            warn!(car_type = %car_type, "Unknown car type, defaulting to sports car");
            CarKind::Sports
        });

        let car = Car::new(kind, model, horse_power)?;

        if self.cars.exists(car.model()) {
            return Err(DomainError::already_exists(format!(
                "Car {} is already created.",
                model
            )));
        }

        self.cars.add(Arc::new(car));
        info!(model = %model, kind = %kind, horse_power, "Car created");

        Ok(format!("{} {} is created.", kind.type_name(), model))
    }

    /// Assign an existing car to an existing driver
    pub fn add_car_to_driver(
        &mut self,
        driver_name: &str,
        car_model: &str,
    ) -> Result<String, DomainError> {
        if !self.drivers.exists(driver_name) {
            return Err(driver_not_found(driver_name));
        }

        let car = self
            .cars
            .get_by_name(car_model)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("Car {} could not be found.", car_model)))?;

        let driver = self
            .drivers
            .get_by_name_mut(driver_name)
            .ok_or_else(|| driver_not_found(driver_name))?;
        driver.add_car(Some(car))?;

        info!(driver = %driver_name, model = %car_model, "Car assigned to driver");

        Ok(format!("Driver {} received car {}.", driver_name, car_model))
    }

    /// Register a driver into a race roster
    ///
    /// Neither eligibility nor prior registration is checked.
    pub fn add_driver_to_race(
        &mut self,
        race_name: &str,
        driver_name: &str,
    ) -> Result<String, DomainError> {
        if !self.races.exists(race_name) {
            return Err(race_not_found(race_name));
        }

        if !self.drivers.exists(driver_name) {
            return Err(driver_not_found(driver_name));
        }

        let race = self
            .races
            .get_by_name_mut(race_name)
            .ok_or_else(|| race_not_found(race_name))?;
        race.add_driver(driver_name);

        info!(race = %race_name, driver = %driver_name, "Driver added to race");

        Ok(format!("Driver {} added in {} race.", driver_name, race_name))
    }

    /// Create a race
    pub fn create_race(&mut self, name: &str, laps: i32) -> Result<String, DomainError> {
        if self.races.exists(name) {
            return Err(DomainError::already_exists(format!(
                "Race {} is already created.",
                name
            )));
        }

        let race = Race::new(name, laps)?;
        self.races.add(race);
        info!(race = %name, laps, "Race created");

        Ok(format!("Race {} is created.", name))
    }

    /// Start a race and announce the podium, one place per line
    pub fn start_race(&mut self, race_name: &str) -> Result<String, DomainError> {
        self.start_race_standings(race_name)
            .map(|standings| standings.to_string())
    }

    /// Start a race and return the ranked podium
    ///
    /// Every driver known to the controller is scored, not only the race's
    /// roster, and the participant minimum is checked against that population.
    pub fn start_race_standings(&mut self, race_name: &str) -> Result<RaceStandings, DomainError> {
        let race = self
            .races
            .get_by_name(race_name)
            .ok_or_else(|| race_not_found(race_name))?;

        if self.drivers.len() < MIN_PARTICIPANTS {
            return Err(DomainError::invalid_state(format!(
                "Race {} cannot start with less than {} participants.",
                race_name, MIN_PARTICIPANTS
            )));
        }

        let laps = race.laps();
        let scores = self
            .drivers
            .get_all()
            .iter()
            .map(|driver| {
                let car = driver.car().ok_or_else(|| {
                    DomainError::invalid_state(format!(
                        "Driver {} could not participate in race.",
                        driver.name()
                    ))
                })?;
                let points = car.calculate_race_points(laps);
                debug!(driver = %driver.name(), model = %car.model(), points, "Scored driver");

                Ok::<_, DomainError>((driver.name().to_string(), points))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let standings = RaceStandings::rank(race_name, scores);

        if let Some(winner) = standings.winner() {
            if let Some(driver) = self.drivers.get_by_name_mut(&winner.driver) {
                driver.win_race();
            }
            info!(race = %race_name, winner = %winner.driver, "Race finished");
        }

        Ok(standings)
    }
}

fn driver_not_found(name: &str) -> DomainError {
    DomainError::not_found(format!("Driver {} could not be found.", name))
}

fn race_not_found(name: &str) -> DomainError {
    DomainError::not_found(format!("Race {} could not be found.", name))
}
