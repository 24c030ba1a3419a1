//! Text command parsing

use thiserror::Error;

/// Errors raised while parsing a command line
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("{command} expects {expected} argument(s), got {actual}")]
    Arity {
        command: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid number for {argument}: {value}")]
    InvalidNumber {
        argument: &'static str,
        value: String,
    },
}

/// One console command, as read from a line of input
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    CreateDriver {
        name: String,
    },
    CreateCar {
        car_type: String,
        model: String,
        horse_power: i32,
    },
    AddCarToDriver {
        driver_name: String,
        car_model: String,
    },
    AddDriverToRace {
        race_name: String,
        driver_name: String,
    },
    CreateRace {
        name: String,
        laps: i32,
    },
    StartRace {
        race_name: String,
    },
    End,
}

impl ConsoleCommand {
    /// Parse a whitespace-separated line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match name {
            "CreateDriver" => {
                let [driver] = expect_args::<1>("CreateDriver", &args)?;
                Self::CreateDriver {
                    name: driver.to_string(),
                }
            }
            "CreateCar" => {
                let [car_type, model, horse_power] = expect_args::<3>("CreateCar", &args)?;
                Self::CreateCar {
                    car_type: car_type.to_string(),
                    model: model.to_string(),
                    horse_power: parse_number("horsePower", horse_power)?,
                }
            }
            "AddCarToDriver" => {
                let [driver_name, car_model] = expect_args::<2>("AddCarToDriver", &args)?;
                Self::AddCarToDriver {
                    driver_name: driver_name.to_string(),
                    car_model: car_model.to_string(),
                }
            }
            "AddDriverToRace" => {
                let [race_name, driver_name] = expect_args::<2>("AddDriverToRace", &args)?;
                Self::AddDriverToRace {
                    race_name: race_name.to_string(),
                    driver_name: driver_name.to_string(),
                }
            }
            "CreateRace" => {
                let [race, laps] = expect_args::<2>("CreateRace", &args)?;
                Self::CreateRace {
                    name: race.to_string(),
                    laps: parse_number("laps", laps)?,
                }
            }
            "StartRace" => {
                let [race_name] = expect_args::<1>("StartRace", &args)?;
                Self::StartRace {
                    race_name: race_name.to_string(),
                }
            }
            "End" => Self::End,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn expect_args<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::Arity {
        command,
        expected: N,
        actual: args.len(),
    })
}

fn parse_number(argument: &'static str, value: &str) -> Result<i32, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        argument,
        value: value.to_string(),
    })
}
