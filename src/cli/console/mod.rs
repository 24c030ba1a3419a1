//! Line-oriented console over the race controller
//!
//! Reads one command per line, runs it, and prints either the result message
//! or the error message. Stops at `End` or end of input.

mod command;

pub use command::{CommandError, ConsoleCommand};

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::debug;

use crate::config::{ConsoleConfig, OutputFormat};
use crate::domain::{DomainError, RaceStandings};
use crate::infrastructure::services::Controller;

/// One printed result in JSON output mode
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum ConsoleResponse {
    Ok {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        standings: Option<RaceStandings>,
    },
    Error {
        kind: &'static str,
        message: String,
    },
}

impl ConsoleResponse {
    fn text(&self) -> &str {
        match self {
            Self::Ok { message, .. } | Self::Error { message, .. } => message,
        }
    }
}

impl From<DomainError> for ConsoleResponse {
    fn from(err: DomainError) -> Self {
        Self::Error {
            kind: err.kind(),
            message: err.message().to_string(),
        }
    }
}

impl From<CommandError> for ConsoleResponse {
    fn from(err: CommandError) -> Self {
        Self::Error {
            kind: "parse",
            message: err.to_string(),
        }
    }
}

/// Console engine
#[derive(Debug)]
pub struct Console {
    controller: Controller,
    output: OutputFormat,
    prompt: Option<String>,
}

impl Console {
    pub fn new(controller: Controller, config: &ConsoleConfig) -> Self {
        Self {
            controller,
            output: config.output,
            prompt: config.prompt.clone(),
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Process commands from `input` until `End` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        let mut lines = input.lines();

        loop {
            if let Some(prompt) = &self.prompt {
                write!(out, "{}", prompt)?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            let response = match ConsoleCommand::parse(&line) {
                Ok(None) => continue,
                Ok(Some(ConsoleCommand::End)) => break,
                Ok(Some(command)) => self.execute(command),
                Err(err) => err.into(),
            };

            self.write_response(out, &response)?;
        }

        out.flush()?;
        Ok(())
    }

    fn execute(&mut self, command: ConsoleCommand) -> ConsoleResponse {
        debug!(command = ?command, "Executing command");

        let result = match command {
            ConsoleCommand::CreateDriver { name } => self.controller.create_driver(&name),
            ConsoleCommand::CreateCar {
                car_type,
                model,
                horse_power,
            } => self.controller.create_car(&car_type, &model, horse_power),
            ConsoleCommand::AddCarToDriver {
                driver_name,
                car_model,
            } => self.controller.add_car_to_driver(&driver_name, &car_model),
            ConsoleCommand::AddDriverToRace {
                race_name,
                driver_name,
            } => self.controller.add_driver_to_race(&race_name, &driver_name),
            ConsoleCommand::CreateRace { name, laps } => self.controller.create_race(&name, laps),
            ConsoleCommand::StartRace { race_name } => {
                return match self.controller.start_race_standings(&race_name) {
                    Ok(standings) => ConsoleResponse::Ok {
                        message: standings.to_string(),
                        standings: Some(standings),
                    },
                    Err(err) => err.into(),
                };
            }
            ConsoleCommand::End => return ConsoleResponse::Ok {
                message: String::new(),
                standings: None,
            },
        };

        match result {
            Ok(message) => ConsoleResponse::Ok {
                message,
                standings: None,
            },
            Err(err) => err.into(),
        }
    }

    fn write_response<W: Write>(&self, out: &mut W, response: &ConsoleResponse) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Text => writeln!(out, "{}", response.text())?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(response)?)?,
        }

        Ok(())
    }
}
