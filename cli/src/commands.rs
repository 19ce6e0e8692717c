//! Command-line interface definition and dispatch

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use shared::{
    find_region, AlertRegistration, Crop, GrowthStage, Location, Month, PredictionRequest, Season,
    WaterCrop, WaterRequirementInput, QUICK_SELECT_REGIONS,
};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::output;
use crate::services::{water, AlertService, IdentificationService, PredictionService, WeatherService};

#[derive(Parser, Debug)]
#[command(name = "farmsight")]
#[command(about = "Crop success predictor and plant identifier (simulated)")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Fixed random seed (overrides FARMSIGHT__SIMULATION__SEED)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Skip the simulated analysis delay
    #[arg(long, global = true)]
    pub no_delay: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Predict how well a crop will do at a location and season
    Predict {
        /// Crop name, e.g. "Rice" or "mung-bean"
        #[arg(short, long)]
        crop: String,

        #[command(flatten)]
        location: LocationArgs,

        /// Growing season: Kharif, Rabi or Zaid
        #[arg(short, long)]
        season: String,

        /// Planting month; must belong to the season
        #[arg(short, long)]
        month: String,

        /// Also fetch current weather for the location
        #[arg(long)]
        weather: bool,
    },

    /// Identify the plant in a photo
    Identify {
        /// Image file, or a text file holding a data: URL
        image: PathBuf,
    },

    /// List the crops the predictor knows
    Crops,

    /// List the growing seasons and their planting months
    Seasons,

    /// List the quick-select regions
    Regions,

    /// Estimate daily irrigation need
    Water {
        /// wheat, corn, rice, cotton, sugarcane or soybean
        #[arg(short, long, default_value = "wheat")]
        crop: String,

        /// initial, development, middle or late
        #[arg(short, long, default_value = "initial")]
        stage: String,

        /// Field size in hectares
        #[arg(short, long, default_value_t = 1.0)]
        area: f64,
    },

    /// Show current weather at a location
    Weather {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Register for SMS weather alerts
    Alerts {
        /// Phone number, at least 10 digits
        #[arg(short, long)]
        phone: String,

        /// wheat, corn, rice, cotton, sugarcane or soybean
        #[arg(short, long, default_value = "wheat")]
        crop: String,

        #[command(flatten)]
        location: LocationArgs,
    },
}

/// Where the analysis applies: a preset region, raw coordinates, or India by default
#[derive(Args, Debug, Default, Clone)]
pub struct LocationArgs {
    /// Quick-select region id or label, e.g. "punjab"
    #[arg(short, long, conflicts_with_all = ["lat", "lng"])]
    pub region: Option<String>,

    /// Latitude of a map click
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of a map click
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Display name for the coordinates
    #[arg(long, requires = "lat")]
    pub name: Option<String>,
}

impl LocationArgs {
    pub fn resolve(&self) -> AppResult<Location> {
        if let Some(key) = &self.region {
            return find_region(key)
                .map(|region| region.location())
                .ok_or_else(|| AppError::UnknownRegion(key.clone()));
        }

        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Ok(match &self.name {
                Some(name) => Location::new(lat, lng, name.clone()),
                None => Location::from_coordinates(lat, lng),
            }),
            _ => Ok(Location::default()),
        }
    }
}

/// Build a prediction request from the raw selector values
pub fn build_prediction_request(
    crop: &str,
    location: Location,
    season: &str,
    month: &str,
) -> AppResult<PredictionRequest> {
    let crop: Crop = crop.parse()?;
    let season: Season = season.parse()?;
    let month: Month = month.parse()?;
    Ok(PredictionRequest::new(crop, location, season, month))
}

/// Apply command-line overrides on top of the loaded configuration
pub fn apply_overrides(cli: &Cli, mut config: Config) -> Config {
    if cli.seed.is_some() {
        config.simulation.seed = cli.seed;
    }
    if cli.no_delay {
        config.simulation.prediction_delay_ms = 0;
        config.simulation.identification_delay_ms = 0;
    }
    config
}

/// Run one command and return what should be printed
pub async fn execute(cli: &Cli, config: &Config) -> AppResult<String> {
    match &cli.command {
        Command::Predict {
            crop,
            location,
            season,
            month,
            weather,
        } => {
            let request = build_prediction_request(crop, location.resolve()?, season, month)?;
            let service = PredictionService::new(&config.simulation);

            let weather_report = if *weather {
                fetch_weather_best_effort(config, &request.location).await
            } else {
                None
            };

            let result = service.predict(request).await?;

            if cli.json {
                #[derive(Serialize)]
                struct PredictionOutput<'a> {
                    prediction: &'a shared::PredictionResult,
                    #[serde(skip_serializing_if = "Option::is_none")]
                    weather: Option<&'a crate::external::weather::CurrentWeather>,
                }
                return to_json(&PredictionOutput {
                    prediction: &result,
                    weather: weather_report.as_ref(),
                });
            }

            let mut text = output::render_prediction(&result);
            if let Some(current) = &weather_report {
                text.push_str("\n\nCurrent Weather:\n");
                text.push_str(&output::render_weather(current));
            }
            Ok(text)
        }

        Command::Identify { image } => {
            let image = IdentificationService::load_image(image).await?;
            let service = IdentificationService::new(&config.simulation);
            let result = service.identify(&image).await?;
            if cli.json {
                return to_json(&result);
            }
            Ok(output::render_identification(&result))
        }

        Command::Crops => {
            if cli.json {
                return to_json(&Crop::ALL);
            }
            Ok(output::render_crops())
        }

        Command::Seasons => {
            if cli.json {
                #[derive(Serialize)]
                struct SeasonOutput {
                    season: Season,
                    months: [Month; 4],
                    description: &'static str,
                }
                let seasons: Vec<SeasonOutput> = Season::ALL
                    .into_iter()
                    .map(|season| SeasonOutput {
                        season,
                        months: season.months(),
                        description: season.description(),
                    })
                    .collect();
                return to_json(&seasons);
            }
            Ok(output::render_seasons())
        }

        Command::Regions => {
            if cli.json {
                return to_json(&QUICK_SELECT_REGIONS);
            }
            Ok(output::render_regions(&QUICK_SELECT_REGIONS))
        }

        Command::Water { crop, stage, area } => {
            let input = WaterRequirementInput {
                crop: crop.parse::<WaterCrop>()?,
                growth_stage: stage.parse::<GrowthStage>()?,
                area_hectares: *area,
            };
            let requirement = water::estimate(&input)?;
            if cli.json {
                return to_json(&requirement);
            }
            Ok(output::render_water(&requirement))
        }

        Command::Weather { location } => {
            let location = location.resolve()?;
            let current = WeatherService::new(config.weather.clone())
                .current(&location)
                .await?;
            if cli.json {
                return to_json(&current);
            }
            Ok(output::render_weather(&current))
        }

        Command::Alerts {
            phone,
            crop,
            location,
        } => {
            let location = location.resolve()?;
            let registration =
                AlertRegistration::new(phone.clone(), crop.parse::<WaterCrop>()?, location.display_name);
            let confirmation = AlertService::new().register(&registration)?;
            if cli.json {
                return to_json(&registration);
            }
            Ok(output::render_alert(&registration, &confirmation))
        }
    }
}

/// Weather next to a prediction is decoration; failures are logged and skipped
async fn fetch_weather_best_effort(
    config: &Config,
    location: &Location,
) -> Option<crate::external::weather::CurrentWeather> {
    let service = WeatherService::new(config.weather.clone());
    if !service.is_configured() {
        tracing::warn!("{}", AppError::WeatherApiKeyMissing.user_message());
        return None;
    }
    service.current(location).await.ok()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_predict_with_region() {
        let cli = Cli::try_parse_from([
            "farmsight", "predict", "--crop", "Wheat", "--region", "punjab", "--season", "Rabi",
            "--month", "November", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Predict { crop, location, .. } => {
                assert_eq!(crop, "Wheat");
                assert_eq!(location.resolve().unwrap().display_name, "Punjab, India");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_location_resolution() {
        let clicked = LocationArgs {
            lat: Some(12.5),
            lng: Some(-3.25),
            ..Default::default()
        };
        assert_eq!(clicked.resolve().unwrap().display_name, "Lat: 12.500, Lng: -3.250");

        assert_eq!(LocationArgs::default().resolve().unwrap().display_name, "India");

        let unknown = LocationArgs {
            region: Some("atlantis".to_string()),
            ..Default::default()
        };
        assert!(matches!(unknown.resolve(), Err(AppError::UnknownRegion(_))));
    }

    #[test]
    fn test_build_prediction_request_rejects_unknown_names() {
        assert!(build_prediction_request("Rice", Location::default(), "Kharif", "July").is_ok());
        assert!(build_prediction_request("Tea", Location::default(), "Kharif", "July").is_err());
        assert!(build_prediction_request("Rice", Location::default(), "Winter", "July").is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from(["farmsight", "crops", "--seed", "5", "--no-delay"]).unwrap();
        let config = apply_overrides(&cli, Config::default());
        assert_eq!(config.simulation.seed, Some(5));
        assert_eq!(config.simulation.prediction_delay_ms, 0);
        assert_eq!(config.simulation.identification_delay_ms, 0);
    }
}
