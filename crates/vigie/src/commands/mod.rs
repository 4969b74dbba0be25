pub mod render;

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use guichet_contracts::technician::requests::SetAvailabilityStatusRequest;
use guichet_contracts::technician::responses::{
    AvailabilityStateName, AvailabilityStatusUpdated, TechnicianBoardResponse,
    TechnicianStatsResponse,
};
use guichet_contracts::ManualStatus;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the technician availability board
    Board,
    /// Show performance figures for one technician
    Stats { technician_id: String },
    /// Set the manual availability status of a technician
    SetStatus {
        technician_id: String,
        #[arg(value_enum)]
        status: ManualStatus,
    },
    /// List the availability states with their labels and colors
    States,
}

pub fn handle_command(cli: Cli, client: &Client) -> Result<()> {
    match cli.command {
        Commands::Board => {
            let board: TechnicianBoardResponse = get_json(client, "technicians")?;
            render::board(&board);
        }
        Commands::Stats { technician_id } => {
            let stats: TechnicianStatsResponse =
                get_json(client, &format!("technicians/{technician_id}/stats"))?;
            render::stats(&stats);
        }
        Commands::SetStatus {
            technician_id,
            status,
        } => {
            let request = SetAvailabilityStatusRequest {
                availability_status: status,
            };
            let updated: AvailabilityStatusUpdated = put_json(
                client,
                &format!("technicians/{technician_id}/availability-status"),
                &request,
            )?;
            println!("{} ({})", updated.message, updated.availability_status);
        }
        Commands::States => {
            let states: Vec<AvailabilityStateName> = get_json(client, "availability-states")?;
            render::states(&states);
        }
    }

    Ok(())
}

fn api_url(path: &str) -> Result<Url> {
    let address = dotenvy::var("GUICHET_API_ADDRESS")
        .context("The environment variable GUICHET_API_ADDRESS is not set")?;

    let base = Url::parse(&format!("http://{address}/api/v1/"))
        .context("GUICHET_API_ADDRESS does not form a valid URL")?;

    base.join(path).context("Could not build the request URL")
}

fn get_json<T: DeserializeOwned>(client: &Client, path: &str) -> Result<T> {
    let response = client
        .get(api_url(path)?)
        .send()
        .context("Could not send request")?;

    parse_response(response)
}

fn put_json<T: DeserializeOwned, B: Serialize>(client: &Client, path: &str, body: &B) -> Result<T> {
    let response = client
        .put(api_url(path)?)
        .json(body)
        .send()
        .context("Could not send request")?;

    parse_response(response)
}

fn parse_response<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T> {
    if !response.status().is_success() {
        bail!(
            "{}, {}",
            response.status(),
            response
                .text()
                .context("Could not extract the JSON from the Response")?
        )
    }

    response.json().context("Could not parse the Response body")
}
