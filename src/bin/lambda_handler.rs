//! AWS Lambda handler for running projections
//!
//! Accepts simulation parameters as JSON and returns the projected
//! trajectory, optionally alongside the other two scenarios for comparison.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use club_invest_projection::{
    params::Scenario, InvalidParameters, ScenarioRunner, SimulationParams, SimulationResult,
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Input for one projection request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    #[serde(flatten)]
    pub params: SimulationParams,

    /// Also project the two other scenarios for the chosen profile
    #[serde(default)]
    pub compare_scenarios: bool,
}

/// Response payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse {
    pub result: SimulationResult,

    /// Pessimiste/moyen/optimiste results when comparison was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<Vec<SimulationResult>>,

    pub execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(
            serde_json::json!({ "error": message }).to_string(),
        ))
        .unwrap()
}

fn json_response(body: &SimulationResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: SimulationRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("rejecting malformed request: {}", e);
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    log::info!(
        "projection request: {:?}, compare_scenarios={}",
        request.params,
        request.compare_scenarios
    );

    let runner = ScenarioRunner::new();

    let result = match runner.run(&request.params) {
        Ok(result) => result,
        Err(e) => {
            log::warn!("rejecting invalid parameters: {}", e);
            return Ok(error_response(400, &e.to_string()));
        }
    };

    let scenarios = if request.compare_scenarios {
        let projected: Result<Vec<SimulationResult>, InvalidParameters> = Scenario::ALL
            .par_iter()
            .map(|&scenario| {
                let params = SimulationParams {
                    scenario,
                    ..request.params.clone()
                };
                runner.run(&params)
            })
            .collect();
        match projected {
            Ok(results) => Some(results),
            Err(e) => return Ok(error_response(400, &e.to_string())),
        }
    } else {
        None
    };

    let execution_time_ms = start.elapsed().as_millis() as u64;

    Ok(json_response(&SimulationResponse {
        result,
        scenarios,
        execution_time_ms,
    }))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
