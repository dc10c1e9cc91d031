use axum::Json;
use serde_json::json;

use contracts::simulation::{SimulationRequest, SimulationResponse};

use crate::shared::analytics;
use crate::shared::simulation::{calculator, projection};

/// POST /api/simulations
///
/// Ad-hoc what-if run: compute, project, annotate, forget. Nothing is
/// persisted, and the engine itself cannot fail, so this handler is
/// infallible.
pub async fn simulate(Json(request): Json<SimulationRequest>) -> Json<SimulationResponse> {
    let results = calculator::compute(
        &request.simulation_type,
        &request.parameters,
        &request.period,
    );
    let evolution_data = projection::evolution(results.revenue_impact, &request.period);
    let store_impact = projection::store_impact();

    let analysis = analytics::sink()
        .analyze(json!({
            "type": "simulation",
            "simulation_type": request.simulation_type,
            "period": request.period,
            "results": results,
        }))
        .await;

    Json(SimulationResponse {
        results,
        evolution_data,
        store_impact,
        analysis,
    })
}
