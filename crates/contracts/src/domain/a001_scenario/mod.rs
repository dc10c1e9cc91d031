pub mod aggregate;

pub use aggregate::{
    ScenarioCreate, ScenarioDetail, ScenarioParameters, ScenarioStatus, ScenarioSummary,
    ScenarioUpdate,
};
