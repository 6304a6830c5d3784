//! Names and versions of the three registry models.

use flow_core::ModelRef;
use serde::{Deserialize, Serialize};

fn default_visitors() -> ModelRef {
    ModelRef::new("traffic_flow_visitors_xgboost_model", 4)
}

fn default_vehicles() -> ModelRef {
    ModelRef::new("traffic_flow_vehicles_xgboost_model", 4)
}

fn default_traffic() -> ModelRef {
    ModelRef::new("traffic_flow_xgboost_model", 7)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelsConfig {
    /// Stage-1 visitors model.
    #[serde(default = "default_visitors")]
    pub visitors: ModelRef,

    /// Stage-1 vehicles model.
    #[serde(default = "default_vehicles")]
    pub vehicles: ModelRef,

    /// Stage-2 traffic flow model.
    #[serde(default = "default_traffic")]
    pub traffic: ModelRef,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            visitors: default_visitors(),
            vehicles: default_vehicles(),
            traffic: default_traffic(),
        }
    }
}
