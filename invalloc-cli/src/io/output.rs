use invalloc::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::InvallocConfig;

/// Everything written to the solution file of a batch run
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BatchOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    /// One result per order, in the same order as the orders of the instance
    pub results: Vec<ExtOrderResult>,
    pub config: InvallocConfig,
    /// Time it took to allocate all orders, in milliseconds
    pub run_time_ms: u64,
}

/// Outcome of a single order of the batch
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtOrderResult {
    pub order_id: String,
    #[serde(flatten)]
    pub outcome: ExtOrderOutcome,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtOrderOutcome {
    /// The order is completely covered by the shipments (no shipments if nothing was ordered)
    Fulfilled { solution: ExtSolution },
    /// The warehouses cannot cover the order
    Unfulfillable,
    /// The order contains an invalid quantity
    Invalid { error: String },
}
