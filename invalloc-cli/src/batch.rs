use std::time::Instant;

use anyhow::{Context, Result};
use invalloc::Allocator;
use invalloc::AllocError;
use invalloc::entities::{Solution, Warehouse};
use invalloc::io::export::export_solution;
use invalloc::io::ext_repr::{ExtInstance, ExtOrderRequest, ExtWarehouse};
use invalloc::io::import::{import_order, import_warehouses};
use invalloc::util::AllocConfig;
use log::{info, warn};
use rayon::prelude::*;
use thousands::Separable;

use crate::config::InvallocConfig;
use crate::io::output::{BatchOutput, ExtOrderOutcome, ExtOrderResult};

/// Allocates many orders over a single warehouse offer.
/// The offer is imported once and shared (read-only) by all orders, which are allocated in parallel.
pub struct BatchAllocator {
    pub allocator: Allocator,
    pub warehouses: Vec<Warehouse>,
}

/// Outcome of allocating a single order
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    Fulfilled(Solution),
    Unfulfillable,
    Invalid(AllocError),
}

impl BatchAllocator {
    /// Imports the warehouse offer. Fails if any warehouse holds an invalid quantity.
    pub fn new(ext_warehouses: &[ExtWarehouse], config: AllocConfig) -> Result<Self, AllocError> {
        let warehouses = import_warehouses(ext_warehouses)?;
        Ok(Self {
            allocator: Allocator::new(config),
            warehouses,
        })
    }

    /// Allocates every order independently. The outcomes are in the same order as `orders`.
    pub fn solve(&self, orders: &[ExtOrderRequest]) -> Vec<OrderOutcome> {
        orders.par_iter().map(|req| self.solve_order(req)).collect()
    }

    pub fn solve_order(&self, req: &ExtOrderRequest) -> OrderOutcome {
        let order = match import_order(&req.items) {
            Ok(order) => order,
            Err(err) => {
                warn!("[BATCH] order {:?} rejected: {err}", req.id);
                return OrderOutcome::Invalid(err);
            }
        };

        let solution = self.allocator.allocate(&order, &self.warehouses);
        match solution.is_empty() && !order.is_empty() {
            true => OrderOutcome::Unfulfillable,
            false => OrderOutcome::Fulfilled(solution),
        }
    }
}

impl From<&OrderOutcome> for ExtOrderOutcome {
    fn from(outcome: &OrderOutcome) -> Self {
        match outcome {
            OrderOutcome::Fulfilled(solution) => ExtOrderOutcome::Fulfilled {
                solution: export_solution(solution),
            },
            OrderOutcome::Unfulfillable => ExtOrderOutcome::Unfulfillable,
            OrderOutcome::Invalid(err) => ExtOrderOutcome::Invalid {
                error: err.to_string(),
            },
        }
    }
}

/// Allocates all orders of an instance and bundles the results together with the instance and config.
pub fn run_instance(ext_instance: ExtInstance, config: InvallocConfig) -> Result<BatchOutput> {
    let start = Instant::now();

    let batch = BatchAllocator::new(&ext_instance.warehouses, config.alloc_config)
        .context("invalid warehouse offer")?;

    info!(
        "[BATCH] allocating {} order(s) of instance {:?} over {} warehouse(s)",
        ext_instance.orders.len().separate_with_commas(),
        ext_instance.name,
        batch.warehouses.len()
    );

    let outcomes = match config.n_threads {
        Some(n_threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .build()
            .context("could not build thread pool")?
            .install(|| batch.solve(&ext_instance.orders)),
        None => batch.solve(&ext_instance.orders),
    };

    let n_fulfilled = outcomes
        .iter()
        .filter(|o| matches!(o, OrderOutcome::Fulfilled(_)))
        .count();
    let n_invalid = outcomes
        .iter()
        .filter(|o| matches!(o, OrderOutcome::Invalid(_)))
        .count();
    info!(
        "[BATCH] finished in {:.3}ms: {} fulfilled, {} unfulfillable, {} invalid",
        start.elapsed().as_secs_f64() * 1000.0,
        n_fulfilled,
        outcomes.len() - n_fulfilled - n_invalid,
        n_invalid,
    );

    let results = ext_instance
        .orders
        .iter()
        .zip(outcomes.iter())
        .map(|(req, outcome)| ExtOrderResult {
            order_id: req.id.clone(),
            outcome: outcome.into(),
        })
        .collect();

    Ok(BatchOutput {
        instance: ext_instance,
        results,
        config,
        run_time_ms: start.elapsed().as_millis() as u64,
    })
}
