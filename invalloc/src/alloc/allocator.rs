use std::time::Instant;

use itertools::Itertools;
use log::{debug, info};
use thousands::Separable;

use crate::alloc::Backlog;
use crate::entities::{Order, Shipment, Solution, Warehouse};
use crate::error::AllocError;
use crate::io::ext_repr::{ExtOrder, ExtWarehouse};
use crate::io::import::{import_order, import_warehouses};
use crate::util::assertions;
use crate::util::{AllocConfig, EmptyShipmentPolicy};

/// Greedy allocator: fulfills an order from a list of warehouses sorted by shipping cost.
///
/// Every warehouse is drained of all outstanding items it has in stock before the
/// next one is consulted. Choices are never revisited. If the order cannot be
/// completely fulfilled by the entire offer, the result is an empty [`Solution`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Allocator {
    pub config: AllocConfig,
}

impl Allocator {
    pub fn new(config: AllocConfig) -> Self {
        Allocator { config }
    }

    /// Validates the external order and warehouse offer and allocates the order.
    ///
    /// All quantities are validated before anything is allocated: a negative or
    /// non-integer quantity anywhere in the input results in
    /// [`AllocError::InvalidQuantity`] and no solution at all.
    pub fn solve(
        &self,
        ext_order: &ExtOrder,
        ext_warehouses: &[ExtWarehouse],
    ) -> Result<Solution, AllocError> {
        let order = import_order(ext_order)?;
        let warehouses = import_warehouses(ext_warehouses)?;
        Ok(self.allocate(&order, &warehouses))
    }

    /// Allocates `order` over `warehouses`, consulted in the given order.
    pub fn allocate(&self, order: &Order, warehouses: &[Warehouse]) -> Solution {
        let start = Instant::now();

        if order.is_empty() {
            debug!("[ALLOC] nothing ordered, empty solution");
            return Solution::empty();
        }

        let mut backlog = Backlog::new(order);
        let mut shipments = vec![];

        for warehouse in warehouses {
            if backlog.is_empty() {
                break;
            }
            if let Some(shipment) = self.ship_from(&mut backlog, warehouse) {
                shipments.push(shipment);
            }
        }

        let solution = match backlog.is_empty() {
            true => Solution::new(shipments),
            false => {
                debug!(
                    "[ALLOC] offer of {} warehouse(s) falls short of [{}]",
                    warehouses.len(),
                    backlog
                        .outstanding()
                        .map(|(item, qty)| format!("{item}: {qty}"))
                        .join(", ")
                );
                Solution::empty()
            }
        };

        debug_assert!(assertions::solution_fulfills_order(&solution, order));
        debug_assert!(assertions::shipments_follow_offer(&solution, warehouses));
        debug_assert!(assertions::shipment_lines_valid(
            &solution,
            self.config.empty_shipments
        ));

        match solution.is_empty() {
            false => info!(
                "[ALLOC] {} of {} ordered units shipped by {} shipment(s) in {:.3}ms",
                solution.n_units().separate_with_commas(),
                order.total_qty().separate_with_commas(),
                solution.n_shipments(),
                start.elapsed().as_secs_f64() * 1000.0
            ),
            true => info!(
                "[ALLOC] order of {} units cannot be fulfilled ({:.3}ms)",
                order.total_qty().separate_with_commas(),
                start.elapsed().as_secs_f64() * 1000.0
            ),
        }

        solution
    }

    /// Draws everything `warehouse` can contribute to the `backlog`.
    /// Returns `None` if the warehouse carries none of the outstanding items, or
    /// if it has none of them in stock and empty shipments are suppressed.
    pub fn ship_from(&self, backlog: &mut Backlog, warehouse: &Warehouse) -> Option<Shipment> {
        let overlap = backlog.overlap(warehouse);
        if overlap.is_empty() {
            return None;
        }

        let shipment = draw_shipment(backlog, warehouse, overlap.iter().map(|item| item.as_str()));

        debug!(
            "[ALLOC] warehouse {:?}: {} of {} overlapping item(s) shipped, {} item(s) outstanding",
            warehouse.name,
            shipment.lines.len(),
            overlap.len(),
            backlog.n_items()
        );

        match (shipment.is_empty(), self.config.empty_shipments) {
            (false, _) | (true, EmptyShipmentPolicy::Emit) => Some(shipment),
            (true, EmptyShipmentPolicy::Suppress) => None,
        }
    }
}

/// Draws `items` out of the stock of `warehouse` into a new [`Shipment`].
/// Items without stock are skipped. The order of `items` does not affect the result,
/// since every item is drawn independently of the others.
pub fn draw_shipment<'a>(
    backlog: &mut Backlog,
    warehouse: &Warehouse,
    items: impl IntoIterator<Item = &'a str>,
) -> Shipment {
    let mut shipment = Shipment::new(warehouse.name.as_str());
    for item in items {
        match warehouse.stock(item) {
            None | Some(0) => continue,
            Some(stock) => {
                let drawn = backlog.draw(item, stock);
                shipment.add(item, drawn);
            }
        }
    }
    shipment
}
