use itertools::Itertools;
use log::error;

use crate::entities::{Order, Shipment, Solution, Warehouse};
use crate::util::EmptyShipmentPolicy;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// An empty solution is always valid. Otherwise every requested unit has to be shipped, no more and no less.
pub fn solution_fulfills_order(solution: &Solution, order: &Order) -> bool {
    if solution.is_empty() || solution.fulfills(order) {
        true
    } else {
        error!(
            "solution ships {:?}, order requests {:?}",
            solution.shipped_qtys(),
            order.items().collect_vec()
        );
        false
    }
}

/// The shipments have to appear in the same order as the warehouses in the offer, every warehouse at most once.
/// Every shipment line has to be covered by the stock of the warehouse it is shipped from.
pub fn shipments_follow_offer(solution: &Solution, warehouses: &[Warehouse]) -> bool {
    let mut offer = warehouses.iter();
    solution.shipments.iter().all(|s| {
        offer
            .find(|w| w.name == s.warehouse && shipment_within_stock(s, w))
            .is_some()
    })
}

/// No shipment line may be zero, only an entire shipment can be empty (and only if the policy allows it).
pub fn shipment_lines_valid(solution: &Solution, policy: EmptyShipmentPolicy) -> bool {
    solution.shipments.iter().all(|s| {
        s.lines.values().all(|qty| *qty > 0)
            && (policy == EmptyShipmentPolicy::Emit || !s.is_empty())
    })
}

fn shipment_within_stock(shipment: &Shipment, warehouse: &Warehouse) -> bool {
    shipment
        .lines
        .iter()
        .all(|(item, qty)| warehouse.stock(item).is_some_and(|stock| stock >= *qty))
}
