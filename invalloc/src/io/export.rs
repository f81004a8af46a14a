use std::collections::BTreeMap;

use crate::entities::{Shipment, Solution};
use crate::io::ext_repr::{ExtShipment, ExtSolution};

/// Exports a solution out of the library
pub fn export_solution(solution: &Solution) -> ExtSolution {
    ExtSolution(
        solution
            .shipments
            .iter()
            .map(|s| BTreeMap::from([(s.warehouse.clone(), export_shipment(s))]))
            .collect(),
    )
}

pub fn export_shipment(shipment: &Shipment) -> ExtShipment {
    shipment.lines.clone()
}
