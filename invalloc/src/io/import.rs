use std::collections::BTreeMap;

use log::debug;

use crate::entities::{ItemId, Order, Qty, Warehouse};
use crate::error::{AllocError, QtyOrigin};
use crate::io::ext_repr::{ExtOrder, ExtQty, ExtWarehouse};

/// Converts an external quantity into a validated [`Qty`].
/// Negative values and numbers with a fractional representation are rejected.
pub fn import_qty(item: &str, ext_qty: ExtQty, origin: &QtyOrigin) -> Result<Qty, AllocError> {
    match ext_qty {
        ExtQty::Count(qty) => Ok(qty),
        ExtQty::Signed(qty) if qty >= 0 => Ok(qty as Qty),
        ExtQty::Signed(_) | ExtQty::Real(_) => Err(AllocError::InvalidQuantity {
            item: item.to_string(),
            value: ext_qty,
            origin: origin.clone(),
        }),
    }
}

/// Imports an order. Every quantity is validated, zero quantities are dropped afterwards.
pub fn import_order(ext_order: &ExtOrder) -> Result<Order, AllocError> {
    let demand = import_quantities(&ext_order.0, &QtyOrigin::Order)?;
    let order = Order::new(demand);
    if order.n_items() < ext_order.0.len() {
        debug!(
            "[IMPORT] dropped {} zero quantity item(s) from the order",
            ext_order.0.len() - order.n_items()
        );
    }
    Ok(order)
}

/// Imports a single warehouse, validating its entire inventory.
pub fn import_warehouse(ext_warehouse: &ExtWarehouse) -> Result<Warehouse, AllocError> {
    let origin = QtyOrigin::Warehouse(ext_warehouse.name.clone());
    let inventory = import_quantities(&ext_warehouse.inventory, &origin)?;
    Ok(Warehouse::new(ext_warehouse.name.clone(), inventory))
}

/// Imports a warehouse offer. The order of the warehouses is preserved.
pub fn import_warehouses(ext_warehouses: &[ExtWarehouse]) -> Result<Vec<Warehouse>, AllocError> {
    ext_warehouses.iter().map(import_warehouse).collect()
}

fn import_quantities(
    ext_qtys: &BTreeMap<String, ExtQty>,
    origin: &QtyOrigin,
) -> Result<BTreeMap<ItemId, Qty>, AllocError> {
    ext_qtys
        .iter()
        .map(|(item, ext_qty)| Ok((item.clone(), import_qty(item, *ext_qty, origin)?)))
        .collect()
}
