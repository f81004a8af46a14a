use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::entities::ItemId;
use crate::io::ext_repr::ExtQty;

/// Errors raised while validating the input of an allocation.
///
/// An order which cannot be fulfilled is *not* an error, it results in an empty
/// [`Solution`](crate::entities::Solution).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocError {
    /// A requested or stocked quantity is negative or not an integer
    #[error("invalid quantity {value} for item \"{item}\" in {origin}, quantities must be non-negative integers")]
    InvalidQuantity {
        item: ItemId,
        value: ExtQty,
        origin: QtyOrigin,
    },
}

/// Where an offending quantity was encountered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QtyOrigin {
    Order,
    Warehouse(String),
}

impl Display for QtyOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QtyOrigin::Order => write!(f, "order"),
            QtyOrigin::Warehouse(name) => write!(f, "inventory of warehouse \"{name}\""),
        }
    }
}
