use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// External representation of a quantity.
/// Accepts any JSON number, validity is only checked when importing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(untagged)]
pub enum ExtQty {
    /// Non-negative integer
    Count(u64),
    /// Negative integer
    Signed(i64),
    /// Any number written with a fraction or exponent
    Real(f64),
}

impl Display for ExtQty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtQty::Count(v) => write!(f, "{v}"),
            ExtQty::Signed(v) => write!(f, "{v}"),
            ExtQty::Real(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<u64> for ExtQty {
    fn from(v: u64) -> Self {
        ExtQty::Count(v)
    }
}

impl From<i64> for ExtQty {
    fn from(v: i64) -> Self {
        match u64::try_from(v) {
            Ok(count) => ExtQty::Count(count),
            Err(_) => ExtQty::Signed(v),
        }
    }
}

impl From<i32> for ExtQty {
    fn from(v: i32) -> Self {
        ExtQty::from(i64::from(v))
    }
}

impl From<f64> for ExtQty {
    fn from(v: f64) -> Self {
        ExtQty::Real(v)
    }
}

/// External representation of an [`Order`](crate::entities::Order): item identifier to requested quantity.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExtOrder(pub BTreeMap<String, ExtQty>);

impl<S: Into<String>, Q: Into<ExtQty>> FromIterator<(S, Q)> for ExtOrder {
    fn from_iter<T: IntoIterator<Item = (S, Q)>>(iter: T) -> Self {
        ExtOrder(
            iter.into_iter()
                .map(|(item, qty)| (item.into(), qty.into()))
                .collect(),
        )
    }
}

/// External representation of a [`Warehouse`](crate::entities::Warehouse).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtWarehouse {
    /// Label of the warehouse
    pub name: String,
    /// Available quantity per item
    #[serde(default)]
    pub inventory: BTreeMap<String, ExtQty>,
}

impl ExtWarehouse {
    pub fn new<I, S, Q>(name: impl Into<String>, inventory: I) -> Self
    where
        I: IntoIterator<Item = (S, Q)>,
        S: Into<String>,
        Q: Into<ExtQty>,
    {
        ExtWarehouse {
            name: name.into(),
            inventory: inventory
                .into_iter()
                .map(|(item, qty)| (item.into(), qty.into()))
                .collect(),
        }
    }
}

/// External representation of a [`Shipment`](crate::entities::Shipment)'s lines
pub type ExtShipment = BTreeMap<String, u64>;

/// External representation of a [`Solution`](crate::entities::Solution).
/// Every entry maps a single warehouse name to the items shipped from it:
/// `[{"a": {"apple": 5}}, {"b": {"apple": 5}}]`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExtSolution(pub Vec<BTreeMap<String, ExtShipment>>);

/// An order with an identifier, as part of an [`ExtInstance`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtOrderRequest {
    /// Identifier of the order, only used for reporting
    pub id: String,
    /// Requested quantity per item
    pub items: ExtOrder,
}

/// A set of orders to be allocated over the same warehouse offer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Warehouses sorted by shipping cost, cheapest first
    pub warehouses: Vec<ExtWarehouse>,
    /// Orders to be allocated, each one independently of the others
    pub orders: Vec<ExtOrderRequest>,
}
