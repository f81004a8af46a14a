//! Greedy allocation of an order over a cost-ordered list of warehouses.
//!
//! Warehouses are consulted strictly in the order given. Each one is drained of
//! whatever it can contribute to the outstanding order before the next one is
//! considered. The result is either a complete [`Solution`](entities::Solution)
//! or an empty one: partially fulfilled orders are never returned.

/// Greedy allocation of an [`Order`](entities::Order) over a warehouse offer
pub mod alloc;

/// Orders, warehouses, shipments and solutions
pub mod entities;

/// Importing external representations into this library and exporting solutions out of it
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::{AllocError, QtyOrigin};

#[doc(inline)]
pub use alloc::Allocator;

use crate::entities::Solution;
use crate::io::ext_repr::{ExtOrder, ExtWarehouse};

/// Validates and solves an order against a warehouse offer using the default [`AllocConfig`](util::AllocConfig).
/// See [`Allocator::solve`].
pub fn solve(order: &ExtOrder, warehouses: &[ExtWarehouse]) -> Result<Solution, AllocError> {
    Allocator::default().solve(order, warehouses)
}
