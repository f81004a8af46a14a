mod allocator;
mod backlog;

#[doc(inline)]
pub use allocator::Allocator;

#[doc(inline)]
pub use allocator::draw_shipment;

#[doc(inline)]
pub use backlog::Backlog;
