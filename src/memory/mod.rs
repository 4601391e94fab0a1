/*!
 * Memory Module
 * Region layout and next-fit placement with lifetime-based reclamation
 */

pub mod allocator;
pub mod layout;
pub mod shared;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use allocator::NextFitAllocator;
pub use layout::RegionLayout;
pub use shared::SharedAllocator;
pub use traits::*;
pub use types::*;
