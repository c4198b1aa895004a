pub mod identity;
pub mod reconcile;
pub mod state;

pub use identity::*;
pub use reconcile::*;
pub use state::*;
