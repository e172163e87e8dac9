pub mod handlers;
pub mod router;

pub use router::{JourneyState, journey_router};
