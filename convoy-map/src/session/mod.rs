mod route_outcome;
mod route_ticket;
mod session_phase;

pub use route_outcome::RouteOutcome;
pub use route_ticket::RouteTicket;
pub use session_phase::SessionPhase;
