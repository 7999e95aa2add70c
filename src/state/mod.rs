mod session;

pub use session::PlannerSession;
