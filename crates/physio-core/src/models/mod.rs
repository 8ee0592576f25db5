pub mod ids;
pub mod patient;
pub mod session;
pub mod snapshot;

pub use ids::{PatientId, SessionId};
pub use patient::Patient;
pub use session::{Session, SessionType};
pub use snapshot::Snapshot;
