pub mod store;
pub mod transport;

pub use store::RemoteStore;
pub use transport::{RemoteTransport, TransportError, TransportErrorKind};
