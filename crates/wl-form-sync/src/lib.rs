//! Form synchronization for the wishlist admin console.
//!
//! Reads named form fields, issues one HTTP request per action against the
//! wishlist API and writes the outcome back to the page. The page is reached
//! through [`FormSurface`] and the network through [`Transport`], so the same
//! controller runs in the browser and in native tests.

pub mod controller;
pub mod fields;
pub mod ops;
pub mod query;
pub mod render;
pub mod surface;
pub mod transport;

pub use controller::{Action, BUTTONS, ConsoleConfig, FormSync, Snapshots};
pub use fields::{FieldGroup, FieldId, ResultArea};
pub use ops::{ApiRequest, Method, Operation};
pub use query::{QueryEncoding, build_query};
pub use surface::{FormSurface, MemorySurface};
pub use transport::{ApiResponse, DispatchError, Transport, TransportError, dispatch};
