//! Page navigation without a router.
//!
//! [`NavState`] is changed only through [`NavReducer`] and mirrored into an
//! [`AddressBar`] after every transition.

mod address_bar;
mod intent;
mod location;
mod reducer;
mod state;

pub use address_bar::AddressBar;
pub use intent::NavIntent;
pub use location::{from_query, to_query};
pub use reducer::NavReducer;
pub use state::{NavState, Page, UnknownPage};
