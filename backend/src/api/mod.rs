//! HTTP API module.
//!
//! Read-only web front for an already cleaned document: the raw JSON and
//! a client list page.

pub mod page;
pub mod server;

pub use page::{render_client_list, ClientListTemplate};
pub use server::{router, start_server, AppState};
