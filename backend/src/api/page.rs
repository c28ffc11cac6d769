//! Client list page.

use askama::Template;

use crate::models::{CleanedData, Client};

/// One `<li>nom - email</li>` per client, in document order.
#[derive(Template)]
#[template(path = "clients.html")]
pub struct ClientListTemplate<'a> {
    pub clients: &'a [Client],
}

/// Render the client list of a cleaned document.
pub fn render_client_list(data: &CleanedData) -> askama::Result<String> {
    ClientListTemplate {
        clients: &data.clients,
    }
    .render()
}
