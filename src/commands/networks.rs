use serde::Serialize;

use crate::config::{NetworkEntry, Transport};
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct NetworksView<'a> {
    networks: Vec<NetworkEntry>,
    solc_version: &'a str,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let view = NetworksView {
        networks: ctx.settings.networks(),
        solc_version: ctx.settings.solc_version(),
    };

    let mut lines = Vec::with_capacity(view.networks.len() + 1);
    for entry in &view.networks {
        lines.push(format_entry(entry));
    }
    lines.push(format!("solc {}", view.solc_version));

    ctx.output.emit_lines(&lines, &view)
}

fn format_entry(entry: &NetworkEntry) -> String {
    let transport = match &entry.transport {
        Transport::Host { host, port } => format!("{host}:{port}"),
        Transport::Rpc { rpc_url } => rpc_url.clone(),
    };
    let credential = entry
        .credential
        .as_ref()
        .map(|source| format!(" [key from ${}]", source.private_key_env))
        .unwrap_or_default();

    format!(
        "{} (id {}) {}{}",
        entry.name, entry.network_id, transport, credential
    )
}
