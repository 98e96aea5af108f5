use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::resolver::NetworkProfile;

#[derive(Debug, Serialize)]
struct ProfilesView<'a> {
    entries: &'a [NetworkProfile],
    default: &'a NetworkProfile,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let view = ProfilesView {
        entries: ctx.profiles.entries(),
        default: ctx.profiles.default_profile(),
    };

    let mut lines: Vec<String> = view
        .entries
        .iter()
        .enumerate()
        .map(|(index, profile)| format_profile(&format!("{}.", index + 1), profile))
        .collect();
    lines.push(format_profile("*", view.default));

    ctx.output.emit_lines(&lines, &view)
}

fn format_profile(marker: &str, profile: &NetworkProfile) -> String {
    format!(
        "{marker} {} -> {} @ {}",
        profile.network_id, profile.display_name, profile.endpoint_url
    )
}
