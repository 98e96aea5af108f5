use serde::Serialize;

use crate::cli::ResolveArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::resolver::{DeploymentParameters, DeploymentRequest};

#[derive(Debug, Serialize)]
struct ResolveView<'a> {
    network: &'a str,
    profile: &'a str,
    fell_back: bool,
    parameters: DeploymentParameters,
}

pub fn run(ctx: &AppContext, args: ResolveArgs) -> AppResult<()> {
    ctx.ensure_known_network(args.strict)?;

    let profile = ctx.profiles.profile_for(&ctx.network);
    let view = ResolveView {
        network: &ctx.network,
        profile: &profile.network_id,
        fell_back: !ctx.profiles.is_known(&ctx.network),
        parameters: ctx.profiles.resolve(&DeploymentRequest::new(ctx.network.as_str())),
    };

    let text = format_resolution(&view);
    ctx.output.emit(&text, &view)
}

fn format_resolution(view: &ResolveView<'_>) -> String {
    let suffix = if view.fell_back {
        format!(" (fallback to `{}`)", view.profile)
    } else {
        String::new()
    };
    format!(
        "{}{}: {} @ {}",
        view.network, suffix, view.parameters.display_name, view.parameters.endpoint_url
    )
}
