use crate::cli::DeployArgs;
use crate::context::AppContext;
use crate::credentials;
use crate::deploy::{DeploymentOutcome, DeploymentRunner, DryRunDeployer};
use crate::error::AppResult;

pub fn run(ctx: &AppContext, args: DeployArgs) -> AppResult<()> {
    ctx.ensure_known_network(args.strict)?;

    let contract = ctx.contract(args.contract.as_deref());
    let entry = ctx.settings.network(&ctx.network);
    let provider = credentials::provider_for(entry.as_ref(), |name| std::env::var(name).ok())?;

    let outcome = DeploymentRunner::new(&ctx.profiles, provider.as_ref(), &DryRunDeployer)
        .with_ledger(&ctx.ledger)
        .run(&ctx.network, contract)?;

    let text = format_outcome(&outcome);
    ctx.output.emit(&text, &outcome)
}

fn format_outcome(outcome: &DeploymentOutcome) -> String {
    let network = if outcome.fell_back {
        format!("{} (default profile)", outcome.network)
    } else {
        outcome.network.clone()
    };
    format!(
        "{}: deployed {}(\"{}\", \"{}\") as {} [signer {}]",
        network,
        outcome.handle.contract,
        outcome.parameters.display_name,
        outcome.parameters.endpoint_url,
        outcome.handle.id,
        outcome.signed.signer
    )
}
