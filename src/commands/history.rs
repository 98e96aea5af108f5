use crate::cli::HistoryArgs;
use crate::context::AppContext;
use crate::deploy::{DeploymentRecord, Ledger};
use crate::error::AppResult;

pub fn run(ctx: &AppContext, args: HistoryArgs) -> AppResult<()> {
    let contract = ctx.contract(args.contract.as_deref());
    let records = select_records(&ctx.ledger, &ctx.network, contract, args.latest)?;

    if records.is_empty() {
        let text = format!("{}: no deployments of {contract}", ctx.network);
        return ctx.output.emit(&text, &records);
    }

    let lines: Vec<String> = records.iter().map(format_record).collect();
    ctx.output.emit_lines(&lines, &records)
}

pub fn select_records(
    ledger: &Ledger,
    network: &str,
    contract: &str,
    latest: bool,
) -> AppResult<Vec<DeploymentRecord>> {
    if latest {
        return Ok(ledger.latest(network, contract)?.into_iter().collect());
    }
    ledger.load(network, contract)
}

fn format_record(record: &DeploymentRecord) -> String {
    let comment = record
        .comment
        .as_deref()
        .map(|comment| format!(" # {comment}"))
        .unwrap_or_default();
    format!(
        "{} {} {} @ {}{}",
        record.date, record.handle.id, record.contract, record.endpoint_url, comment
    )
}
