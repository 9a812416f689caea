//! Usage: paddlex show <ID> [--db PATH]

use clap::Args;

use super::DbArgs;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Business identifier, e.g. ENGAGE-PURSUIT-MX-6.0
    pub id: String,

    #[command(flatten)]
    pub db: DbArgs,
}

pub fn execute(args: ShowArgs) -> anyhow::Result<()> {
    let store = args.db.open()?;
    let paddle = store.get_by_id(&args.id)?;
    println!("{}", serde_json::to_string_pretty(&paddle)?);
    Ok(())
}
