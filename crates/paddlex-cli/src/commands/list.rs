//! Usage: paddlex list [--db PATH]

use clap::Args;

use super::DbArgs;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

pub fn execute(args: ListArgs) -> anyhow::Result<()> {
    let store = args.db.open()?;
    let paddles = store.list_all()?;

    if paddles.is_empty() {
        println!("No paddles found.");
        return Ok(());
    }

    for paddle in &paddles {
        println!(
            "{}\t{}\t{}\t{}",
            paddle.id, paddle.metadata.brand, paddle.metadata.model, paddle.specs.shape
        );
    }
    Ok(())
}
