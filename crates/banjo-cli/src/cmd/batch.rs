// crates/banjo-cli/src/cmd/batch.rs

use clap::Args;

use banjo_core::solve::select_best_batch;

use crate::io::setup_file;

#[derive(Args)]
pub struct BatchArgs {
    /// Batch request path (JSON list of {name, targetPitch, candidates})
    #[arg(long = "in")]
    pub r#in: String,

    /// Response path; prints to stdout when omitted
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let targets = setup_file::load_batch_request(&args.r#in)?;
    let chosen = select_best_batch(&targets);
    let text = setup_file::batch_response_json(&chosen)?;

    match args.out.as_deref() {
        Some(path) => {
            std::fs::write(path, text)?;
            eprintln!("wrote batch response: {}", path);
        }
        None => println!("{text}"),
    }

    eprintln!("batch ok: {} targets in, {} chosen", targets.len(), chosen.len());
    Ok(())
}
