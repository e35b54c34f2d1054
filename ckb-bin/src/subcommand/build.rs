use ckb_unique_app_config::{BuildArgs, ExitCode};
use ckb_unique_builder::{fee::unique_cell_capacity, UniqueCellBuilder};
use ckb_unique_jsonrpc_types::{LiveCell, TransactionView, Uint64};
use ckb_unique_types::core::cell;
use serde::Serialize;
use std::fs;

/// What `ckb-unique build` prints.
#[derive(Serialize)]
struct BuildOutput {
    unique_id: String,
    fee: Uint64,
    transaction: TransactionView,
}

pub fn build(args: BuildArgs) -> Result<(), ExitCode> {
    let output = build_output(args)?;
    let json = serde_json::to_string_pretty(&output).map_err(|err| {
        eprintln!("failed to render the transaction: {err}");
        ExitCode::Failure
    })?;
    println!("{json}");
    Ok(())
}

fn build_output(args: BuildArgs) -> Result<BuildOutput, ExitCode> {
    let content = fs::read_to_string(&args.cells)?;
    let pool: Vec<cell::LiveCell> = serde_json::from_str::<Vec<LiveCell>>(&content)
        .map_err(|err| {
            eprintln!("invalid cells file {}: {err}", args.cells.display());
            ExitCode::Cli
        })?
        .into_iter()
        .map(Into::into)
        .collect();

    let capacity = match args.capacity {
        Some(capacity) => capacity,
        None => unique_cell_capacity(args.data.len()).map_err(|err| {
            eprintln!("{err}");
            ExitCode::Cli
        })?,
    };
    let lock = args.profile.secp256k1_lock(args.lock_arg);
    let builder = UniqueCellBuilder::with_profile(args.config.builder, args.profile);
    let built = builder
        .build(&pool, &lock, capacity, args.data)
        .map_err(|err| {
            eprintln!("failed to build the transaction: {err}");
            ExitCode::Failure
        })?;

    Ok(BuildOutput {
        unique_id: built.unique_id.to_string(),
        fee: built.fee.into(),
        transaction: built.tx.into(),
    })
}
