use ckb_unique_app_config::{ExitCode, UniqueIdArgs};
use ckb_unique_builder::UniqueId;
use ckb_unique_types::core::{CellInput, OutPoint};

pub fn unique_id(args: UniqueIdArgs) -> Result<(), ExitCode> {
    println!("{}", derive(&args));
    Ok(())
}

fn derive(args: &UniqueIdArgs) -> UniqueId {
    let input = CellInput::new(OutPoint::new(args.tx_hash, args.index), 0);
    UniqueId::derive(&input, args.output_index)
}
