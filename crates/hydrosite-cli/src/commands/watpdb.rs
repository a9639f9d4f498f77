use crate::cli::WatpdbArgs;
use crate::error::Result;
use hydrosite::core::io::pdb::write_water_pdb;
use hydrosite::core::loader::load_xyz;
use tracing::info;

pub fn run(args: WatpdbArgs) -> Result<()> {
    let coords = load_xyz(&args.coords)?;
    info!(
        "Loaded {} coordinate(s) from '{}'.",
        coords.len(),
        args.coords.display()
    );

    let written = write_water_pdb(&coords, args.full_water, &args.output)?;
    let residues = if args.full_water {
        coords.len() / 3
    } else {
        coords.len()
    };
    info!(
        "Wrote {} water residue(s) to '{}'.",
        residues,
        written.display()
    );
    Ok(())
}
