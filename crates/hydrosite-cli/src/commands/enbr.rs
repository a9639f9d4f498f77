use crate::cli::EnbrArgs;
use crate::config;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use hydrosite::analysis::enbr::{EnbrConfig, compute_enbr_curve, mean_neighbor_count};
use hydrosite::core::discovery::{ENBR_SUFFIX, NBRS_SUFFIX, discover_site_files, site_file_name};
use hydrosite::core::loader::load_column;
use hydrosite::plot::enbr::render_enbr_plot;
use hydrosite::plot::enbr_plot_path;
use hydrosite::progress::{Progress, ProgressReporter, timed};
use tracing::{info, warn};

pub fn run(args: EnbrArgs) -> Result<()> {
    let settings = config::load(args.config.as_deref())?;
    let config: EnbrConfig = settings.enbr.into();

    let sites = (!args.sites.is_empty()).then_some(args.sites.as_slice());
    let files = discover_site_files(&args.data_dir, ENBR_SUFFIX, sites)?;
    if files.is_empty() {
        warn!(
            "No '*{}' files found in '{}'; nothing to plot.",
            ENBR_SUFFIX,
            args.data_dir.display()
        );
        return Ok(());
    }
    info!("Discovered {} site energy file(s).", files.len());

    let reference = args
        .ref_data
        .as_ref()
        .map(load_column)
        .transpose()?;

    let handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(handler.get_callback());
    reporter.report(Progress::BatchStart {
        total_steps: files.len() as u64,
    });

    timed("enbr plot generation", || -> Result<()> {
        for file in &files {
            info!(
                "Generating Enbr plot for site {} ({}).",
                file.site,
                file.path.display()
            );
            let samples = load_column(&file.path)?;

            let mean_nbrs = if args.nbr_norm {
                let nbr_path = args
                    .data_dir
                    .join(site_file_name(file.site, NBRS_SUFFIX));
                let nbrs = load_column(&nbr_path)?;
                Some(mean_neighbor_count(file.site, &nbrs)?)
            } else {
                None
            };

            let curve = compute_enbr_curve(
                file.site,
                &samples,
                mean_nbrs,
                reference.as_deref(),
                args.ref_nbrs,
                &config,
            )?;

            let out_path = enbr_plot_path(&args.data_dir, file.site);
            render_enbr_plot(&curve, &out_path)?;
            info!("Wrote '{}'.", out_path.display());
            reporter.report(Progress::BatchIncrement);
        }
        Ok(())
    })?;

    reporter.report(Progress::BatchFinish);
    Ok(())
}
