use crate::cli::RthetaArgs;
use crate::config;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use hydrosite::analysis::rtheta::{RthetaConfig, compute_rtheta_surface};
use hydrosite::core::discovery::{RTHETA_SUFFIX, discover_site_files};
use hydrosite::core::loader::load_pairs;
use hydrosite::plot::rtheta::render_rtheta_plot;
use hydrosite::plot::rtheta_plot_path;
use hydrosite::progress::{Progress, ProgressReporter, timed};
use tracing::{info, warn};

pub fn run(args: RthetaArgs) -> Result<()> {
    let settings = config::load(args.config.as_deref())?;
    let config: RthetaConfig = settings.rtheta.into();

    let sites = (!args.sites.is_empty()).then_some(args.sites.as_slice());
    let files = discover_site_files(&args.data_dir, RTHETA_SUFFIX, sites)?;
    if files.is_empty() {
        warn!(
            "No '*{}' files found in '{}'; nothing to plot.",
            RTHETA_SUFFIX,
            args.data_dir.display()
        );
        return Ok(());
    }
    info!("Discovered {} site (theta, r) file(s).", files.len());

    let handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(handler.get_callback());
    reporter.report(Progress::BatchStart {
        total_steps: files.len() as u64,
    });

    timed("rtheta plot generation", || -> Result<()> {
        for file in &files {
            info!(
                "Generating r_theta plot for site {} ({}).",
                file.site,
                file.path.display()
            );
            let samples = load_pairs(&file.path)?;
            let surface = compute_rtheta_surface(file.site, &samples, &config)?;

            let out_path = rtheta_plot_path(&args.data_dir, file.site);
            render_rtheta_plot(&surface, &out_path)?;
            info!("Wrote '{}'.", out_path.display());
            reporter.report(Progress::BatchIncrement);
        }
        Ok(())
    })?;

    reporter.report(Progress::BatchFinish);
    Ok(())
}
