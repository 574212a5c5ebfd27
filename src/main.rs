use clap::Parser;
use std::rc::Rc;

use group_refresh::{
    RefreshGroupUpdatePullRequest, Result,
    compiler::candidates::CandidateCompiler,
    config::RefreshConfig,
    error_handler::ServiceErrorHandler,
    job::Job,
    service::{Service, dry_run::DryRunService},
    snapshot::DependencySnapshot,
};

mod cli;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("group_refresh")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn run(args: cli::Args) -> Result<()> {
    let job = Job::from_file(&args.job)?;

    if !RefreshGroupUpdatePullRequest::applies_to(&job) {
        log::warn!(
            "job {} is not a group pull request refresh: skipping",
            job.id
        );
        return Ok(());
    }

    let config = RefreshConfig::load(&args.config)?;
    let compiler = CandidateCompiler::from_file(&args.candidates)?;
    let snapshot =
        DependencySnapshot::create_from_job(&job, args.base_commit_sha);
    let service: Rc<dyn Service> = Rc::new(DryRunService::new());

    RefreshGroupUpdatePullRequest::builder()
        .service(Rc::clone(&service))
        .job(Rc::new(job))
        .dependency_snapshot(Rc::new(snapshot))
        .error_handler(Rc::new(ServiceErrorHandler::new(Rc::clone(&service))))
        .compiler(Rc::new(compiler))
        .config(config)
        .build()?
        .perform()
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    run(cli_args)?;

    Ok(())
}
