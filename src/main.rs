mod view;

use clap::Parser;
use draftorder::cli::{Cli, Commands, OpenArgs, RandomizeArgs};
use draftorder::config::Config;
use draftorder::reveal::{self, SystemClock};
use draftorder::session::Session;
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use crate::view::RevealView;

fn randomize(args: RandomizeArgs, config: &Config) -> eyre::Result<()> {
    let mut session = args.session()?;

    view::print_participants(session.participants());

    if session.randomize()?.is_none() {
        eyre::bail!(
            "need at least two names to randomize, got {}",
            session.participants().len()
        );
    }

    if args.no_reveal {
        view::print_order(session.draft_order());
    } else if let Some(mut sequence) = session.reveal(&config.reveal) {
        let mut screen = RevealView::default();
        reveal::play(&mut sequence, &SystemClock, |event| screen.show(event));
    }

    if args.share {
        let base = config.share.base_url().wrap_err("invalid share base url")?;
        view::print_share_link(&session.share_link(&base)?);
    }
    Ok(())
}

fn open(args: OpenArgs, config: &Config) -> eyre::Result<()> {
    let session = Session::open_share_link(&args.link);
    if !session.is_locked() {
        eyre::bail!("could not read a draft order from the link");
    }

    view::print_participants(session.participants());

    let Some(mut sequence) = session.reveal(&config.reveal) else {
        eyre::bail!("the shared draft order does not match its participants");
    };
    let mut screen = RevealView::default();
    if args.fast_forward {
        for event in sequence.fast_forward() {
            screen.show(event);
        }
    } else {
        reveal::play(&mut sequence, &SystemClock, |event| screen.show(event));
    }
    Ok(())
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).wrap_err("failed to load config")?;

    match cli.command {
        Commands::Randomize(args) => randomize(args, &config),
        Commands::Open(args) => open(args, &config),
    }
}
