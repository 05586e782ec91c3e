use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{error::Result, session::Session};

#[derive(Debug, Parser)]
#[command(name = "draftorder")]
#[command(about = "Randomize a weighted draft order and share it")]
pub struct Cli {
    #[arg(
        long,
        short,
        global = true,
        env = "DRAFTORDER_CONFIG",
        help = "Path to a TOML config file"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Randomize a new draft order.
    Randomize(RandomizeArgs),
    /// Open a shared draft order link and reveal it.
    Open(OpenArgs),
}

#[derive(Debug, Args)]
pub struct RandomizeArgs {
    #[arg(help = "Participant names")]
    pub names: Vec<String>,
    #[arg(long = "odds", value_name = "NAME", help = "Give NAME odds for the first pick")]
    pub odds: Vec<String>,
    #[arg(long, value_name = "NAME", help = "Make NAME the last pick")]
    pub last: Option<String>,
    #[arg(
        long = "weight",
        value_name = "NAME=N",
        value_parser = parse_assignment,
        help = "Set the weight of NAME (1-100)"
    )]
    pub weights: Vec<(String, i64)>,
    #[arg(
        long = "adjust",
        value_name = "NAME=DELTA",
        value_parser = parse_assignment,
        help = "Nudge the weight of NAME within its tier range"
    )]
    pub adjustments: Vec<(String, i64)>,
    #[arg(long, help = "Print the order at once instead of revealing it", default_value_t = false)]
    pub no_reveal: bool,
    #[arg(long, help = "Print a share link for the result", default_value_t = false)]
    pub share: bool,
}

impl RandomizeArgs {
    /// Build the session these arguments describe.
    ///
    /// Names given only to `--odds`, `--last`, `--weight` or `--adjust` are
    /// added first.
    pub fn session(&self) -> Result<Session> {
        let mut session = Session::new();
        for name in &self.names {
            session.add(name)?;
        }
        for name in &self.odds {
            let name = add_if_missing(&mut session, name)?;
            session.set_odds_for_first(name, true)?;
        }
        if let Some(name) = &self.last {
            let name = add_if_missing(&mut session, name)?;
            session.set_last(name, true)?;
        }
        for (name, weight) in &self.weights {
            let name = add_if_missing(&mut session, name)?;
            session.set_weight(name, *weight)?;
        }
        for (name, delta) in &self.adjustments {
            let name = add_if_missing(&mut session, name)?;
            session.adjust_weight(name, *delta)?;
        }
        Ok(session)
    }
}

fn add_if_missing<'a>(session: &mut Session, name: &'a str) -> Result<&'a str> {
    let name = name.trim();
    if session.registry().get(name).is_none() {
        session.add(name)?;
    }
    Ok(name)
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    #[arg(help = "Share link")]
    pub link: String,
    #[arg(long, help = "Skip the countdown and reveal everything at once", default_value_t = false)]
    pub fast_forward: bool,
}

/// Parse `NAME=N`. The name is everything before the last `=`.
fn parse_assignment(s: &str) -> Result<(String, i64), String> {
    let (name, value) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=N, got `{s}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in `{s}`"));
    }
    let value = value
        .trim()
        .parse()
        .map_err(|err| format!("invalid number in `{s}`: {err}"))?;
    Ok((name.to_string(), value))
}
