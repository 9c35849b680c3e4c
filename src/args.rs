//  Commands:
// - split <index> <source> <output> [--policy reuse|fixed]
// - list <index>
// - info <files>...

use std::{
    fmt::{self, Display},
    path::PathBuf,
};

use clap::{Parser, Subcommand, ValueEnum};

use crate::header::HeaderPolicy;

#[derive(Parser)]
#[command(version, about)]
pub struct Args {
    #[clap(subcommand)]
    pub subcommand: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a WAV blob using an IDX file
    Split(Split),
    /// Print the segments described by an IDX file
    List(List),
    /// Inspect the headers of split WAV files
    Info(Info),
}

#[derive(Parser)]
pub struct Split {
    /// IDX file describing each segment
    pub index: PathBuf,
    /// Concatenated WAV blob the segments are carved from
    pub source: PathBuf,
    /// Existing directory to write segments into
    pub output: PathBuf,
    /// How each output's header is built
    #[arg(long, value_enum, default_value_t = Policy::Reuse)]
    pub policy: Policy,
}

#[derive(Parser)]
pub struct List {
    pub index: PathBuf,
}

#[derive(Parser)]
pub struct Info {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Reuse the source's format chunk
    Reuse,
    /// Write a fixed 11051 Hz, 8 bit, mono format chunk
    Fixed,
}

impl Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Policy::Reuse => "reuse",
            Policy::Fixed => "fixed",
        })
    }
}

impl From<Policy> for HeaderPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Reuse => HeaderPolicy::ReuseOriginal,
            Policy::Fixed => HeaderPolicy::Fixed,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Args, Command, Policy};

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn split_defaults_to_reuse() {
        let args = Args::try_parse_from(["wavsplit", "split", "a.idx", "a.wav", "out"]).unwrap();
        match args.subcommand {
            Command::Split(split) => {
                assert_eq!(split.policy, Policy::Reuse);
                assert_eq!(split.output.to_str(), Some("out"));
            }
            _ => panic!("expected split"),
        }
    }

    #[test]
    fn split_fixed_policy() {
        let args = Args::try_parse_from([
            "wavsplit", "split", "--policy", "fixed", "a.idx", "a.wav", "out",
        ])
        .unwrap();
        assert!(matches!(
            args.subcommand,
            Command::Split(ref split) if split.policy == Policy::Fixed
        ));
    }

    #[test]
    fn split_requires_all_paths() {
        assert!(Args::try_parse_from(["wavsplit", "split", "a.idx", "a.wav"]).is_err());
        assert!(Args::try_parse_from(["wavsplit", "info"]).is_err());
    }
}
