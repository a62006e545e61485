use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contribmap")]
#[command(about = "Show a year of git commit activity as a terminal heatmap")]
#[command(version)]
pub struct Cli {
    #[arg(default_value = ".", help = "Path to git repository")]
    pub path: PathBuf,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::heat::exec(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["contribmap"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("."));
    }

    #[test]
    fn accepts_single_positional_path() {
        let cli = Cli::try_parse_from(["contribmap", "/tmp/it's a repo"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("/tmp/it's a repo"));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["contribmap", "--json"]).is_err());
    }
}
