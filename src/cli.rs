use crate::collapse::ResetPolicy;
use crate::config::FileConfig;
use crate::export::{ExportTarget, Theme};
use crate::render::{Charset, View};
use crate::tree::ExclusionSet;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which views to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Indent,
    Ascii,
    Box,
    All,
}

impl ViewArg {
    pub fn views(self) -> Vec<View> {
        match self {
            ViewArg::Indent => vec![View::Indent],
            ViewArg::Ascii => vec![View::Ascii],
            ViewArg::Box => vec![View::Box],
            ViewArg::All => View::ALL.to_vec(),
        }
    }
}

#[derive(Parser, Clone, Debug)]
#[command(name = "ziptree")]
#[command(version)]
#[command(about = "Rebuilds the folder tree of a ZIP archive and renders it")]
#[command(
    long_about = "Rebuilds the folder tree of a ZIP archive and renders it as an indented list, ASCII art or a vertical box diagram.\n\nnode_modules, .git and .vscode are excluded by default.\nUse --no-default-excludes to keep them."
)]
pub struct Args {
    /// ZIP archive to read (optional with --interactive)
    pub archive: Option<PathBuf>,

    /// View to print
    #[arg(long = "view", value_enum, default_value = "ascii")]
    pub view: ViewArg,

    /// Comma-separated names to exclude at any depth (e.g., "dist,coverage")
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Option<String>,

    /// Do not apply the built-in exclusion list
    #[arg(long = "no-default-excludes")]
    pub no_default_excludes: bool,

    /// Collapse a directory path (e.g., "src/utils"); can be repeated
    #[arg(short = 'c', long = "collapse")]
    pub collapse: Vec<String>,

    /// Glyph set for connectors and markers
    #[arg(long = "charset", value_enum)]
    pub charset: Option<Charset>,

    /// Colour theme for exports: terminal, light, dark, blueprint
    #[arg(long = "theme")]
    pub theme: Option<String>,

    /// Write an SVG of this view; can be repeated
    #[arg(short = 'e', long = "export", value_enum)]
    pub export: Vec<ExportTarget>,

    /// Directory for exported files
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,

    /// Use the modal file names (e.g., ascii-tree-modal.svg)
    #[arg(long = "modal")]
    pub modal: bool,

    /// Read commands from stdin after loading
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Keep collapsed folders when a new archive is loaded
    #[arg(long = "keep-collapse")]
    pub keep_collapse: bool,

    /// Config file (default: <config dir>/ziptree/config.toml)
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Effective settings after merging the config file under the CLI flags
#[derive(Debug, Clone)]
pub struct Settings {
    pub exclusions: ExclusionSet,
    pub charset: Charset,
    pub theme: Theme,
    pub reset: ResetPolicy,
    pub out_dir: PathBuf,
    pub modal: bool,
}

impl Args {
    pub fn settings(&self, file: &FileConfig) -> Settings {
        let use_defaults = !self.no_default_excludes && file.default_excludes.unwrap_or(true);
        let mut exclusions = if use_defaults {
            ExclusionSet::with_defaults()
        } else {
            ExclusionSet::new()
        };
        exclusions.extend(file.exclude.iter().cloned());
        if let Some(csv) = &self.exclude {
            exclusions.merge_csv(csv);
        }

        let theme = self
            .theme
            .as_deref()
            .or(file.theme.as_deref())
            .map(Theme::parse)
            .unwrap_or_default();

        let reset = if self.keep_collapse || file.reset_collapse == Some(false) {
            ResetPolicy::Keep
        } else {
            ResetPolicy::Reset
        };

        Settings {
            exclusions,
            charset: self.charset.or(file.charset).unwrap_or_default(),
            theme,
            reset,
            out_dir: self.out_dir.clone(),
            modal: self.modal,
        }
    }

    /// An archive is required unless commands come from stdin
    pub fn validate(&self) -> Result<(), String> {
        if self.archive.is_none() && !self.interactive {
            return Err("an archive path is required (or use --interactive)".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["ziptree", "project.zip"]);
        let settings = args.settings(&FileConfig::default());

        assert_eq!(args.view, ViewArg::Ascii);
        assert_eq!(settings.charset, Charset::Unicode);
        assert_eq!(settings.theme, Theme::Terminal);
        assert_eq!(settings.reset, ResetPolicy::Reset);
        assert!(settings.exclusions.matches_segment("node_modules"));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides_config() {
        let file = FileConfig {
            theme: Some("dark".to_string()),
            exclude: vec!["dist".to_string()],
            charset: Some(Charset::Ascii),
            reset_collapse: None,
            default_excludes: Some(false),
        };
        let args = Args::parse_from([
            "ziptree",
            "p.zip",
            "--theme",
            "blueprint",
            "--exclude",
            "tmp, out",
            "--charset",
            "unicode",
        ]);
        let settings = args.settings(&file);

        assert_eq!(settings.theme, Theme::Blueprint);
        assert_eq!(settings.charset, Charset::Unicode);
        assert_eq!(settings.exclusions.names(), &["dist", "tmp", "out"]);
    }

    #[test]
    fn test_keep_collapse() {
        let args = Args::parse_from(["ziptree", "p.zip", "--keep-collapse"]);
        assert_eq!(args.settings(&FileConfig::default()).reset, ResetPolicy::Keep);

        let file = FileConfig {
            reset_collapse: Some(false),
            ..Default::default()
        };
        let args = Args::parse_from(["ziptree", "p.zip"]);
        assert_eq!(args.settings(&file).reset, ResetPolicy::Keep);
    }

    #[test]
    fn test_archive_required_without_interactive() {
        let args = Args::parse_from(["ziptree"]);
        assert!(args.validate().is_err());

        let args = Args::parse_from(["ziptree", "--interactive"]);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_view_all() {
        assert_eq!(ViewArg::All.views().len(), 3);
        assert_eq!(ViewArg::Box.views(), vec![View::Box]);
    }
}
