use clap::Parser;
use std::path::PathBuf;

use parserelease::OutputParams;

#[derive(Parser, Debug)]
#[command(
    name = "parserelease",
    version,
    about = "Parse a scene release name into JSON",
    after_help = "With fewer than two positional arguments an error object is printed instead."
)]
pub struct CliArgs {
    /// Release name, e.g. Some.Release.Name-GROUP
    #[arg(allow_hyphen_values = true)]
    pub release: Option<String>,

    /// Section the release was published in, e.g. X264, TV-X265, FLAC
    #[arg(allow_hyphen_values = true)]
    pub section: Option<String>,

    /// Anything after the section is accepted and ignored
    #[arg(hide = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Leave out keys whose value is null
    #[arg(long, default_value_t = false)]
    pub omit_null: bool,

    /// Add the pre-announce section label as `announce_section`
    #[arg(long, default_value_t = false)]
    pub announce: bool,

    /// Batch mode: read `<release> <section>` lines from stdin
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// JSON file with default output parameters
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable logging (to stderr; filter with RUST_LOG)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// Output parameters requested by flags alone.
    pub fn flag_params(&self) -> OutputParams {
        OutputParams {
            pretty: self.pretty,
            omit_null: self.omit_null,
            announce_section: self.announce,
        }
    }

    /// Release and section, when both were given.
    pub fn inputs(&self) -> Option<(&str, &str)> {
        Some((self.release.as_deref()?, self.section.as_deref()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_parse() {
        let args = CliArgs::try_parse_from(["parserelease"]).unwrap();
        assert!(args.inputs().is_none());
        assert_eq!(args.flag_params(), OutputParams::default());
    }

    #[test]
    fn test_single_argument_has_no_inputs() {
        let args = CliArgs::try_parse_from(["parserelease", "Some.Release.Name-GROUP"]).unwrap();
        assert_eq!(args.release.as_deref(), Some("Some.Release.Name-GROUP"));
        assert!(args.inputs().is_none());
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let args = CliArgs::try_parse_from([
            "parserelease",
            "Some.Release.Name-GROUP",
            "movies",
            "extra",
            "-x",
        ])
        .unwrap();
        assert_eq!(args.inputs(), Some(("Some.Release.Name-GROUP", "movies")));
        assert_eq!(args.rest, vec!["extra", "-x"]);
    }

    #[test]
    fn test_flags() {
        let args = CliArgs::try_parse_from([
            "parserelease",
            "--pretty",
            "--announce",
            "--config",
            "out.json",
            "A.Release-GRP",
            "TV",
        ])
        .unwrap();
        assert_eq!(
            args.flag_params(),
            OutputParams {
                pretty: true,
                omit_null: false,
                announce_section: true,
            }
        );
        assert_eq!(args.config, Some(PathBuf::from("out.json")));
        assert_eq!(args.inputs(), Some(("A.Release-GRP", "TV")));
    }

    #[test]
    fn test_hyphenated_single_argument_is_a_release() {
        let args = CliArgs::try_parse_from(["parserelease", "-x"]).unwrap();
        assert_eq!(args.release.as_deref(), Some("-x"));
        assert!(args.inputs().is_none());

        let args = CliArgs::try_parse_from(["parserelease", "-x", "--y"]).unwrap();
        assert_eq!(args.inputs(), Some(("-x", "--y")));
    }

    #[test]
    fn test_flags_between_positionals() {
        let args =
            CliArgs::try_parse_from(["parserelease", "A.Release-GRP", "--omit-null", "TV"]).unwrap();
        assert!(args.omit_null);
        assert_eq!(args.inputs(), Some(("A.Release-GRP", "TV")));
    }
}
