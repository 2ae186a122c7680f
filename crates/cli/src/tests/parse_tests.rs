#[cfg(test)]
mod tests {
    use crate::cmd::Commands;
    use crate::output::OutputMode;
    use crate::Opts;
    use clap::Parser;

    fn parse(args: &[&str]) -> Opts {
        let mut full = vec!["searchwatch"];
        full.extend_from_slice(args);
        Opts::parse_from(full)
    }

    #[test]
    fn parse_version() {
        let opts = parse(&["version"]);
        assert!(matches!(opts.cmd, Commands::Version));
    }

    #[test]
    fn json_flag_selects_json_mode() {
        let opts = parse(&["version", "--json"]);
        assert!(opts.json);
        assert_eq!(opts.output_mode(), OutputMode::Json);
    }

    #[test]
    fn human_mode_by_default() {
        assert_eq!(parse(&["version"]).output_mode(), OutputMode::Human);
    }

    #[test]
    fn parse_config_and_profile() {
        let opts = parse(&["--config", "/tmp/sw.yml", "--profile", "ops", "plan"]);
        assert_eq!(opts.config.as_deref(), Some("/tmp/sw.yml"));
        assert_eq!(opts.profile.as_deref(), Some("ops"));
    }

    #[test]
    fn verbosity_raises_log_filter() {
        assert_eq!(parse(&["version"]).log_filter(), "warn");
        assert_eq!(parse(&["-v", "version"]).log_filter(), "info");
        assert_eq!(parse(&["-vv", "version"]).log_filter(), "debug");
    }

    #[test]
    fn parse_provision_overrides() {
        let opts = parse(&[
            "provision",
            "--domain-arn",
            "arn:aws:es:us-east-1:123456789012:domain/search",
            "--target",
            "arn:aws:sns:us-east-1:123456789012:ops",
            "--target",
            "arn:aws:sns:us-east-1:123456789012:pager",
            "--yes",
        ]);
        match opts.cmd {
            Commands::Provision(args) => {
                assert!(args.yes);
                assert_eq!(args.target.targets.len(), 2);
                assert!(args.target.domain_arn.is_some());
            }
            _ => panic!("expected provision"),
        }
    }

    #[test]
    fn parse_plan_with_capacity_file() {
        let opts = parse(&["plan", "--capacity-file", "caps.yml"]);
        match opts.cmd {
            Commands::Plan(args) => assert_eq!(args.target.capacity_file.as_deref(), Some("caps.yml")),
            _ => panic!("expected plan"),
        }
    }

    #[test]
    fn parse_queries_optional_signal() {
        match parse(&["queries"]).cmd {
            Commands::Queries(args) => assert!(args.signal.is_none()),
            _ => panic!("expected queries"),
        }
        match parse(&["queries", "ClusterStatus.red"]).cmd {
            Commands::Queries(args) => assert_eq!(args.signal.as_deref(), Some("ClusterStatus.red")),
            _ => panic!("expected queries"),
        }
    }

    #[test]
    fn parse_capacity_lookup() {
        match parse(&["capacity", "i3.large.search"]).cmd {
            Commands::Capacity(args) => {
                assert_eq!(args.instance_type.as_deref(), Some("i3.large.search"));
                assert!(args.file.is_none());
            }
            _ => panic!("expected capacity"),
        }
    }

    #[test]
    fn parse_config_subcommands() {
        assert!(matches!(parse(&["config", "show"]).cmd, Commands::Config(_)));
        assert!(matches!(parse(&["config", "validate"]).cmd, Commands::Config(_)));
        assert!(matches!(parse(&["config", "path"]).cmd, Commands::Config(_)));
    }

    #[test]
    fn unknown_subcommand_rejected() {
        assert!(Opts::try_parse_from(["searchwatch", "deploy"]).is_err());
    }
}
