#[cfg(test)]
mod tests {
    use crate::cmd::helpers::{self, TargetArgs};

    const ARN: &str = "arn:aws:es:us-east-1:123456789012:domain/search";

    fn write_config(body: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("searchwatch.yml");
        std::fs::write(&path, body).unwrap();
        let path = path.to_str().unwrap().to_string();
        (dir, path)
    }

    #[test]
    fn default_config_path_ends_with_file_name() {
        let path = helpers::default_config_path();
        assert!(path.ends_with("searchwatch/searchwatch.yml"));
    }

    #[test]
    fn load_config_missing_file() {
        assert!(helpers::load_config(Some("/nonexistent/searchwatch.yml")).is_err());
    }

    #[test]
    fn load_config_from_tempfile() {
        let (_dir, path) = write_config(&format!(
            "domain_arn: {ARN}\nnotification_targets:\n  - arn:aws:sns:us-east-1:123456789012:ops\n"
        ));

        let cfg = helpers::load_config(Some(&path)).unwrap();
        assert_eq!(cfg.domain_arn, ARN);
        assert_eq!(cfg.notification_targets.len(), 1);
    }

    #[test]
    fn flags_override_file() {
        let (_dir, path) = write_config(&format!(
            "domain_arn: {ARN}\nprofile: base\nnotification_targets:\n  - arn:aws:sns:us-east-1:123456789012:ops\n"
        ));
        let overrides = TargetArgs {
            domain_arn: Some("arn:aws:es:eu-west-1:123456789012:domain/logs".into()),
            targets: vec!["arn:aws:sns:eu-west-1:123456789012:pager".into()],
            capacity_file: Some("caps.yml".into()),
        };

        let cfg = helpers::resolve_config(Some(&path), Some("ops"), &overrides).unwrap();
        assert_eq!(cfg.domain_arn, "arn:aws:es:eu-west-1:123456789012:domain/logs");
        assert_eq!(cfg.notification_targets, vec!["arn:aws:sns:eu-west-1:123456789012:pager"]);
        assert_eq!(cfg.capacity_file.as_deref(), Some("caps.yml"));
        assert_eq!(cfg.profile_name(), "ops");
    }

    #[test]
    fn file_values_kept_without_flags() {
        let (_dir, path) = write_config(&format!("domain_arn: {ARN}\nprofile: base\n"));
        let cfg = helpers::resolve_config(Some(&path), None, &TargetArgs::default()).unwrap();
        assert_eq!(cfg.profile_name(), "base");
        assert!(cfg.notification_targets.is_empty());
    }

    #[test]
    fn explicit_missing_file_is_error_even_with_domain_flag() {
        let overrides = TargetArgs {
            domain_arn: Some(ARN.into()),
            ..Default::default()
        };
        assert!(helpers::resolve_config(Some("/nonexistent/searchwatch.yml"), None, &overrides).is_err());
    }

    #[test]
    fn invalid_merged_config_rejected() {
        let (_dir, path) = write_config(&format!("domain_arn: {ARN}\nrelay:\n  enabled: false\n"));
        let overrides = TargetArgs {
            targets: vec!["  ".into()],
            ..Default::default()
        };
        assert!(helpers::resolve_config(Some(&path), None, &overrides).is_err());
    }

    #[test]
    fn builtin_capacity_without_file() {
        let table = helpers::load_capacity(None).unwrap();
        assert_eq!(table.lookup("m3.large.elasticsearch"), Some(32));
    }

    #[test]
    fn capacity_override_file() {
        let (_dir, path) = write_config("r6g.large.search: 100\n");
        let table = helpers::load_capacity(Some(&path)).unwrap();
        assert_eq!(table.lookup("r6g.large.elasticsearch"), Some(100));
        assert_eq!(table.lookup("i3.large.search"), Some(475));
    }
}
