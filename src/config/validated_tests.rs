//! Tests for validated configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, discover_settings, write_default_config};

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["microsip-bridge"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

/// A temporary MicroSIP layout: install dir with the executable, primary
/// fragment, two accounts.
struct Layout {
    dir: TempDir,
}

impl Layout {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("install")).unwrap();
        std::fs::write(dir.path().join("install").join("microsip.exe"), b"MZ").unwrap();
        for name in ["MicroSIP.ini", "a.ini", "b.ini"] {
            std::fs::write(dir.path().join(name), b"[Settings]").unwrap();
        }
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn executable(&self) -> PathBuf {
        self.path("install").join("microsip.exe")
    }

    /// Renders a settings file for this layout, with `extra` appended.
    fn settings(&self, extra: &str) -> String {
        format!(
            "[microsip]\npath = '{}'\nconfig = '{}'\naccounts = ['{}', '{}']\n{extra}",
            self.executable().display(),
            self.path("MicroSIP.ini").display(),
            self.path("a.ini").display(),
            self.path("b.ini").display(),
        )
    }
}

mod required_fields {
    use super::*;

    #[test]
    fn missing_microsip_path_returns_error() {
        let result = ValidatedConfig::from_raw(&cli(&[]), &toml(""));

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired {
                field: "microsip.path",
                ..
            })
        ));
    }

    #[test]
    fn missing_primary_fragment_returns_error() {
        let layout = Layout::new();
        let settings = format!("[microsip]\npath = '{}'", layout.executable().display());

        let result = ValidatedConfig::from_raw(&cli(&[]), &toml(&settings));

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired {
                field: "microsip.config",
                ..
            })
        ));
    }

    #[test]
    fn complete_layout_validates() {
        let layout = Layout::new();
        let config = ValidatedConfig::from_raw(&cli(&[]), &toml(&layout.settings(""))).unwrap();

        assert_eq!(config.microsip_path, layout.executable());
        assert_eq!(config.primary_fragment, layout.path("MicroSIP.ini"));
        assert_eq!(
            config.account_fragments,
            vec![layout.path("a.ini"), layout.path("b.ini")]
        );
        assert!(config.address_books.is_empty());
    }
}

mod path_existence {
    use super::*;

    #[test]
    fn missing_executable_is_rejected() {
        let layout = Layout::new();
        let settings = layout.settings("").replace(
            &layout.executable().display().to_string(),
            &layout.path("nowhere.exe").display().to_string(),
        );

        let result = ValidatedConfig::from_raw(&cli(&[]), &toml(&settings));

        assert!(matches!(
            result,
            Err(ConfigError::PathNotFound {
                field: "microsip.path",
                expected: "file",
                ..
            })
        ));
    }

    #[test]
    fn install_directory_instead_of_executable_is_rejected() {
        let layout = Layout::new();
        let settings = layout.settings("").replace(
            &layout.executable().display().to_string(),
            &layout.path("install").display().to_string(),
        );

        let result = ValidatedConfig::from_raw(&cli(&[]), &toml(&settings));

        match result {
            Err(ConfigError::PathNotFound {
                field,
                path,
                expected,
            }) => {
                assert_eq!(field, "microsip.path");
                assert_eq!(path, layout.path("install"));
                assert_eq!(expected, "file");
            }
            other => panic!("Expected PathNotFound, got {other:?}"),
        }
    }

    #[test]
    fn missing_account_fragment_is_rejected() {
        let layout = Layout::new();
        std::fs::remove_file(layout.path("b.ini")).unwrap();

        let result = ValidatedConfig::from_raw(&cli(&[]), &toml(&layout.settings("")));

        match result {
            Err(ConfigError::PathNotFound { field, path, .. }) => {
                assert_eq!(field, "microsip.accounts");
                assert_eq!(path, layout.path("b.ini"));
            }
            other => panic!("Expected PathNotFound, got {other:?}"),
        }
    }

    #[test]
    fn directory_as_primary_fragment_is_rejected() {
        let layout = Layout::new();
        let settings = layout.settings("").replace(
            &format!("config = '{}'", layout.path("MicroSIP.ini").display()),
            &format!("config = '{}'", layout.path("install").display()),
        );

        let result = ValidatedConfig::from_raw(&cli(&[]), &toml(&settings));

        assert!(matches!(
            result,
            Err(ConfigError::PathNotFound {
                field: "microsip.config",
                expected: "file",
                ..
            })
        ));
    }
}

mod address_books {
    use super::*;

    #[test]
    fn valid_books_keep_order() {
        let layout = Layout::new();
        let settings = layout.settings(
            r#"
            [[address_book]]
            url = "https://one.example.com/book"
            user = "alice"
            password = "pw1"

            [[address_book]]
            url = "http://two.example.com/book"
            user = "bob"
            password = "pw2"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli(&[]), &toml(&settings)).unwrap();

        assert_eq!(config.address_books.len(), 2);
        assert_eq!(
            config.address_books[0].url().as_str(),
            "https://one.example.com/book"
        );
        assert_eq!(config.address_books[1].user(), "bob");
    }

    #[test]
    fn invalid_url_is_rejected() {
        let layout = Layout::new();
        let settings = layout.settings(
            r#"
            [[address_book]]
            url = "not a url"
            user = "alice"
            password = "pw"
        "#,
        );

        let result = ValidatedConfig::from_raw(&cli(&[]), &toml(&settings));
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let layout = Layout::new();
        let settings = layout.settings(
            r#"
            [[address_book]]
            url = "ftp://example.com/book"
            user = "alice"
            password = "pw"
        "#,
        );

        let result = ValidatedConfig::from_raw(&cli(&[]), &toml(&settings));

        match result {
            Err(ConfigError::InvalidUrl { reason, .. }) => assert!(reason.contains("ftp")),
            other => panic!("Expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn display_never_contains_password() {
        let layout = Layout::new();
        let settings = layout.settings(
            r#"
            [[address_book]]
            url = "https://example.com/book"
            user = "alice"
            password = "hunter2"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli(&[]), &toml(&settings)).unwrap();

        assert!(config.to_string().contains("https://example.com/book"));
        assert!(!config.to_string().contains("hunter2"));
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}

mod precedence {
    use super::*;

    #[test]
    fn timeout_defaults_to_thirty_seconds() {
        let layout = Layout::new();
        let config = ValidatedConfig::from_raw(&cli(&[]), &toml(&layout.settings(""))).unwrap();

        assert_eq!(config.http_timeout, Duration::from_secs(30));
    }

    #[test]
    fn toml_timeout_overrides_default() {
        let layout = Layout::new();
        let config =
            ValidatedConfig::from_raw(&cli(&[]), &toml(&layout.settings("[http]\ntimeout = 7")))
                .unwrap();

        assert_eq!(config.http_timeout, Duration::from_secs(7));
    }

    #[test]
    fn cli_timeout_overrides_toml() {
        let layout = Layout::new();
        let config = ValidatedConfig::from_raw(
            &cli(&["--timeout", "3"]),
            &toml(&layout.settings("[http]\ntimeout = 7")),
        )
        .unwrap();

        assert_eq!(config.http_timeout, Duration::from_secs(3));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let layout = Layout::new();
        let result =
            ValidatedConfig::from_raw(&cli(&["--timeout", "0"]), &toml(&layout.settings("")));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDuration {
                field: "http.timeout",
                ..
            })
        ));
    }

    #[test]
    fn verbose_uses_or_semantics() {
        let layout = Layout::new();
        let settings = format!("verbose = true\n{}", layout.settings(""));

        let from_toml = ValidatedConfig::from_raw(&cli(&[]), &toml(&settings)).unwrap();
        assert!(from_toml.verbose);

        let from_cli = ValidatedConfig::from_raw(&cli(&["-v"]), &toml(&layout.settings(""))).unwrap();
        assert!(from_cli.verbose);

        let neither = ValidatedConfig::from_raw(&cli(&[]), &toml(&layout.settings(""))).unwrap();
        assert!(!neither.verbose);
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_uses_explicit_config_path() {
        let layout = Layout::new();
        let settings_path = layout.path("settings.toml");
        std::fs::write(&settings_path, layout.settings("")).unwrap();

        let path_arg = settings_path.display().to_string();
        let config = ValidatedConfig::load(&cli(&["--config", &path_arg])).unwrap();

        assert_eq!(config.microsip_path, layout.executable());
    }

    #[test]
    fn load_missing_explicit_config_returns_file_read() {
        let layout = Layout::new();
        let path_arg = layout.path("missing.toml").display().to_string();

        let result = ValidatedConfig::load(&cli(&["--config", &path_arg]));
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn discover_returns_first_existing_candidate() {
        let layout = Layout::new();
        let candidates = vec![
            layout.path("nope/settings.toml"),
            layout.path("MicroSIP.ini"),
            layout.path("a.ini"),
        ];

        assert_eq!(
            discover_settings(&candidates).unwrap(),
            layout.path("MicroSIP.ini")
        );
    }

    #[test]
    fn discover_lists_all_candidates_when_none_exist() {
        let candidates = vec![PathBuf::from("/nonexistent/one"), PathBuf::from("/nonexistent/two")];

        match discover_settings(&candidates) {
            Err(err @ ConfigError::SettingsNotFound { .. }) => {
                let message = err.to_string();
                assert!(message.contains("/nonexistent/one"));
                assert!(message.contains("/nonexistent/two"));
            }
            other => panic!("Expected SettingsNotFound, got {other:?}"),
        }
    }

    #[test]
    fn write_default_config_creates_parsable_file() {
        let layout = Layout::new();
        let path = layout.path("generated.toml");

        write_default_config(&path).unwrap();

        assert!(Path::new(&path).is_file());
        assert!(TomlConfig::load(&path).is_ok());
    }
}
