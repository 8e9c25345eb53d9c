use clap::{Arg, ArgAction, Command};

use crate::models::Preset;

const ENVIRONMENT_HELP: &str = "Credentials are read from OS_USERNAME, OS_PASSWORD, OS_TENANT_NAME, OS_AUTH_URL, OS_AUTH_SYSTEM and OS_REGION_NAME. All of them must be set.";

pub fn build_cli() -> Command {
    Command::new("cirax-cleanup")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List, and optionally cleanup cloud resources")
        .long_about(format!(
            "Lists keypairs, servers and images whose name starts with a prefix, and deletes them when --remove is given. Only the resource kinds selected with --keypairs, --servers and --images are looked at.\n\n{ENVIRONMENT_HELP}"
        ))
        .arg(
            Arg::new("startswith")
                .help("Name prefix of the resources to clean up (case-sensitive, no wildcards)")
                .required(true)
                .index(1),
        )
        .arg(remove_arg())
        .arg(
            Arg::new("keypairs")
                .long("keypairs")
                .help("Clean up keypairs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("servers")
                .long("servers")
                .help("Clean up servers")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("images")
                .long("images")
                .help("Clean up images")
                .action(ArgAction::SetTrue),
        )
        .arg(quiet_arg())
}

/// A command for a fixed preset: every resource kind, no prefix argument.
pub fn build_preset_cli(preset: Preset) -> Command {
    let (name, about) = match preset {
        Preset::Jenkins => (
            "cirax-jenkins-cleanup",
            "List, and optionally cleanup cloud resources left by Jenkins (names starting with 'J')",
        ),
        Preset::Nodepool => (
            "cirax-nodepool-cleanup",
            "List, and optionally cleanup cloud resources left by nodepool (names starting with 'devstack-xenserver')",
        ),
    };

    Command::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
        .after_help(ENVIRONMENT_HELP)
        .arg(remove_arg())
        .arg(quiet_arg())
}

fn remove_arg() -> Arg {
    Arg::new("remove")
        .long("remove")
        .help("Delete resources")
        .action(ArgAction::SetTrue)
}

fn quiet_arg() -> Arg {
    Arg::new("quiet")
        .short('q')
        .long("quiet")
        .help("Only log errors")
        .action(ArgAction::SetTrue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_debug_assert() {
        build_cli().debug_assert();
        build_preset_cli(Preset::Jenkins).debug_assert();
        build_preset_cli(Preset::Nodepool).debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["cirax-cleanup", "ci-"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        assert_eq!(matches.get_one::<String>("startswith").unwrap(), "ci-");
        assert!(!matches.get_flag("remove"));
        assert!(!matches.get_flag("keypairs"));
        assert!(!matches.get_flag("servers"));
        assert!(!matches.get_flag("images"));
        assert!(!matches.get_flag("quiet"));
    }

    #[test]
    fn test_cli_all_flags() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec![
                "cirax-cleanup",
                "--remove",
                "--images",
                "ci-",
                "--servers",
                "--keypairs",
                "-q",
            ])
            .unwrap();

        assert_eq!(matches.get_one::<String>("startswith").unwrap(), "ci-");
        assert!(matches.get_flag("remove"));
        assert!(matches.get_flag("keypairs"));
        assert!(matches.get_flag("servers"));
        assert!(matches.get_flag("images"));
        assert!(matches.get_flag("quiet"));
    }

    #[test]
    fn test_cli_requires_startswith() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["cirax-cleanup", "--remove"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_preset_cli_takes_no_prefix() {
        let app = build_preset_cli(Preset::Jenkins);
        assert!(app.try_get_matches_from(vec!["cirax-jenkins-cleanup", "J"]).is_err());

        let app = build_preset_cli(Preset::Nodepool);
        let matches = app
            .try_get_matches_from(vec!["cirax-nodepool-cleanup", "--remove"])
            .unwrap();
        assert!(matches.get_flag("remove"));
        assert!(!matches.get_flag("quiet"));
    }
}
