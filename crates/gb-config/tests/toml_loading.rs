//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use gb_config::GradebookConfig;

/// Point the user-global config lookup into the jail so a real
/// `~/.config/gradebook/config.toml` cannot leak into assertions.
fn isolate_user_config(jail: &mut Jail) {
    let dir = jail.directory().to_path_buf();
    jail.set_env("XDG_CONFIG_HOME", dir.display());
    jail.set_env("HOME", dir.display());
}

#[test]
fn loads_database_path_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/gradebook/school.db"
"#,
        )?;

        let config: GradebookConfig = Figment::from(Serialized::defaults(GradebookConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/gradebook/school.db");
        assert_eq!(config.seed.students, 50);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".gradebook")?;
        jail.create_file(
            ".gradebook/config.toml",
            r"
[seed]
groups = 2
students = 10
grades_per_subject = 3

[general]
default_limit = 7
",
        )?;

        let config = GradebookConfig::load().expect("config loads");
        assert_eq!(config.seed.groups, 2);
        assert_eq!(config.seed.students, 10);
        assert_eq!(config.seed.grades_per_subject, 3);
        assert_eq!(config.seed.teachers, 5, "unset keys keep defaults");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".gradebook")?;
        jail.create_file(
            ".gradebook/config.toml",
            r#"
[database]
path = "from-file.db"
"#,
        )?;
        jail.set_env("GRADEBOOK_DATABASE__PATH", "from-env.db");
        jail.set_env("GRADEBOOK_SEED__SUBJECTS", "4");

        let config = GradebookConfig::load().expect("config loads");
        assert_eq!(config.database.path, "from-env.db");
        assert_eq!(config.seed.subjects, 4);
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("GRADEBOOK_SEED__STUDENTS", "lots");

        let err = GradebookConfig::load().expect_err("non-numeric count should fail");
        assert!(err.to_string().starts_with("Configuration error"));
        Ok(())
    });
}
