//! Fixture generator sizing.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_groups() -> u32 {
    3
}

const fn default_teachers() -> u32 {
    5
}

const fn default_subjects() -> u32 {
    8
}

const fn default_students() -> u32 {
    50
}

const fn default_grades_per_subject() -> u32 {
    20
}

const fn default_history_days() -> u32 {
    365
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SeedConfig {
    #[serde(default = "default_groups")]
    pub groups: u32,

    #[serde(default = "default_teachers")]
    pub teachers: u32,

    #[serde(default = "default_subjects")]
    pub subjects: u32,

    #[serde(default = "default_students")]
    pub students: u32,

    /// Grades generated for every student × subject pair.
    #[serde(default = "default_grades_per_subject")]
    pub grades_per_subject: u32,

    /// Grade dates are drawn from this many days back up to today.
    #[serde(default = "default_history_days")]
    pub history_days: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            groups: default_groups(),
            teachers: default_teachers(),
            subjects: default_subjects(),
            students: default_students(),
            grades_per_subject: default_grades_per_subject(),
            history_days: default_history_days(),
        }
    }
}

impl SeedConfig {
    /// Students need a group and subjects need a teacher to reference.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a parent count is zero while
    /// dependents are requested.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.students > 0 && self.groups == 0 {
            return Err(ConfigError::InvalidValue {
                field: "seed.groups".into(),
                reason: "students require at least one group".into(),
            });
        }
        if self.subjects > 0 && self.teachers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "seed.teachers".into(),
                reason: "subjects require at least one teacher".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SeedConfig::default();
        assert_eq!(config.students, 50);
        assert_eq!(config.grades_per_subject, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn students_without_groups_rejected() {
        let config = SeedConfig {
            groups: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("seed.groups"));
    }

    #[test]
    fn subjects_without_teachers_rejected() {
        let config = SeedConfig {
            teachers: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let empty = SeedConfig {
            teachers: 0,
            subjects: 0,
            ..Default::default()
        };
        assert!(empty.validate().is_ok());
    }
}
