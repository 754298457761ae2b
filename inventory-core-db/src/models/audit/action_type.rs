use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of store mutation recorded in the change log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "action_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Add,
    Edit,
    Delete,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionType::Add => write!(f, "add"),
            ActionType::Edit => write!(f, "edit"),
            ActionType::Delete => write!(f, "delete"),
        }
    }
}

impl FromStr for ActionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(ActionType::Add),
            "edit" => Ok(ActionType::Edit),
            "delete" => Ok(ActionType::Delete),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips() {
        for action in [ActionType::Add, ActionType::Edit, ActionType::Delete] {
            assert_eq!(action.to_string().parse::<ActionType>(), Ok(action));
        }
        assert!("rename".parse::<ActionType>().is_err());
    }
}
