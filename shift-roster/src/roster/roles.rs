//! Daily role assignments
//!
//! The roles tab mirrors a day grid: the cell at an operator's grid-relative
//! address holds `location|shift|vehicle|role` for that operator.

use log::debug;
use serde::Serialize;

use super::grid;
use crate::error::RosterError;
use crate::sheets::{Grid, SheetStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorRoles {
    pub location: String,
    pub shift: String,
    pub vehicle: String,
    pub role: String,
}

impl OperatorRoles {
    /// Split a `location|shift|vehicle|role` cell. Extra segments are ignored.
    pub fn parse(value: &str) -> Result<Self, RosterError> {
        let parts: Vec<&str> = value.split('|').map(str::trim).collect();
        match parts.as_slice() {
            [location, shift, vehicle, role, ..] => Ok(Self {
                location: location.to_string(),
                shift: shift.to_string(),
                vehicle: vehicle.to_string(),
                role: role.to_string(),
            }),
            _ => Err(RosterError::MalformedRoles {
                value: value.to_string(),
            }),
        }
    }
}

/// Tab prefix of a roles reference, `Roles!A1` -> `Roles!`
fn roles_tab_prefix(roles_range: &str) -> &str {
    match roles_range.find('!') {
        Some(pos) => &roles_range[..=pos],
        None => "",
    }
}

/// Look up the roles assigned to `name` in an already fetched day grid
pub async fn operator_roles(
    store: &dyn SheetStore,
    day: &Grid,
    name: &str,
    roles_range: &str,
) -> Result<OperatorRoles, RosterError> {
    let relative = grid::resolve(day, name)?;
    let cell = format!("{}{}", roles_tab_prefix(roles_range), relative);
    debug!("Reading roles of '{}' from '{}'", name, cell);
    let value = store.read_cell(&cell).await?;
    OperatorRoles::parse(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::memory::MemoryStore;

    fn day() -> Grid {
        vec![
            vec!["Rossi".to_string(), "".to_string()],
            vec!["".to_string(), "Bianchi".to_string()],
        ]
    }

    #[test]
    fn test_parse_roles_cell() {
        let roles = OperatorRoles::parse("Base Nord | Morning|AMB-3|Driver").unwrap();
        assert_eq!(roles.location, "Base Nord");
        assert_eq!(roles.shift, "Morning");
        assert_eq!(roles.vehicle, "AMB-3");
        assert_eq!(roles.role, "Driver");
        assert!(matches!(
            OperatorRoles::parse("Base Nord|Morning"),
            Err(RosterError::MalformedRoles { .. })
        ));
    }

    #[test]
    fn test_roles_tab_prefix() {
        assert_eq!(roles_tab_prefix("Roles!A1:Z40"), "Roles!");
        assert_eq!(roles_tab_prefix("A1"), "");
    }

    #[tokio::test]
    async fn test_operator_roles_reads_relative_cell() {
        let store = MemoryStore::new().with_range("Roles!B2", &[&["Base Sud|Night|AMB-1|Medic"]]);
        let roles = operator_roles(&store, &day(), "bianchi", "Roles!A1")
            .await
            .unwrap();
        assert_eq!(roles.role, "Medic");
        assert_eq!(store.reads(), vec!["Roles!B2"]);
    }

    #[tokio::test]
    async fn test_operator_roles_unknown_operator() {
        let store = MemoryStore::new();
        let err = operator_roles(&store, &day(), "Verdi", "Roles!A1")
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::NotFound { .. }));
        assert_eq!(store.read_calls(), 0);
    }

    #[tokio::test]
    async fn test_operator_roles_empty_cell() {
        let store = MemoryStore::new();
        let err = operator_roles(&store, &day(), "Rossi", "Roles!A1")
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::Store(_)));
    }
}
