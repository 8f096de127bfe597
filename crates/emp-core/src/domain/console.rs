//! Console shell navigation

/// Content panels reachable from the sidebar, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConsolePanel {
    #[default]
    Employees,
    Timecard,
    PunchDetails,
    RolePermissions,
    BusinessDetails,
}

impl ConsolePanel {
    pub const ALL: [ConsolePanel; 5] = [
        ConsolePanel::Employees,
        ConsolePanel::Timecard,
        ConsolePanel::PunchDetails,
        ConsolePanel::RolePermissions,
        ConsolePanel::BusinessDetails,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ConsolePanel::Employees => "employees",
            ConsolePanel::Timecard => "timecard",
            ConsolePanel::PunchDetails => "punch-details",
            ConsolePanel::RolePermissions => "role-permissions",
            ConsolePanel::BusinessDetails => "business-details",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConsolePanel::Employees => "Employees",
            ConsolePanel::Timecard => "Timecard",
            ConsolePanel::PunchDetails => "Punch Details",
            ConsolePanel::RolePermissions => "Role Permissions",
            ConsolePanel::BusinessDetails => "Business Details",
        }
    }

    /// Panels that only show a "page under progress" notice.
    pub fn is_placeholder(&self) -> bool {
        matches!(
            self,
            ConsolePanel::Timecard | ConsolePanel::PunchDetails | ConsolePanel::RolePermissions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order_and_ids() {
        let ids: Vec<&str> = ConsolePanel::ALL.iter().map(|p| p.id()).collect();
        assert_eq!(
            ids,
            vec!["employees", "timecard", "punch-details", "role-permissions", "business-details"]
        );
    }

    #[test]
    fn test_default_panel_is_employees() {
        assert_eq!(ConsolePanel::default(), ConsolePanel::Employees);
    }

    #[test]
    fn test_placeholder_panels() {
        let placeholders: Vec<ConsolePanel> = ConsolePanel::ALL
            .into_iter()
            .filter(ConsolePanel::is_placeholder)
            .collect();
        assert_eq!(
            placeholders,
            vec![
                ConsolePanel::Timecard,
                ConsolePanel::PunchDetails,
                ConsolePanel::RolePermissions
            ]
        );
    }
}
