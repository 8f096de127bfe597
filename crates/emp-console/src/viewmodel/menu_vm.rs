//! Menu ViewModel
//!
//! Sidebar selection and logout request. The app root reacts to both
//! after the frame is rendered.

use emp_core::domain::ConsolePanel;

#[derive(Debug, Default)]
pub struct MenuViewModel {
    pub active: ConsolePanel,
    changed: Option<ConsolePanel>,
    logout_requested: bool,
}

impl MenuViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, panel: ConsolePanel) {
        if self.active != panel {
            self.active = panel;
            self.changed = Some(panel);
        }
    }

    pub fn take_changed(&mut self) -> Option<ConsolePanel> {
        self.changed.take()
    }

    pub fn request_logout(&mut self) {
        self.logout_requested = true;
    }

    pub fn take_logout(&mut self) -> bool {
        std::mem::take(&mut self.logout_requested)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_reports_change_once() {
        let mut vm = MenuViewModel::new();
        assert_eq!(vm.active, ConsolePanel::Employees);

        vm.select(ConsolePanel::BusinessDetails);
        assert_eq!(vm.take_changed(), Some(ConsolePanel::BusinessDetails));
        assert_eq!(vm.take_changed(), None);

        vm.select(ConsolePanel::BusinessDetails);
        assert_eq!(vm.take_changed(), None);
    }

    #[test]
    fn test_reset_returns_to_employees() {
        let mut vm = MenuViewModel::new();
        vm.select(ConsolePanel::Timecard);
        vm.request_logout();
        vm.reset();
        assert_eq!(vm.active, ConsolePanel::Employees);
        assert!(!vm.take_logout());
        assert_eq!(vm.take_changed(), None);
    }

    #[test]
    fn test_logout_flag_is_consumed() {
        let mut vm = MenuViewModel::new();
        vm.request_logout();
        assert!(vm.take_logout());
        assert!(!vm.take_logout());
    }
}
