/// Whether the add-application dialog is showing
///
/// Saving is synchronous, so there is no separate "submitting" state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Text fields backing the add-application dialog
///
/// The contents survive closing the dialog; only a successful save
/// clears them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddAppForm {
    pub name: String,
    pub package_name: String,
    pub dialog: DialogState,
}

impl AddAppForm {
    pub fn is_open(&self) -> bool {
        self.dialog == DialogState::Open
    }

    pub fn open(&mut self) {
        self.dialog = DialogState::Open;
    }

    pub fn close(&mut self) {
        self.dialog = DialogState::Closed;
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_package_name(&mut self, package_name: &str) {
        self.package_name = package_name.to_string();
    }

    /// Empty both fields (after a successful save)
    pub fn clear(&mut self) {
        self.name.clear();
        self.package_name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_keeps_fields() {
        let mut form = AddAppForm::default();
        form.open();
        form.set_name("Banco");
        form.set_package_name("com.banco");
        form.close();
        assert!(!form.is_open());

        form.open();
        assert_eq!(form.name, "Banco");
        assert_eq!(form.package_name, "com.banco");
    }

    #[test]
    fn test_clear() {
        let mut form = AddAppForm::default();
        form.set_name("Banco");
        form.set_package_name("com.banco");
        form.clear();
        assert!(form.name.is_empty());
        assert!(form.package_name.is_empty());
    }
}
