//! Employee form state.

use crate::api::{Employee, EmployeeId};

use super::roster::{EmployeeDraft, RosterError};

/// Whether submitting the form creates or updates an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Update(EmployeeId),
}

/// Field with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Rating,
}

/// Name/rating inputs plus the "being edited" marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub name: String,
    pub rating: String,
    mode: FormMode,
    focus: FormField,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Id of the employee being edited, if any.
    pub fn editing(&self) -> Option<EmployeeId> {
        match self.mode {
            FormMode::Create => None,
            FormMode::Update(id) => Some(id),
        }
    }

    /// Copy an employee into the form and mark it as being edited.
    pub fn begin_edit(&mut self, employee: &Employee) {
        self.name = employee.name.clone();
        self.rating = employee.rating.clone();
        self.mode = FormMode::Update(employee.id);
        self.focus = FormField::Name;
    }

    /// Clear inputs and the edit marker.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.rating.is_empty()
    }

    /// Validate the current inputs.
    pub fn draft(&self) -> Result<EmployeeDraft, RosterError> {
        EmployeeDraft::new(&self.name, &self.rating)
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Employee",
            FormMode::Update(_) => "Update Employee",
        }
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Rating,
            FormField::Rating => FormField::Name,
        };
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Rating => &mut self.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = EmployeeForm::new();
        for c in "Bob".chars() {
            form.push_char(c);
        }
        form.next_field();
        form.push_char('B');
        form.push_char('x');
        form.backspace();

        assert_eq!(form.name, "Bob");
        assert_eq!(form.rating, "B");
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.submit_label(), "Add Employee");
    }

    #[test]
    fn test_begin_edit_and_reset() {
        let mut form = EmployeeForm::new();
        form.begin_edit(&Employee {
            id: 3,
            name: "Cy".to_string(),
            rating: "C".to_string(),
        });

        assert_eq!(form.editing(), Some(3));
        assert_eq!(form.name, "Cy");
        assert_eq!(form.submit_label(), "Update Employee");

        form.reset();
        assert_eq!(form, EmployeeForm::new());
        assert!(form.is_blank());
    }
}
