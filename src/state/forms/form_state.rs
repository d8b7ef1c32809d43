//! Form state management and the signup form

use super::field::FormField;
use crate::state::validation::{validate_signup, ValidationError};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    /// Field receiving keystrokes, `None` when focus is on a button row
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Signup form: first name, last name, institutional email and the submit button
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub active_field_index: usize,
}

impl SignupForm {
    /// Index of the submit button row
    pub const SUBMIT_INDEX: usize = 3;

    pub fn new() -> Self {
        Self {
            first_name: FormField::text("first_name", "First Name", "Enter your first name"),
            last_name: FormField::text("last_name", "Last Name", "Enter your last name"),
            email: FormField::text("email", "ASU Email Address", "yourname@asu.edu"),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit button is focused
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_INDEX
    }

    /// Validate the current input, returning the email exactly as typed
    pub fn submission(&self) -> Result<String, ValidationError> {
        validate_signup(
            self.first_name.as_text(),
            self.last_name.as_text(),
            self.email.as_text(),
        )?;
        Ok(self.email.as_text().to_string())
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        4 // first name, last name, email, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.first_name),
            1 => Some(&mut self.last_name),
            2 => Some(&mut self.email),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.first_name),
            1 => Some(&self.last_name),
            2 => Some(&self.email),
            // Index 3 is the submit button, no FormField for it
            _ => None,
        }
    }
}
