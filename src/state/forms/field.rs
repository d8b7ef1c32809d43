//! Form field value objects

/// Represents a single text field with its label and placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    value: String,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
        }
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Get the display value for rendering, falling back to the placeholder
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_starts_empty() {
        let field = FormField::text("email", "Email", "yourname@asu.edu");
        assert!(field.is_empty());
        assert_eq!(field.as_text(), "");
        assert_eq!(field.name, "email");
        assert_eq!(field.label, "Email");
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text("first_name", "First Name", "");
        field.push_char('S');
        field.push_char('u');
        field.push_char('n');
        assert_eq!(field.as_text(), "Sun");

        field.pop_char();
        assert_eq!(field.as_text(), "Su");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = FormField::text("first_name", "First Name", "");
        field.pop_char();
        assert!(field.is_empty());
    }

    #[test]
    fn test_pop_char_removes_whole_multibyte_char() {
        let mut field = FormField::text("last_name", "Last Name", "");
        for c in "Niño".chars() {
            field.push_char(c);
        }
        field.pop_char();
        assert_eq!(field.as_text(), "Niñ");
    }

    #[test]
    fn test_display_value_uses_placeholder_when_empty() {
        let mut field = FormField::text("email", "Email", "yourname@asu.edu");
        assert_eq!(field.display_value(), "yourname@asu.edu");
        field.push_char('a');
        assert_eq!(field.display_value(), "a");
    }
}
