//! Credentials form - field values local to the sign-in screen

use crate::messages::ui_events::FormFocus;

/// Single-line text input with a byte-offset cursor on a char boundary
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextField {
    pub value: String,
    pub cursor: usize,
}

impl TextField {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn enter_char(&mut self, c: char) {
        if self.cursor <= self.value.len() {
            self.value.insert(self.cursor, c);
            self.cursor += c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            let prev_pos = self.value[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.value.remove(prev_pos);
            self.cursor = prev_pos;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.value[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.value[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.value.len());
        }
    }

    /// Cursor position counted in characters, for terminal placement
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }
}

/// Field state of the credentials card. Discarded once a session exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialsForm {
    pub full_name: TextField,
    pub email: TextField,
    pub password: TextField,
    pub show_password: bool,
    pub remember_me: bool,
    /// A submission is waiting on the simulated round-trip
    pub is_loading: bool,
    pub focus: FormFocus,
}

impl CredentialsForm {
    pub fn focused_field(&self) -> Option<&TextField> {
        match self.focus {
            FormFocus::FullName => Some(&self.full_name),
            FormFocus::Email => Some(&self.email),
            FormFocus::Password => Some(&self.password),
            _ => None,
        }
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FormFocus::FullName => Some(&mut self.full_name),
            FormFocus::Email => Some(&mut self.email),
            FormFocus::Password => Some(&mut self.password),
            _ => None,
        }
    }

    /// Both required fields are filled
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    /// Password as displayed: masked unless visibility is toggled on
    pub fn password_display(&self) -> String {
        if self.show_password {
            self.password.value.clone()
        } else {
            "•".repeat(self.password.value.chars().count())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str) -> TextField {
        let mut f = TextField::default();
        for c in text.chars() {
            f.enter_char(c);
        }
        f
    }

    #[test]
    fn test_insert_in_middle() {
        let mut f = field("ac");
        f.move_cursor_left();
        f.enter_char('b');
        assert_eq!(f.value, "abc");
        assert_eq!(f.cursor, 2);
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut f = field("né");
        f.delete_char();
        assert_eq!(f.value, "n");
        assert_eq!(f.cursor, 1);
        f.delete_char();
        f.delete_char();
        assert!(f.is_empty());
        assert_eq!(f.cursor, 0);
    }

    #[test]
    fn test_cursor_stays_on_char_boundaries() {
        let mut f = field("é@x");
        f.move_cursor_left();
        f.move_cursor_left();
        f.move_cursor_left();
        assert_eq!(f.cursor, 0);
        f.move_cursor_right();
        assert_eq!(f.cursor, 2);
        assert_eq!(f.cursor_column(), 1);
        f.move_cursor_right();
        f.move_cursor_right();
        f.move_cursor_right();
        assert_eq!(f.cursor, f.value.len());
    }

    #[test]
    fn test_password_masking() {
        let mut form = CredentialsForm {
            password: field("pässword"),
            ..CredentialsForm::default()
        };
        assert_eq!(form.password_display(), "••••••••");
        form.show_password = true;
        assert_eq!(form.password_display(), "pässword");
    }

    #[test]
    fn test_only_text_controls_expose_a_field() {
        let mut form = CredentialsForm::default();
        assert!(form.focused_field().is_some());
        form.focus = FormFocus::Submit;
        assert!(form.focused_field_mut().is_none());
    }
}
