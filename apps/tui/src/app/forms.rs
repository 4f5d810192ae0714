use crate::api::{Credentials, NewBooking};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// Admin login form. The password is never rendered in clear text.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub field: LoginField,
    pub username: String,
    pub password: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    pub fn current_value_mut(&mut self) -> &mut String {
        match self.field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        }
    }

    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.chars().count())
    }
}

/// Fields of the new booking form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingField {
    #[default]
    Name,
    Phone,
    Email,
    Date,
    Slot,
}

impl BookingField {
    pub const ALL: [Self; 5] = [Self::Name, Self::Phone, Self::Email, Self::Date, Self::Slot];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Date => "Date (YYYY-MM-DD)",
            Self::Slot => "Slot (HH:MM)",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Phone,
            Self::Phone => Self::Email,
            Self::Email => Self::Date,
            Self::Date => Self::Slot,
            Self::Slot => Self::Name,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Slot,
            Self::Phone => Self::Name,
            Self::Email => Self::Phone,
            Self::Date => Self::Email,
            Self::Slot => Self::Date,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub field: BookingField,
    pub values: NewBooking,
    pub submitting: bool,
    pub error: Option<String>,
}

impl BookingForm {
    pub const fn value(&self, field: BookingField) -> &String {
        match field {
            BookingField::Name => &self.values.name,
            BookingField::Phone => &self.values.phone,
            BookingField::Email => &self.values.email,
            BookingField::Date => &self.values.date,
            BookingField::Slot => &self.values.slot,
        }
    }

    pub fn current_value_mut(&mut self) -> &mut String {
        match self.field {
            BookingField::Name => &mut self.values.name,
            BookingField::Phone => &mut self.values.phone,
            BookingField::Email => &mut self.values.email,
            BookingField::Date => &mut self.values.date,
            BookingField::Slot => &mut self.values.slot,
        }
    }

    /// The first empty field, if any.
    pub fn missing_field(&self) -> Option<BookingField> {
        BookingField::ALL
            .into_iter()
            .find(|field| self.value(*field).trim().is_empty())
    }

    pub fn candidate(&self) -> NewBooking {
        NewBooking {
            name: self.values.name.trim().to_string(),
            phone: self.values.phone.trim().to_string(),
            email: self.values.email.trim().to_string(),
            date: self.values.date.trim().to_string(),
            slot: self.values.slot.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_cycle_visits_every_field() {
        let mut field = BookingField::Name;
        for expected in BookingField::ALL.iter().skip(1) {
            field = field.next();
            assert_eq!(field, *expected);
        }
        assert_eq!(field.next(), BookingField::Name);
        assert_eq!(BookingField::Name.prev(), BookingField::Slot);
    }

    #[test]
    fn missing_field_points_at_first_blank() {
        let mut form = BookingForm::default();
        form.values.name = "Alice".to_string();
        form.values.phone = "9123456780".to_string();
        assert_eq!(form.missing_field(), Some(BookingField::Email));

        form.values.email = "alice@example.com".to_string();
        form.values.date = "2025-07-06".to_string();
        form.values.slot = " 15:30 ".to_string();
        assert_eq!(form.missing_field(), None);
        assert_eq!(form.candidate().slot, "15:30");
    }

    #[test]
    fn password_is_masked() {
        let form = LoginForm {
            password: "secret".to_string(),
            ..LoginForm::default()
        };
        assert_eq!(form.masked_password(), "******");
    }
}
