use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn all() -> Vec<Self> {
        vec![Self::Name, Self::Email, Self::Message]
    }

    // form control name
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "you@example.com",
            Self::Message => "What would you like to talk about?",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Name | Self::Message => "text",
        }
    }

    pub fn multiline(self) -> bool {
        self == Self::Message
    }
}

// ContactForm
//
// the three fields of the contact form.  the form is display-only: there is
// nowhere to send it, so submitting leaves everything as it was
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn update(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::all()
            .into_iter()
            .all(|field| self.get(field).trim().is_empty())
    }

    pub fn submit(&self) {
        debug!(
            empty = self.is_empty(),
            "contact form submitted, no submission handler configured"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_and_get() {
        let mut form = ContactForm::default();
        assert!(form.is_empty());

        form.update(ContactField::Email, String::from("a@b.c"));
        form.update(ContactField::Message, String::from("hi"));

        assert_eq!(form.get(ContactField::Email), "a@b.c");
        assert_eq!(form.get(ContactField::Message), "hi");
        assert_eq!(form.get(ContactField::Name), "");
        assert!(!form.is_empty());
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let mut form = ContactForm::default();
        form.update(ContactField::Name, String::from("   "));
        assert!(form.is_empty());
    }

    #[test]
    fn test_submit_changes_nothing() {
        let mut form = ContactForm::default();
        form.update(ContactField::Name, String::from("Sam"));
        let before = form.clone();

        form.submit();
        assert_eq!(form, before);
    }

    #[test]
    fn test_field_metadata() {
        let names: Vec<&str> = ContactField::all().into_iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "email", "message"]);
        assert!(ContactField::Message.multiline());
        assert_eq!(ContactField::Email.input_type(), "email");
    }
}
