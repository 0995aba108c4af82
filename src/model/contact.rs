use std::fmt;

/// The three fields a contact carries. Used to say which field a
/// validation error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
}

impl Field {
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Phone => "Phone number",
            Field::Email => "Email",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Field::Name => "Enter Name: ",
            Field::Phone => "Enter Phone Number: ",
            Field::Email => "Enter Email: ",
        }
    }

    pub fn duplicate_message(&self) -> &'static str {
        match self {
            Field::Name => "Contact with this name already exists!",
            Field::Phone => "Phone number already exists!",
            Field::Email => "Email already exists!",
        }
    }
}

/// The fields that carry a format rule. Names only need to be non-blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Phone,
    Email,
}

impl Pattern {
    pub fn message(&self) -> &'static str {
        match self {
            Pattern::Phone => "Invalid phone number! Must be 10 digits.",
            Pattern::Email => "Invalid email format!",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A stored name/phone/email triple. Fields are fixed once the contact
/// is added; there is no update path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Case-folded name, the key of the name index.
    pub fn normalized_name(&self) -> String {
        normalize(&self.name)
    }

    /// Case-folded email, the key of the email index.
    pub fn normalized_email(&self) -> String {
        normalize(&self.email)
    }
}

/// Case-fold a name or email for comparison. Phones are never normalized.
/// Folds one character at a time, so the result never depends on where a
/// character sits in the word (no final-sigma rule).
pub fn normalize(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {:<20} Phone: {:<15} Email: {}",
            self.name, self.phone, self.email
        )
    }
}
