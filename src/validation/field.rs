//! The closed set of registration fields

/// One of the five registration form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    FirstName,
    LastName,
    Email,
    DateOfBirth,
    ZipCode,
}

impl FieldKind {
    /// All fields in display order
    pub const ALL: [FieldKind; 5] = [
        FieldKind::FirstName,
        FieldKind::LastName,
        FieldKind::Email,
        FieldKind::DateOfBirth,
        FieldKind::ZipCode,
    ];

    /// Position of this field in [`FieldKind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Field for a display position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Stable identifier used in logs
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::DateOfBirth => "date_of_birth",
            Self::ZipCode => "zip_code",
        }
    }

    /// Label shown next to the input and on the confirmation screen
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::DateOfBirth => "Date of Birth",
            Self::ZipCode => "Zip Code",
        }
    }

    /// Sentence subject used when describing a failure
    pub fn subject(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::DateOfBirth => "Date",
            Self::ZipCode => "Zip code",
        }
    }

    /// Placeholder text shown while the field is empty
    pub fn prompt(self) -> &'static str {
        match self {
            Self::FirstName => "Enter first name (2-25 letters)",
            Self::LastName => "Enter last name (2-25 letters)",
            Self::Email => "Enter email (@farmingdale.edu)",
            Self::DateOfBirth => "MM/DD/YYYY",
            Self::ZipCode => "5-digit zip code",
        }
    }
}
