//! Field validators
//!
//! Every validator trims surrounding whitespace first and, on failure,
//! reports exactly one [`FieldError`] chosen by a fixed precedence.
//!
//! "Whitespace" here is every character at or below U+0020, ASCII control
//! characters included. Unicode spaces such as U+00A0 are kept and fail the
//! pattern checks.

use super::FieldError;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 25;
pub const ZIP_LEN: usize = 5;
/// The only accepted email domain. Not configurable.
pub const EMAIL_SUFFIX: &str = "@farmingdale.edu";

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]{2,25}$").unwrap());

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@farmingdale\.edu$").unwrap());

// `\d` is Unicode-aware in the regex crate, so digit classes are spelled out.
static DOB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/(19|20)[0-9]{2}$").unwrap()
});

static ZIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{5}$").unwrap());

/// Strip leading and trailing characters at or below U+0020.
fn trim_field(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Validate a first or last name: 2 to 25 ASCII letters.
pub fn validate_name(text: &str) -> Result<(), FieldError> {
    let name = trim_field(text);
    if NAME_RE.is_match(name) {
        return Ok(());
    }

    // Length in UTF-16 code units, so astral characters count twice
    let len = name.encode_utf16().count();
    Err(if name.is_empty() {
        FieldError::Empty
    } else if len < NAME_MIN_LEN {
        FieldError::TooShort { min: NAME_MIN_LEN }
    } else if len > NAME_MAX_LEN {
        FieldError::TooLong { max: NAME_MAX_LEN }
    } else {
        FieldError::NotLetters
    })
}

/// Validate a campus email address ending in [`EMAIL_SUFFIX`].
pub fn validate_email(text: &str) -> Result<(), FieldError> {
    let email = trim_field(text);
    if EMAIL_RE.is_match(email) {
        return Ok(());
    }

    Err(if email.is_empty() {
        FieldError::Empty
    } else if !email.contains('@') {
        FieldError::MissingAt
    } else if !email.ends_with(EMAIL_SUFFIX) {
        FieldError::WrongDomain {
            suffix: EMAIL_SUFFIX,
        }
    } else {
        FieldError::InvalidEmail
    })
}

/// Parse a `MM/DD/YYYY` date of birth.
///
/// The pattern admits months 01-12, days 01-31 and years 1900-2099; the
/// calendar check then rejects days past the end of the month, with
/// February getting 29 days in Gregorian leap years. Dates in the future
/// are accepted.
pub fn parse_date_of_birth(text: &str) -> Result<NaiveDate, FieldError> {
    let dob = trim_field(text);
    if !DOB_RE.is_match(dob) {
        return Err(FieldError::DateFormat);
    }

    let parts: Vec<&str> = dob.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(FieldError::DateUnparseable);
    };
    let month: u32 = month.parse().map_err(|_| FieldError::DateUnparseable)?;
    let day: u32 = day.parse().map_err(|_| FieldError::DateUnparseable)?;
    let year: i32 = year.parse().map_err(|_| FieldError::DateUnparseable)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(FieldError::DayOutOfRange)
}

/// Validate a `MM/DD/YYYY` date of birth.
pub fn validate_date_of_birth(text: &str) -> Result<(), FieldError> {
    parse_date_of_birth(text).map(|_| ())
}

/// Validate a five digit zip code.
pub fn validate_zip_code(text: &str) -> Result<(), FieldError> {
    let zip = trim_field(text);
    if ZIP_RE.is_match(zip) {
        return Ok(());
    }

    Err(if zip.is_empty() {
        FieldError::Empty
    } else if !zip.chars().all(|c| c.is_ascii_digit()) {
        FieldError::NotDigits
    } else {
        FieldError::ZipLength { len: ZIP_LEN }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepts_letters_within_bounds() {
            assert_eq!(validate_name("Al"), Ok(()));
            assert_eq!(validate_name("Jane"), Ok(()));
            assert_eq!(validate_name("McDonald"), Ok(()));
            assert_eq!(validate_name(&"a".repeat(25)), Ok(()));
        }

        #[test]
        fn test_trims_surrounding_whitespace() {
            assert_eq!(validate_name("  Jane \t"), Ok(()));
        }

        #[test]
        fn test_trims_control_characters() {
            assert_eq!(validate_name("\u{0001}Jane\u{001F}"), Ok(()));
            assert_eq!(validate_name("\r\nJane\0"), Ok(()));
        }

        #[test]
        fn test_keeps_unicode_spaces() {
            assert_eq!(validate_name("\u{00A0}Jane"), Err(FieldError::NotLetters));
            assert_eq!(validate_name("Jane\u{2003}"), Err(FieldError::NotLetters));
            assert_eq!(validate_name("\u{00A0}"), Err(FieldError::TooShort { min: 2 }));
        }

        #[test]
        fn test_length_counts_utf16_units() {
            // One scalar value, two UTF-16 units
            assert_eq!(validate_name("\u{1D400}"), Err(FieldError::NotLetters));
            assert_eq!(
                validate_name(&"\u{1D400}".repeat(13)),
                Err(FieldError::TooLong { max: 25 })
            );
        }

        #[test]
        fn test_empty() {
            assert_eq!(validate_name(""), Err(FieldError::Empty));
            assert_eq!(validate_name("   "), Err(FieldError::Empty));
        }

        #[test]
        fn test_too_short() {
            assert_eq!(validate_name("A"), Err(FieldError::TooShort { min: 2 }));
            // Length is checked before character class
            assert_eq!(validate_name("7"), Err(FieldError::TooShort { min: 2 }));
        }

        #[test]
        fn test_too_long() {
            assert_eq!(
                validate_name(&"a".repeat(26)),
                Err(FieldError::TooLong { max: 25 })
            );
            assert_eq!(
                validate_name(&"1".repeat(30)),
                Err(FieldError::TooLong { max: 25 })
            );
        }

        #[test]
        fn test_non_letters() {
            assert_eq!(validate_name("Al3x"), Err(FieldError::NotLetters));
            assert_eq!(validate_name("Mary Ann"), Err(FieldError::NotLetters));
            assert_eq!(validate_name("O'Brien"), Err(FieldError::NotLetters));
            assert_eq!(validate_name("Zoë"), Err(FieldError::NotLetters));
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepts_campus_addresses() {
            assert_eq!(validate_email("jdoe@farmingdale.edu"), Ok(()));
            assert_eq!(validate_email("jane.doe@farmingdale.edu"), Ok(()));
            assert_eq!(validate_email("a_b%c+d-e@farmingdale.edu"), Ok(()));
            assert_eq!(validate_email(" jdoe42@farmingdale.edu "), Ok(()));
        }

        #[test]
        fn test_empty() {
            assert_eq!(validate_email(""), Err(FieldError::Empty));
        }

        #[test]
        fn test_missing_at() {
            assert_eq!(validate_email("jdoe.farmingdale.edu"), Err(FieldError::MissingAt));
        }

        #[test]
        fn test_wrong_domain() {
            let expected = Err(FieldError::WrongDomain {
                suffix: EMAIL_SUFFIX,
            });
            assert_eq!(validate_email("jdoe@gmail.com"), expected);
            assert_eq!(validate_email("jdoe@farmingdale.edu.com"), expected);
            assert_eq!(validate_email("jdoe@FARMINGDALE.EDU"), expected);
        }

        #[test]
        fn test_bad_local_part_is_catch_all() {
            assert_eq!(validate_email("@farmingdale.edu"), Err(FieldError::InvalidEmail));
            assert_eq!(
                validate_email("j doe@farmingdale.edu"),
                Err(FieldError::InvalidEmail)
            );
            assert_eq!(
                validate_email("a@b@farmingdale.edu"),
                Err(FieldError::InvalidEmail)
            );
        }
    }

    mod date_of_birth {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepts_real_dates() {
            assert_eq!(validate_date_of_birth("05/12/2000"), Ok(()));
            assert_eq!(validate_date_of_birth("01/31/1999"), Ok(()));
            assert_eq!(validate_date_of_birth("12/31/2099"), Ok(()));
        }

        #[test]
        fn test_parse_returns_date() {
            assert_eq!(
                parse_date_of_birth("05/12/2000"),
                Ok(NaiveDate::from_ymd_opt(2000, 5, 12).unwrap())
            );
        }

        #[test]
        fn test_leap_years() {
            assert_eq!(validate_date_of_birth("02/29/2024"), Ok(()));
            assert_eq!(validate_date_of_birth("02/29/2000"), Ok(()));
            assert_eq!(
                validate_date_of_birth("02/29/2023"),
                Err(FieldError::DayOutOfRange)
            );
            assert_eq!(
                validate_date_of_birth("02/29/1900"),
                Err(FieldError::DayOutOfRange)
            );
            assert_eq!(
                validate_date_of_birth("02/30/2024"),
                Err(FieldError::DayOutOfRange)
            );
        }

        #[test]
        fn test_thirty_day_months() {
            for month in ["04", "06", "09", "11"] {
                assert_eq!(validate_date_of_birth(&format!("{month}/30/2020")), Ok(()));
                assert_eq!(
                    validate_date_of_birth(&format!("{month}/31/2020")),
                    Err(FieldError::DayOutOfRange)
                );
            }
        }

        #[test]
        fn test_thirty_one_day_months() {
            for month in ["01", "03", "05", "07", "08", "10", "12"] {
                assert_eq!(validate_date_of_birth(&format!("{month}/31/2020")), Ok(()));
            }
        }

        #[test]
        fn test_format_failures() {
            for bad in [
                "",
                "13/01/2020",
                "00/10/2020",
                "01/00/2020",
                "01/32/2020",
                "1/5/2020",
                "01-05-2020",
                "01/05/1899",
                "01/05/2100",
                "01/05/20201",
            ] {
                assert_eq!(
                    validate_date_of_birth(bad),
                    Err(FieldError::DateFormat),
                    "input {bad:?}"
                );
            }
        }

        #[test]
        fn test_future_dates_are_accepted() {
            assert_eq!(validate_date_of_birth("01/01/2090"), Ok(()));
        }

        #[test]
        fn test_trims_surrounding_whitespace() {
            assert_eq!(validate_date_of_birth(" 02/29/2024 "), Ok(()));
            assert_eq!(validate_date_of_birth("\t02/29/2024\u{000B}"), Ok(()));
            assert_eq!(
                validate_date_of_birth("\u{00A0}02/29/2024"),
                Err(FieldError::DateFormat)
            );
        }
    }

    mod zip_code {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepts_five_digits() {
            assert_eq!(validate_zip_code("12345"), Ok(()));
            assert_eq!(validate_zip_code(" 11735 "), Ok(()));
        }

        #[test]
        fn test_empty() {
            assert_eq!(validate_zip_code(""), Err(FieldError::Empty));
        }

        #[test]
        fn test_non_digits() {
            assert_eq!(validate_zip_code("12a45"), Err(FieldError::NotDigits));
            assert_eq!(validate_zip_code("1234-5678"), Err(FieldError::NotDigits));
            // Unicode digits are not ASCII digits
            assert_eq!(validate_zip_code("١٢٣٤٥"), Err(FieldError::NotDigits));
        }

        #[test]
        fn test_unicode_space_padding_is_not_trimmed() {
            assert_eq!(validate_zip_code("\u{2003}11735"), Err(FieldError::NotDigits));
            assert_eq!(validate_zip_code("11735\u{00A0}"), Err(FieldError::NotDigits));
            assert_eq!(validate_zip_code("\u{0007}11735\u{0007}"), Ok(()));
        }

        #[test]
        fn test_wrong_length() {
            assert_eq!(validate_zip_code("1234"), Err(FieldError::ZipLength { len: 5 }));
            assert_eq!(
                validate_zip_code("123456"),
                Err(FieldError::ZipLength { len: 5 })
            );
        }
    }
}
