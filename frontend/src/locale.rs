//! The two UI languages the site ships with.
//!
//! Every translatable node carries one payload per language in `data-ka` /
//! `data-en` attributes, so a locale is little more than the attribute names
//! it reads plus the handful of literals that are not in the markup.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    /// Georgian, the default.
    #[default]
    Ka,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ka, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Ka => "ka",
            Locale::En => "en",
        }
    }

    /// Looks up a locale by its code. Codes are matched exactly, the same way
    /// they appear in `data-lang` attributes and in storage.
    pub fn from_code(code: &str) -> Option<Locale> {
        Locale::ALL.into_iter().find(|locale| locale.code() == code)
    }

    pub fn content_attr(self) -> &'static str {
        match self {
            Locale::Ka => "data-ka",
            Locale::En => "data-en",
        }
    }

    pub fn placeholder_attr(self) -> &'static str {
        match self {
            Locale::Ka => "data-placeholder-ka",
            Locale::En => "data-placeholder-en",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Locale::Ka => "WebAroundUs - ლამაზი და მომგებიანი ვებსაიტები თქვენი ბიზნესისთვის",
            Locale::En => "WebAroundUs - Beautiful and Profitable Websites for Your Business",
        }
    }

    /// Label shown on the contact form button right after a submission.
    pub fn sent_label(self) -> &'static str {
        match self {
            Locale::Ka => "გაგზავნილია! ✓",
            Locale::En => "Message Sent! ✓",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
