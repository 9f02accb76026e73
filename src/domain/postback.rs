use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use super::error::ParseError;

static DO_POSTBACK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__doPostBack\('([^']+)','([^']+)").unwrap());

/// The control that "clicked" and its argument, as carried by a
/// `javascript:__doPostBack('target','argument')` link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostbackTarget {
    pub target: String,
    pub argument: String,
}

impl PostbackTarget {
    pub fn page_argument(pageno: u32) -> String {
        format!("Page${}", pageno)
    }

    pub fn is_page(&self, pageno: u32) -> bool {
        self.argument == Self::page_argument(pageno)
    }
}

impl FromStr for PostbackTarget {
    type Err = ParseError;

    fn from_str(href: &str) -> Result<Self, Self::Err> {
        let captures = DO_POSTBACK
            .captures(href)
            .ok_or_else(|| ParseError::MalformedPostback(href.to_string()))?;

        Ok(PostbackTarget {
            target: captures[1].to_string(),
            argument: captures[2].to_string(),
        })
    }
}

impl fmt::Display for PostbackTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.target, self.argument)
    }
}
