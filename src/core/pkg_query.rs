use crate::domain::model::Invocation;
use crate::utils::error::{Result, TemplateError};
use regex::Regex;

/// How a package argument selects lines from the `rpm -qa` listing. Like
/// `grep`, the argument is a regular expression unless fixed-string matching
/// is requested.
#[derive(Debug, Clone)]
pub enum PackageMatcher {
    Literal(String),
    Pattern(Regex),
}

impl PackageMatcher {
    pub fn new(package: &str, fixed_strings: bool) -> Result<Self> {
        if fixed_strings {
            return Ok(PackageMatcher::Literal(package.to_string()));
        }

        Regex::new(package)
            .map(PackageMatcher::Pattern)
            .map_err(|source| TemplateError::PatternError {
                pattern: package.to_string(),
                source,
            })
    }

    pub fn is_match(&self, line: &str) -> bool {
        match self {
            PackageMatcher::Literal(needle) => line.contains(needle.as_str()),
            PackageMatcher::Pattern(re) => re.is_match(line),
        }
    }
}

/// `<rpm> -qa`, run without a shell so the package name never reaches one.
pub fn listing_invocation(rpm_program: &str) -> Invocation {
    Invocation::argv(rpm_program, ["-qa"])
}

/// Keeps the matching lines of `listing` in byte order.
pub fn filter_packages(listing: &str, matcher: &PackageMatcher) -> Vec<String> {
    let mut packages: Vec<String> = listing
        .lines()
        .filter(|line| matcher.is_match(line))
        .map(str::to_string)
        .collect();
    packages.sort();
    packages
}
