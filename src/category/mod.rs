//! Record categories and the filter that decides which of them reach a sink.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Concrete, emittable categories. The wildcard is not one of them:
/// "everything" lives on [`CategoryFilter::All`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Plain, untagged output.
    Info,
    /// Developer diagnostics tagged with the calling function.
    Debug,
    /// Fixed-shape "function completed" marker.
    Success,
    /// Failures tagged with file, line, and function.
    Error,
}

impl Category {
    /// Lowercase because config files and CLI args use lowercase names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Info, Self::Debug, Self::Success, Self::Error]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "success" | "ok" => Ok(Self::Success),
            "error" | "err" => Ok(Self::Error),
            _ => Err(crate::Error::InvalidCategory(s.to_string())),
        }
    }
}

/// The active set of enabled categories.
///
/// `All` and `Only` holding all four categories accept the same records, but stay
/// distinguishable so a reconfiguration to "everything, including future categories"
/// is not confused with an explicit list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Wildcard: every category passes.
    #[default]
    All,
    /// Only the listed categories pass. Empty suppresses everything.
    Only(BTreeSet<Category>),
}

impl CategoryFilter {
    #[must_use]
    pub const fn all() -> Self {
        Self::All
    }

    /// Suppresses every category.
    #[must_use]
    pub const fn none() -> Self {
        Self::Only(BTreeSet::new())
    }

    #[must_use]
    pub fn only(categories: impl IntoIterator<Item = Category>) -> Self {
        Self::Only(categories.into_iter().collect())
    }

    /// Builds a filter from textual names as found in config files and CLI args.
    ///
    /// `all` anywhere in the list turns the filter into the wildcard; an empty list
    /// yields the empty filter.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidCategory`] for the first unknown name.
    pub fn from_selectors<I, S>(selectors: I) -> Result<Self, crate::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        let mut wildcard = false;

        for selector in selectors {
            let name = selector.as_ref();
            if name.trim().eq_ignore_ascii_case("all") {
                wildcard = true;
            } else {
                set.insert(name.parse::<Category>()?);
            }
        }

        Ok(if wildcard { Self::All } else { Self::Only(set) })
    }

    /// Checked before any formatting or I/O so suppressed records cost nothing.
    #[must_use]
    pub fn allows(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => set.contains(&category),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Only(set) if set.is_empty())
    }
}

impl FromIterator<Category> for CategoryFilter {
    fn from_iter<T: IntoIterator<Item = Category>>(iter: T) -> Self {
        Self::only(iter)
    }
}

impl<const N: usize> From<[Category; N]> for CategoryFilter {
    fn from(categories: [Category; N]) -> Self {
        Self::only(categories)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::only([category])
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(set) => {
                let names: Vec<&str> = set.iter().map(|c| c.as_str()).collect();
                f.write_str(&names.join(","))
            }
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = crate::Error;

    /// Comma-separated list, e.g. `info,error` or `all`. Blank input is the empty filter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_selectors(s.split(',').filter(|part| !part.trim().is_empty()))
    }
}
