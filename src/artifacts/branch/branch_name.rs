use crate::artifacts::branch::{INVALID_BRANCH_NAME_REGEX, REMOTE_BRANCH_SEPARATOR};
use crate::errors::TwigError;
use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!(TwigError::InvalidBranchName(name));
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(&name) {
            anyhow::bail!(TwigError::InvalidBranchName(name));
        } else {
            Ok(Self(name))
        }
    }

    /// Name under which `fetch` stores a remote branch: `<branch>@<remote>`
    pub fn for_remote(branch: &BranchName, remote: &str) -> anyhow::Result<Self> {
        Self::try_parse(format!("{branch}{REMOTE_BRANCH_SEPARATOR}{remote}"))
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for BranchName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BranchName {
    type Error = anyhow::Error;

    fn try_from(value: String) -> anyhow::Result<Self> {
        Self::try_parse(value)
    }
}

impl From<BranchName> for String {
    fn from(value: BranchName) -> Self {
        value.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
