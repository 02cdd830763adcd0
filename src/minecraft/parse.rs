use std::{fmt, str::FromStr};

use crate::error::Error;

/// A parsed `group:artifact:version[:classifier][@extension]` library name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MavenCoordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub classifier: Option<String>,
    pub extension: String,
}

impl MavenCoordinate {
    /// Repository-relative path of the file this coordinate names.
    pub fn path(&self) -> String {
        let file = match &self.classifier {
            Some(classifier) => format!(
                "{}-{}-{}.{}",
                self.artifact, self.version, classifier, self.extension
            ),
            None => format!("{}-{}.{}", self.artifact, self.version, self.extension),
        };

        format!(
            "{}/{}/{}/{}",
            self.group.replace('.', "/"),
            self.artifact,
            self.version,
            file
        )
    }
}

impl FromStr for MavenCoordinate {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let (coordinate, extension) = match name.split_once('@') {
            Some((coordinate, extension)) => (coordinate, extension),
            None => (name, "jar"),
        };

        let parts: Vec<&str> = coordinate.split(':').collect();
        if !(3..=4).contains(&parts.len())
            || parts.iter().any(|part| part.is_empty())
            || extension.is_empty()
        {
            return Err(Error::InvalidCoordinate(name.to_string()));
        }

        Ok(Self {
            group: parts[0].to_string(),
            artifact: parts[1].to_string(),
            version: parts[2].to_string(),
            classifier: parts.get(3).map(|c| c.to_string()),
            extension: extension.to_string(),
        })
    }
}

impl fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        if self.extension != "jar" {
            write!(f, "@{}", self.extension)?;
        }
        Ok(())
    }
}
