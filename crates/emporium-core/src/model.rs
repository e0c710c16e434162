//! Classifier model names served by the demo model route.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A supported classifier model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    /// AlexNet.
    Alexnet,
    /// ResNet.
    Resnet,
    /// LeNet.
    Lenet,
}

impl ModelName {
    /// All accepted names, lowercase.
    pub const VARIANTS: [&'static str; 3] = ["alexnet", "resnet", "lenet"];

    /// Returns the lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alexnet => "alexnet",
            Self::Resnet => "resnet",
            Self::Lenet => "lenet",
        }
    }

    /// Returns the canned message for this model.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Alexnet => "Deep Learning FTW!",
            Self::Lenet => "LeCNN all the images",
            Self::Resnet => "Have some residuals",
        }
    }
}

impl std::str::FromStr for ModelName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alexnet" => Ok(Self::Alexnet),
            "resnet" => Ok(Self::Resnet),
            "lenet" => Ok(Self::Lenet),
            other => Err(Error::validation(
                "model_name",
                format!("'{other}' is not one of {:?}", Self::VARIANTS),
            )),
        }
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
