//! Static reference tables: project templates and deployment checklists.
//!
//! Both tables are compiled in and never change at runtime. Lookups by an
//! unknown template name yield `None`; platforms are a closed enum so every
//! selectable value has a checklist.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FormError;

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

// =============================================================================
// TEMPLATES
// =============================================================================

/// A named preset used to bulk-fill the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub name: &'static str,
    pub app_name: &'static str,
    pub app_description: &'static str,
    pub feature_list: &'static [&'static str],
}

impl Template {
    /// Owned copy of the seed features.
    #[must_use]
    pub fn features(&self) -> Vec<String> {
        self.feature_list.iter().map(|f| (*f).to_owned()).collect()
    }
}

/// Template table in display order.
pub const TEMPLATES: &[Template] = &[
    Template {
        name: "Blog",
        app_name: "My Blog",
        app_description: "A blogging platform to share posts and articles.",
        feature_list: &["Create posts", "Edit posts", "Comment system"],
    },
    Template {
        name: "ECommerce",
        app_name: "ShopEasy",
        app_description: "An online store to sell products.",
        feature_list: &["Product catalog", "Shopping cart", "Checkout system"],
    },
];

/// Look up a template by its exact name.
#[must_use]
pub fn find_template(name: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.name == name)
}

/// Template names in table order.
pub fn template_names() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|t| t.name)
}

// =============================================================================
// DEPLOYMENT PLATFORMS
// =============================================================================

/// Hosting platform whose deployment checklist is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    Vercel,
    Netlify,
    #[serde(rename = "AWS")]
    Aws,
}

const VERCEL_STEPS: &[&str] = &[
    "Sign up or log in to Vercel.",
    "Connect your GitHub repository.",
    "Configure build settings and deploy.",
    "Your app is live on a custom Vercel URL.",
];

const NETLIFY_STEPS: &[&str] = &[
    "Sign up or log in to Netlify.",
    "Drag and drop your build folder or connect a GitHub repository.",
    "Configure settings and deploy.",
    "Your app is live on a Netlify URL.",
];

const AWS_STEPS: &[&str] = &[
    "Create an AWS account and set up a server (EC2) or Lambda function.",
    "Install and configure the AWS CLI.",
    "Deploy your app using the AWS CLI or Elastic Beanstalk.",
    "Your app is live on an AWS-hosted domain.",
];

impl Platform {
    /// Every platform, in selector order.
    pub const ALL: [Self; 3] = [Self::Vercel, Self::Netlify, Self::Aws];

    /// Display name, also the accepted parse form.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Vercel => "Vercel",
            Self::Netlify => "Netlify",
            Self::Aws => "AWS",
        }
    }

    /// Ordered deployment checklist for this platform.
    #[must_use]
    pub fn steps(self) -> &'static [&'static str] {
        match self {
            Self::Vercel => VERCEL_STEPS,
            Self::Netlify => NETLIFY_STEPS,
            Self::Aws => AWS_STEPS,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = FormError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FormError::UnknownPlatform(trimmed.to_owned()))
    }
}
