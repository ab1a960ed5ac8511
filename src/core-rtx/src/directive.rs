/// The closed set of directives this crate writes into a robots.txt file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Allow,
    Disallow,
    UserAgent,
    Sitemap,
    Host,
    ContentSignal,
}

impl Directive {
    /// The directive's name, exactly as it appears before the colon.
    pub const fn name(self) -> &'static str {
        match self {
            Directive::Allow => "Allow",
            Directive::Disallow => "Disallow",
            Directive::UserAgent => "User-agent",
            Directive::Sitemap => "Sitemap",
            Directive::Host => "Host",
            Directive::ContentSignal => "Content-Signal",
        }
    }

    /// Renders a single `Name: value` line.
    pub fn format(self, value: &str) -> String {
        format!("{}: {}", self.name(), value)
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
