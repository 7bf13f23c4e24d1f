//! Static description of the wizard steps.

/// One text field on a step.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Leading icon, if any
    pub icon: Option<&'static str>,
    /// Render the value masked
    pub secret: bool,
}

impl FieldSpec {
    pub const fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            icon: None,
            secret: false,
        }
    }

    pub const fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub const fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}

/// One page of the wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSpec {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldSpec>,
}

/// The two setup steps shown by the demo.
pub fn default_steps() -> Vec<StepSpec> {
    vec![
        StepSpec {
            title: "Profile",
            description: "Tell us who you are.",
            fields: vec![
                FieldSpec::new("Name", "Ada Lovelace").icon("👤"),
                FieldSpec::new("Email", "ada@example.com").icon("@"),
            ],
        },
        StepSpec {
            title: "Security",
            description: "Choose a password for your account.",
            fields: vec![FieldSpec::new("Password", "at least one character")
                .icon("🔑")
                .secret()],
        },
    ]
}
