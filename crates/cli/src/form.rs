//! Form collector: three free-text fields with a presence check.

pub const REQUIRED_FIELDS_ERROR: &str = "All fields are required.";

/// Label and example value shown when prompting for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub placeholder: &'static str,
}

pub const EDUCATION_FIELD: FormField = FormField {
    label: "Education",
    placeholder: "e.g., B.Tech Computer Science",
};

pub const SKILLS_FIELD: FormField = FormField {
    label: "Skills (comma-separated)",
    placeholder: "e.g., Python, FastAPI",
};

pub const LOCATION_FIELD: FormField = FormField {
    label: "Location",
    placeholder: "e.g., Pune",
};

/// Raw field values handed to the coordinator. Nothing is trimmed or split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub education: String,
    pub skills_raw: String,
    pub location: String,
}

#[derive(Debug, Clone, Default)]
pub struct InternshipForm {
    education: String,
    skills: String,
    location: String,
    error: String,
}

impl InternshipForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_education(&mut self, value: impl Into<String>) {
        self.education = value.into();
    }

    pub fn set_skills(&mut self, value: impl Into<String>) {
        self.skills = value.into();
    }

    pub fn set_location(&mut self, value: impl Into<String>) {
        self.location = value.into();
    }

    /// Validation error from the last submit attempt, empty if none.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Validate and emit a submission.
    ///
    /// Any empty field (no trimming) sets the error and emits nothing.
    pub fn submit(&mut self) -> Option<FormSubmission> {
        if self.education.is_empty() || self.skills.is_empty() || self.location.is_empty() {
            self.error = REQUIRED_FIELDS_ERROR.to_string();
            return None;
        }

        self.error.clear();
        Some(FormSubmission {
            education: self.education.clone(),
            skills_raw: self.skills.clone(),
            location: self.location.clone(),
        })
    }
}

pub fn submit_label(loading: bool) -> &'static str {
    if loading {
        "Loading..."
    } else {
        "Get Recommendations"
    }
}

pub fn is_submit_enabled(loading: bool) -> bool {
    !loading
}
