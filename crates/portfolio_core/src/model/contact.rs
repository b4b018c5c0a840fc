//! Contact channel model.

use serde::{Deserialize, Serialize};

/// Public contact channels shown on the contact console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactProfile {
    pub name: String,
    pub email: String,
    pub linkedin_url: String,
    pub github_url: String,
    /// Site-relative path of the resume PDF.
    pub resume_href: String,
}

impl ContactProfile {
    /// Returns the `mailto:` link for the profile e-mail.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Returns the resume download descriptor.
    pub fn resume_download(&self) -> ResumeDownload {
        let file_name = self
            .resume_href
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or("resume.pdf")
            .to_string();
        ResumeDownload {
            href: self.resume_href.clone(),
            file_name,
        }
    }
}

/// Download affordance for the resume PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDownload {
    pub href: String,
    /// Suggested file name for the browser `download` attribute.
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::ContactProfile;

    fn profile(resume_href: &str) -> ContactProfile {
        ContactProfile {
            name: "A".to_string(),
            email: "a@example.com".to_string(),
            linkedin_url: String::new(),
            github_url: String::new(),
            resume_href: resume_href.to_string(),
        }
    }

    #[test]
    fn resume_download_uses_last_path_segment() {
        let download = profile("/resume/a-cv.pdf").resume_download();
        assert_eq!(download.href, "/resume/a-cv.pdf");
        assert_eq!(download.file_name, "a-cv.pdf");
    }

    #[test]
    fn resume_download_falls_back_for_empty_path() {
        assert_eq!(profile("").resume_download().file_name, "resume.pdf");
    }

    #[test]
    fn mailto_prefixes_email() {
        assert_eq!(profile("/x.pdf").mailto(), "mailto:a@example.com");
    }
}
