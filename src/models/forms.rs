use crate::error::{EsgError, Result};

/// User profile types offered on the profiling page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileType {
    PrivateInvestor,
    FinancialAdvisor,
}

impl ProfileType {
    pub const ALL: [ProfileType; 2] = [ProfileType::PrivateInvestor, ProfileType::FinancialAdvisor];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileType::PrivateInvestor => "Private Investor",
            ProfileType::FinancialAdvisor => "Financial Advisor",
        }
    }
}

/// Self-reported investing experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
        ExperienceLevel::Expert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

/// Declared interest in ESG topics. Display-only preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EsgInterest {
    High,
    Medium,
    Low,
}

impl EsgInterest {
    pub const ALL: [EsgInterest; 3] = [EsgInterest::High, EsgInterest::Medium, EsgInterest::Low];

    pub fn label(&self) -> &'static str {
        match self {
            EsgInterest::High => "High",
            EsgInterest::Medium => "Medium",
            EsgInterest::Low => "Low",
        }
    }
}

/// Answers collected by the profiling form. Never persisted.
#[derive(Debug, Clone)]
pub struct InvestorProfile {
    pub profile_type: ProfileType,
    pub age: u8,
    pub experience: ExperienceLevel,
    pub esg_interest: EsgInterest,
}

impl InvestorProfile {
    /// Tailored next-step suggestion shown under the profile summary.
    pub fn suggestion(&self) -> &'static str {
        match (self.profile_type, self.esg_interest) {
            (ProfileType::PrivateInvestor, EsgInterest::High) => {
                "Given your high ESG sensitivity, explore products scoring above 80 \
                 and always check the green activity share to avoid greenwashing."
            }
            (ProfileType::PrivateInvestor, _) => {
                "Even with moderate ESG interest, you can find products that balance \
                 returns and sustainability."
            }
            (ProfileType::FinancialAdvisor, _) => {
                "Use the comparator to analyze product ESG characteristics in detail \
                 and give your clients more precise advice."
            }
        }
    }
}

/// Topics selectable on the contact form.
pub const CONTACT_TOPICS: [&str; 4] = [
    "ESG investments",
    "Financial advice",
    "Training courses",
    "Partnership",
];

/// A contact request. Validated for required-field presence, never stored.
#[derive(Debug, Clone, Default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub topics: Vec<String>,
    pub message: String,
}

impl ContactRequest {
    /// Required fields are name, email, and message. Phone and topics are optional.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(EsgError::InvalidInput("name is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(EsgError::InvalidInput("email is required".to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(EsgError::InvalidInput("message is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> ContactRequest {
        ContactRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            topics: vec!["ESG investments".to_string()],
            message: "Please send me the portfolio brochure.".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn test_validate_requires_name_email_message() {
        let mut missing_name = sample_request();
        missing_name.name = "  ".to_string();
        assert!(missing_name.validate().is_err());

        let mut missing_email = sample_request();
        missing_email.email = String::new();
        assert!(missing_email.validate().is_err());

        let mut missing_message = sample_request();
        missing_message.message = String::new();
        assert!(missing_message.validate().is_err());
    }

    #[test]
    fn test_phone_and_topics_optional() {
        let mut request = sample_request();
        request.phone = String::new();
        request.topics.clear();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_suggestion_branches() {
        let high = InvestorProfile {
            profile_type: ProfileType::PrivateInvestor,
            age: 35,
            experience: ExperienceLevel::Intermediate,
            esg_interest: EsgInterest::High,
        };
        assert!(high.suggestion().contains("greenwashing"));

        let low = InvestorProfile {
            esg_interest: EsgInterest::Low,
            ..high.clone()
        };
        assert!(low.suggestion().contains("balance"));

        let advisor = InvestorProfile {
            profile_type: ProfileType::FinancialAdvisor,
            ..high
        };
        assert!(advisor.suggestion().contains("comparator"));
    }
}
