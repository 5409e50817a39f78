use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::dataset::ProductCatalog;
use crate::error::{EsgError, Result};
use crate::models::{
    ContactRequest, EsgInterest, ExperienceLevel, InvestorProfile, ProfileType, Product,
    CONTACT_TOPICS,
};

/// Pages reachable from the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Profiling,
    Dashboard,
    Comparator,
    Partners,
    Contacts,
    Quit,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Profiling,
        Page::Dashboard,
        Page::Comparator,
        Page::Partners,
        Page::Contacts,
        Page::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Homepage",
            Page::Profiling => "User Profiling",
            Page::Dashboard => "ESG Portfolio Dashboard",
            Page::Comparator => "Comparator",
            Page::Partners => "Partners & Marketplace",
            Page::Contacts => "Contacts",
            Page::Quit => "Quit",
        }
    }
}

/// Prompt for the next page to visit.
pub fn prompt_page() -> Result<Page> {
    let labels: Vec<&str> = Page::ALL.iter().map(|p| p.label()).collect();

    let selection = Select::new()
        .with_prompt("Navigation")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Page::ALL[selection])
}

/// Prompt for one product from the catalog.
pub fn prompt_product<'a>(
    catalog: &'a ProductCatalog,
    prompt: &str,
    default: usize,
) -> Result<&'a Product> {
    let names = catalog.names();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&names)
        .default(default.min(names.len().saturating_sub(1)))
        .interact()?;

    Ok(&catalog.products()[selection])
}

/// Prompt for the two comparison slots.
///
/// Defaults differ so that accepting both prompts yields a valid pair; the
/// caller still has to handle the same-product condition.
pub fn prompt_product_pair<'a>(
    catalog: &'a ProductCatalog,
) -> Result<(&'a Product, &'a Product)> {
    let first = prompt_product(catalog, "Select the first product", 0)?;
    let second = prompt_product(catalog, "Select the second product", 1)?;
    Ok((first, second))
}

/// Prompt for the user's age.
pub fn prompt_age() -> Result<u8> {
    let input: String = Input::new()
        .with_prompt("Age")
        .default("35".to_string())
        .interact_text()?;

    let age: u8 = input
        .parse()
        .map_err(|_| EsgError::InvalidInput("Invalid number".to_string()))?;

    if !(18..=80).contains(&age) {
        return Err(EsgError::InvalidInput(
            "Age must be between 18 and 80".to_string(),
        ));
    }

    Ok(age)
}

/// Collect the profiling form.
pub fn collect_investor_profile() -> Result<InvestorProfile> {
    let type_labels: Vec<&str> = ProfileType::ALL.iter().map(|t| t.label()).collect();
    let type_selection = Select::new()
        .with_prompt("Choose your profile")
        .items(&type_labels)
        .default(0)
        .interact()?;

    let age = prompt_age()?;

    let experience_labels: Vec<&str> = ExperienceLevel::ALL.iter().map(|e| e.label()).collect();
    let experience_selection = Select::new()
        .with_prompt("Investing experience")
        .items(&experience_labels)
        .default(0)
        .interact()?;

    let interest_labels: Vec<&str> = EsgInterest::ALL.iter().map(|i| i.label()).collect();
    let interest_selection = Select::new()
        .with_prompt("Interest in ESG topics")
        .items(&interest_labels)
        .default(0)
        .interact()?;

    Ok(InvestorProfile {
        profile_type: ProfileType::ALL[type_selection],
        age,
        experience: ExperienceLevel::ALL[experience_selection],
        esg_interest: EsgInterest::ALL[interest_selection],
    })
}

/// Collect the contact form. Presence validation happens in the caller.
pub fn collect_contact_request() -> Result<ContactRequest> {
    let name: String = Input::new()
        .with_prompt("Full name")
        .allow_empty(true)
        .interact_text()?;

    let email: String = Input::new()
        .with_prompt("Email")
        .allow_empty(true)
        .interact_text()?;

    let phone: String = Input::new()
        .with_prompt("Phone (optional)")
        .allow_empty(true)
        .interact_text()?;

    let topic_selections = MultiSelect::new()
        .with_prompt("I am interested in")
        .items(&CONTACT_TOPICS)
        .interact()?;

    let topics = topic_selections
        .into_iter()
        .map(|i| CONTACT_TOPICS[i].to_string())
        .collect();

    let message: String = Input::new()
        .with_prompt("Message")
        .allow_empty(true)
        .interact_text()?;

    Ok(ContactRequest {
        name,
        email,
        phone,
        topics,
        message,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
