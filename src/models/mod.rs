pub mod forms;
pub mod partner;
pub mod product;

pub use forms::{
    ContactRequest, EsgInterest, ExperienceLevel, InvestorProfile, ProfileType, CONTACT_TOPICS,
};
pub use partner::{MarketplaceListing, Partner};
pub use product::{Product, ScoreBand};
