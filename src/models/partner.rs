/// A partner organization shown on the marketplace page.
#[derive(Debug, Clone, Copy)]
pub struct Partner {
    pub name: &'static str,
    pub kind: &'static str,
    pub blurb: &'static str,
}

/// An investment opportunity offered through a partner.
#[derive(Debug, Clone, Copy)]
pub struct MarketplaceListing {
    pub name: &'static str,
    pub partner: &'static str,
    pub min_investment: u32,
    pub expected_return: &'static str,
    pub impact: &'static str,
}
