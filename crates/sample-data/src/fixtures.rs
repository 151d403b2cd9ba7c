//! Fixed reference rows shared by every seed.
//!
//! Categories, languages, achievements and partners do not vary between
//! seeds. Service templates give generated providers plausible offerings.

use crate::seed::{AchievementSeed, CategorySeed, LanguageSeed, PartnerSeed};

/// `(name, description, icon)` for each service category.
const CATEGORIES: &[(&str, &str, &str)] = &[
    ("Beauty", "Hair, nails and at-home treatments", "scissors"),
    ("Cleaning", "Domestic and end-of-tenancy cleaning", "sparkles"),
    ("Electrical", "Wiring, lighting and appliance installs", "bolt"),
    ("Gardening", "Lawn care, pruning and planting", "leaf"),
    ("Plumbing", "Leaks, boilers and bathroom fitting", "wrench"),
    ("Tutoring", "Lessons and exam preparation", "book"),
];

const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("es", "Spanish"), ("fr", "French")];

const ACHIEVEMENTS: &[(&str, &str, i32)] = &[
    ("First Booking", "Complete your first appointment", 10),
    ("Regular", "Complete ten appointments", 50),
    ("Top Rated", "Keep a rating above 4.8 for a month", 100),
];

const PARTNERS: &[(&str, &str, &str)] = &[
    ("Stripe", "payments", "https://stripe.com"),
    ("Mapbox", "mapping", "https://www.mapbox.com"),
];

/// A service a provider in the given category might offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ServiceTemplate {
    pub category: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_price_cents: i64,
    pub duration_minutes: i32,
}

const fn template(
    category: &'static str,
    name: &'static str,
    description: &'static str,
    base_price_cents: i64,
    duration_minutes: i32,
) -> ServiceTemplate {
    ServiceTemplate {
        category,
        name,
        description,
        base_price_cents,
        duration_minutes,
    }
}

pub(crate) const SERVICE_TEMPLATES: &[ServiceTemplate] = &[
    template("Beauty", "Haircut at home", "Cut and style in your home", 3500, 45),
    template("Beauty", "Manicure", "Classic manicure with polish", 2500, 40),
    template("Cleaning", "Standard clean", "Kitchen, bathroom and living areas", 6000, 120),
    template("Cleaning", "Deep clean", "Top-to-bottom clean including appliances", 15000, 300),
    template("Electrical", "Light fitting", "Install or replace a light fitting", 5500, 60),
    template("Electrical", "Safety inspection", "Full electrical safety check", 12000, 120),
    template("Gardening", "Lawn mowing", "Mow, edge and clear clippings", 3000, 60),
    template("Gardening", "Hedge trimming", "Trim and shape hedges", 4500, 90),
    template("Plumbing", "Leak repair", "Find and fix a leak", 6500, 60),
    template("Plumbing", "Boiler service", "Annual boiler service", 9000, 90),
    template("Tutoring", "Maths lesson", "One hour of maths tuition", 4000, 60),
    template("Tutoring", "Language lesson", "Conversation practice with a native speaker", 3500, 60),
];

/// Returns the fixed service categories.
#[must_use]
pub fn categories() -> Vec<CategorySeed> {
    CATEGORIES
        .iter()
        .map(|&(name, description, icon)| CategorySeed {
            name: name.to_owned(),
            description: description.to_owned(),
            icon: icon.to_owned(),
        })
        .collect()
}

/// Returns the fixed interface languages.
#[must_use]
pub fn languages() -> Vec<LanguageSeed> {
    LANGUAGES
        .iter()
        .map(|&(code, name)| LanguageSeed {
            code: code.to_owned(),
            name: name.to_owned(),
        })
        .collect()
}

/// Returns the fixed achievement definitions.
#[must_use]
pub fn achievements() -> Vec<AchievementSeed> {
    ACHIEVEMENTS
        .iter()
        .map(|&(name, description, points)| AchievementSeed {
            name: name.to_owned(),
            description: description.to_owned(),
            points,
        })
        .collect()
}

/// Returns the fixed third-party partners.
#[must_use]
pub fn partners() -> Vec<PartnerSeed> {
    PARTNERS
        .iter()
        .map(|&(name, partner_type, website)| PartnerSeed {
            name: name.to_owned(),
            partner_type: partner_type.to_owned(),
            website: website.to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_template_names_a_known_category() {
        let names: HashSet<_> = CATEGORIES.iter().map(|(name, _, _)| *name).collect();
        for template in SERVICE_TEMPLATES {
            assert!(
                names.contains(template.category),
                "unknown category {}",
                template.category
            );
        }
    }

    #[test]
    fn every_category_has_a_template() {
        for (name, _, _) in CATEGORIES {
            assert!(SERVICE_TEMPLATES.iter().any(|t| t.category == *name));
        }
    }

    #[test]
    fn fixture_names_are_unique() {
        let categories: HashSet<_> = categories().into_iter().map(|c| c.name).collect();
        let languages: HashSet<_> = languages().into_iter().map(|l| l.code).collect();
        let achievements: HashSet<_> = achievements().into_iter().map(|a| a.name).collect();
        let partners: HashSet<_> = partners().into_iter().map(|p| p.name).collect();

        assert_eq!(categories.len(), CATEGORIES.len());
        assert_eq!(languages.len(), LANGUAGES.len());
        assert_eq!(achievements.len(), ACHIEVEMENTS.len());
        assert_eq!(partners.len(), PARTNERS.len());
    }
}
