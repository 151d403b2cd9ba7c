//! Interface languages and user preferences.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::resource::{ListOrder, Resource, ResourceKind};

define_resource! {
    /// A supported interface language, listed alphabetically.
    Language: Language / NewLanguage, order = name {
        /// ISO 639-1 code.
        code: String,
        /// English name.
        name: String,
    }
}

define_resource! {
    /// A language a user speaks.
    UserLanguagePreference: UserLanguagePreference / NewUserLanguagePreference {
        /// Owning account.
        user_id: i32,
        /// Selected language.
        language_id: i32,
        /// Whether this is the user's main language.
        is_primary: bool,
    }
}
