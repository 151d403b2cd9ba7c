//! Client-provider conversations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::resource::{ListOrder, Resource, ResourceKind};

define_resource! {
    /// A thread between one client and one provider.
    Conversation: Conversation / NewConversation {
        /// Participating client.
        client_id: i32,
        /// Participating provider.
        provider_id: i32,
    }
    stamped { created_at }
}

define_resource! {
    /// One message in a conversation.
    Message: Message / NewMessage {
        /// Parent conversation.
        conversation_id: i32,
        /// Sending account.
        sender_id: i32,
        /// Message text.
        body: String,
        /// When the recipient read it.
        read_at: Option<DateTime<Utc>>,
    }
    stamped {
        /// Set when the message is stored.
        sent_at,
    }
}
