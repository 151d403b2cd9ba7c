//! Payments, provider credits and outbound webhooks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::resource::{ListOrder, Resource, ResourceKind};

define_resource! {
    /// A payment against an appointment.
    Payment: Payment / NewPayment {
        /// Paid appointment.
        appointment_id: i32,
        /// Amount in cents.
        amount_cents: i64,
        /// ISO 4217 currency code.
        currency: String,
        /// Free-form status such as `pending` or `paid`.
        status: String,
        /// Reference issued by the payment gateway.
        gateway_reference: Option<String>,
    }
    stamped { created_at }
}

define_resource! {
    /// A provider's lead credit balance.
    ProviderCredit: ProviderCredit / NewProviderCredit {
        /// Owning provider.
        provider_id: i32,
        /// Remaining credits.
        balance: i32,
    }
}

define_resource! {
    /// A purchase of lead credits.
    CreditPurchase: CreditPurchase / NewCreditPurchase {
        /// Purchasing provider.
        provider_id: i32,
        /// Credits bought.
        credits: i32,
        /// Amount paid in cents.
        amount_cents: i64,
    }
    stamped { purchased_at }
}

define_resource! {
    /// A registered webhook endpoint.
    Webhook: Webhook / NewWebhook {
        /// Delivery URL.
        url: String,
        /// Subscribed event name.
        event_type: String,
        /// Signing secret.
        secret: Option<String>,
        /// Whether deliveries are attempted.
        active: bool,
    }
    stamped { created_at }
}

define_resource! {
    /// One delivery for a webhook.
    WebhookEvent: WebhookEvent / NewWebhookEvent {
        /// Target webhook.
        webhook_id: i32,
        /// Event name.
        event_type: String,
        /// Delivered JSON body.
        payload: Value,
        /// Whether delivery succeeded.
        delivered: bool,
        /// Delivery attempts so far.
        attempts: i32,
    }
    stamped { created_at }
}
