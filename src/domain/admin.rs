//! Admin inbox: restaurant submission requests and contact messages.

use crate::domain::error::{DirectoryError, DirectoryResult};
use crate::domain::ids::next_prefixed_id;
use crate::domain::restaurant::{BudgetRange, PaymentMode, RestaurantType, Side};
use crate::storage::{JsonStore, CONTACT_MESSAGES_KEY, RESTAURANT_REQUESTS_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

const REQUEST_ID_PREFIX: &str = "req_";
const MESSAGE_ID_PREFIX: &str = "msg_";

fn require(field: &str, value: &str) -> DirectoryResult<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    Unread,
    Read,
}

/// A user-submitted restaurant awaiting moderation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRequest {
    pub id: String,
    #[serde(flatten)]
    pub details: RequestDetails,
    #[schema(value_type = String, format = DateTime)]
    pub submitted_at: DateTime<Utc>,
    pub status: RequestStatus,
}

/// The submitter-provided part of a request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetails {
    pub restaurant_name: String,
    pub cuisine: String,
    pub location: String,
    pub budget_range: BudgetRange,
    #[serde(rename = "type")]
    pub kind: RestaurantType,
    #[serde(default)]
    pub payment_mode: Vec<PaymentMode>,
    pub sides: Side,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub submitted_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub menu_images: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    #[serde(flatten)]
    pub details: MessageDetails,
    #[schema(value_type = String, format = DateTime)]
    pub submitted_at: DateTime<Utc>,
    pub status: MessageStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageDetails {
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_restaurants: usize,
    pub total_reviews: usize,
    pub total_restaurant_requests: usize,
    pub pending_requests: usize,
    pub approved_requests: usize,
    pub total_contact_messages: usize,
    pub unread_messages: usize,
}

pub struct AdminInbox {
    store: JsonStore,
    requests: Vec<RestaurantRequest>,
    messages: Vec<ContactMessage>,
}

impl AdminInbox {
    pub async fn load(
        store: JsonStore,
        seed_requests: Vec<RestaurantRequest>,
        seed_messages: Vec<ContactMessage>,
    ) -> Self {
        let requests = match store.load(RESTAURANT_REQUESTS_KEY).await {
            Some(stored) => stored,
            None => {
                debug!(count = seed_requests.len(), "No stored restaurant requests, using seed");
                seed_requests
            }
        };
        let messages = match store.load(CONTACT_MESSAGES_KEY).await {
            Some(stored) => stored,
            None => {
                debug!(count = seed_messages.len(), "No stored contact messages, using seed");
                seed_messages
            }
        };
        Self {
            store,
            requests,
            messages,
        }
    }

    // --- Restaurant requests ---

    pub fn requests(&self) -> &[RestaurantRequest] {
        &self.requests
    }

    pub fn request(&self, id: &str) -> Option<&RestaurantRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn pending_requests(&self) -> Vec<RestaurantRequest> {
        self.requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .cloned()
            .collect()
    }

    pub async fn create_request(&mut self, details: RequestDetails) -> DirectoryResult<RestaurantRequest> {
        require("restaurantName", &details.restaurant_name)?;
        require("location", &details.location)?;
        require("submittedBy", &details.submitted_by)?;

        let request = RestaurantRequest {
            id: next_prefixed_id(REQUEST_ID_PREFIX, self.requests.iter().map(|r| r.id.as_str())),
            details,
            submitted_at: Utc::now(),
            status: RequestStatus::Pending,
        };
        let mut next = self.requests.clone();
        next.push(request.clone());
        self.commit_requests(next).await?;
        Ok(request)
    }

    pub async fn set_request_status(
        &mut self,
        id: &str,
        status: RequestStatus,
    ) -> DirectoryResult<Option<RestaurantRequest>> {
        let mut next = self.requests.clone();
        let Some(request) = next.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        request.status = status;
        let updated = request.clone();
        self.commit_requests(next).await?;
        Ok(Some(updated))
    }

    pub async fn delete_request(&mut self, id: &str) -> DirectoryResult<bool> {
        let Some(index) = self.requests.iter().position(|r| r.id == id) else {
            return Ok(false);
        };
        let mut next = self.requests.clone();
        next.remove(index);
        self.commit_requests(next).await?;
        Ok(true)
    }

    // --- Contact messages ---

    pub fn messages(&self) -> &[ContactMessage] {
        &self.messages
    }

    pub fn message(&self, id: &str) -> Option<&ContactMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub async fn create_message(&mut self, details: MessageDetails) -> DirectoryResult<ContactMessage> {
        require("senderEmail", &details.sender_email)?;
        require("message", &details.message)?;

        let message = ContactMessage {
            id: next_prefixed_id(MESSAGE_ID_PREFIX, self.messages.iter().map(|m| m.id.as_str())),
            details,
            submitted_at: Utc::now(),
            status: MessageStatus::Unread,
        };
        let mut next = self.messages.clone();
        next.push(message.clone());
        self.commit_messages(next).await?;
        Ok(message)
    }

    pub async fn set_message_status(
        &mut self,
        id: &str,
        status: MessageStatus,
    ) -> DirectoryResult<Option<ContactMessage>> {
        let mut next = self.messages.clone();
        let Some(message) = next.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        message.status = status;
        let updated = message.clone();
        self.commit_messages(next).await?;
        Ok(Some(updated))
    }

    pub async fn delete_message(&mut self, id: &str) -> DirectoryResult<bool> {
        let Some(index) = self.messages.iter().position(|m| m.id == id) else {
            return Ok(false);
        };
        let mut next = self.messages.clone();
        next.remove(index);
        self.commit_messages(next).await?;
        Ok(true)
    }

    /// Inbox counters; the caller fills in the user/restaurant/review totals.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total_restaurant_requests: self.requests.len(),
            pending_requests: self
                .requests
                .iter()
                .filter(|r| r.status == RequestStatus::Pending)
                .count(),
            approved_requests: self
                .requests
                .iter()
                .filter(|r| r.status == RequestStatus::Approved)
                .count(),
            total_contact_messages: self.messages.len(),
            unread_messages: self
                .messages
                .iter()
                .filter(|m| m.status == MessageStatus::Unread)
                .count(),
            ..Default::default()
        }
    }

    // In-memory state changes only once the store has accepted the new collection.
    async fn commit_requests(&mut self, next: Vec<RestaurantRequest>) -> DirectoryResult<()> {
        self.store.save(RESTAURANT_REQUESTS_KEY, &next).await?;
        self.requests = next;
        Ok(())
    }

    async fn commit_messages(&mut self, next: Vec<ContactMessage>) -> DirectoryResult<()> {
        self.store.save(CONTACT_MESSAGES_KEY, &next).await?;
        self.messages = next;
        Ok(())
    }
}
