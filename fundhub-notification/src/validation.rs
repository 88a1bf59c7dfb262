//! Turns a loosely-typed `POST /notify` body into a [`NewNotification`].
//!
//! Every rejection surfaces to the caller as the same 400 body; the variant
//! only shows up in logs.

use serde::Deserialize;

use fundhub_shared::errors::AppError;

use crate::models::{NewNotification, NotificationKind};

/// Width of the `notifications.target_user_id` column.
pub const MAX_TARGET_USER_ID_LEN: usize = 64;

/// Ids arrive as JSON numbers or strings depending on the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Int(i64),
    Text(String),
}

impl Identifier {
    /// A strictly positive numeric id, or `None` when the value is unusable.
    pub fn as_positive_id(&self) -> Option<u64> {
        let id = match self {
            Self::Int(n) => u64::try_from(*n).ok()?,
            Self::Text(s) => s.trim().parse::<u64>().ok()?,
        };
        (id > 0).then_some(id)
    }

    /// The id as stored text, or `None` for blank strings.
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Int(n) => Some(n.to_string()),
            Self::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateNotificationRequest {
    #[serde(default)]
    pub target_user_id: Option<Identifier>,
    #[serde(default, rename = "type")]
    pub notification_type: Option<String>,
    #[serde(default)]
    pub fund_id: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("request body is not a JSON object of the expected shape")]
    MalformedBody,

    #[error("fund_id is missing or not a positive integer")]
    MissingFundId,

    #[error("type is missing")]
    MissingType,

    #[error("unknown notification type `{0}`")]
    UnknownType(String),

    #[error("target_user_id is required for `{0}`")]
    MissingTargetUser(&'static str),

    #[error("target_user_id is longer than {MAX_TARGET_USER_ID_LEN} characters")]
    TargetUserTooLong,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        tracing::debug!(reason = %err, "notification request rejected");
        AppError::missing_parameters()
    }
}

impl CreateNotificationRequest {
    pub fn validate(self) -> Result<NewNotification, ValidationError> {
        let fund_id = self
            .fund_id
            .as_ref()
            .and_then(Identifier::as_positive_id)
            .ok_or(ValidationError::MissingFundId)?;

        let type_name = self
            .notification_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ValidationError::MissingType)?;

        let target_user_id = self.target_user_id.and_then(Identifier::into_text);
        if target_user_id
            .as_deref()
            .is_some_and(|t| t.chars().count() > MAX_TARGET_USER_ID_LEN)
        {
            return Err(ValidationError::TargetUserTooLong);
        }
        let kind = kind_for(type_name, target_user_id)?;

        Ok(NewNotification { kind, fund_id })
    }
}

fn kind_for(
    type_name: &str,
    target_user_id: Option<String>,
) -> Result<NotificationKind, ValidationError> {
    match type_name {
        NotificationKind::APPROVED_APPLICATION => target_user_id
            .map(|target_user_id| NotificationKind::ApprovedApplication { target_user_id })
            .ok_or(ValidationError::MissingTargetUser(
                NotificationKind::APPROVED_APPLICATION,
            )),
        NotificationKind::REJECTED_APPLICATION => target_user_id
            .map(|target_user_id| NotificationKind::RejectedApplication { target_user_id })
            .ok_or(ValidationError::MissingTargetUser(
                NotificationKind::REJECTED_APPLICATION,
            )),
        NotificationKind::NEW_APPLICANT => Ok(NotificationKind::NewApplicant { target_user_id }),
        other => Err(ValidationError::UnknownType(other.to_string())),
    }
}
